//! Tournament page: stages with joined matches and, for group stages, standings.

use crate::error::FeedError;
use crate::logic::fetch::{fetch_by_id, fetch_where};
use crate::logic::form::{classify, FormResult};
use crate::logic::resolver::Resolver;
use crate::models::{GameMatch, PointSystem, Stage, StageId, StandingsTable, TeamId, Tournament};
use crate::store::{DocumentStore, Filter};
use futures_util::future::try_join_all;
use futures_util::try_join;
use serde::Serialize;

/// A stage match with both clubs' display details.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageMatch {
    #[serde(flatten)]
    pub game: GameMatch,
    pub team_a_name: String,
    pub team_a_logo: String,
    pub team_b_name: String,
    pub team_b_logo: String,
}

/// Results of one team within a stage.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TeamRecord {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub points: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub team_id: TeamId,
    pub club_name: String,
    pub club_logo: String,
    #[serde(flatten)]
    pub record: TeamRecord,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Standings {
    pub name: String,
    pub table: Vec<StandingRow>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageView {
    pub stage_id: StageId,
    pub name: String,
    pub group: bool,
    pub point_system: PointSystem,
    pub notes: String,
    pub matches: Vec<StageMatch>,
    /// Only group stages carry standings.
    pub tables: Option<Vec<Standings>>,
}

/// Tally a team's played matches in a stage and weight them by the point system.
pub fn tally(matches: &[GameMatch], team_id: &str, points: PointSystem) -> TeamRecord {
    let mut record = TeamRecord::default();
    for m in matches {
        let (Some(side), Some(score)) = (m.side_of_team(team_id), m.final_score) else {
            continue;
        };
        record.played = record.played.saturating_add(1);
        match classify(score, side) {
            FormResult::W => {
                record.won += 1;
                record.points = record.points.saturating_add(points.win);
            }
            FormResult::D => {
                record.drawn += 1;
                record.points = record.points.saturating_add(points.draw);
            }
            FormResult::L => {
                record.lost += 1;
                record.points = record.points.saturating_add(points.loss);
            }
            FormResult::U => {}
        }
    }
    record
}

/// Stages of a tournament in store order.
pub async fn stages_for_tournament(
    store: &dyn DocumentStore,
    tournament_id: &str,
) -> Result<Vec<StageView>, FeedError> {
    build_stages(store, tournament_id)
        .await
        .inspect_err(|e| log::error!("Error fetching tournament page {tournament_id}: {e}"))
}

async fn build_stages(
    store: &dyn DocumentStore,
    tournament_id: &str,
) -> Result<Vec<StageView>, FeedError> {
    let by_tournament = [Filter::eq("tournamentId", tournament_id)];
    let (tournament, stages) = try_join!(
        fetch_by_id::<Tournament>(store, tournament_id),
        fetch_where::<Stage>(store, &by_tournament),
    )?;
    if tournament.is_none() {
        return Err(FeedError::TournamentNotFound(tournament_id.to_string()));
    }

    let resolver = Resolver::new(store);
    try_join_all(stages.into_iter().map(|s| stage_view(&resolver, s))).await
}

async fn stage_view(resolver: &Resolver<'_>, stage: Stage) -> Result<StageView, FeedError> {
    let by_stage = [Filter::eq("stageId", stage.id.as_str())];
    let mut games = fetch_where::<GameMatch>(resolver.store(), &by_stage).await?;
    games.sort_by(|a, b| a.date.cmp(&b.date));

    let tables = if stage.group {
        let tables = stage
            .tables
            .iter()
            .map(|t| standings(resolver, t, &games, stage.point_system));
        Some(try_join_all(tables).await?)
    } else {
        None
    };
    let matches = try_join_all(games.into_iter().map(|g| stage_match(resolver, g))).await?;

    Ok(StageView {
        stage_id: stage.id,
        name: stage.name,
        group: stage.group,
        point_system: stage.point_system,
        notes: stage.notes,
        matches,
        tables,
    })
}

async fn stage_match(resolver: &Resolver<'_>, game: GameMatch) -> Result<StageMatch, FeedError> {
    let (team_a, team_b) = try_join!(
        resolver.team_club(&game.team_a_id),
        resolver.team_club(&game.team_b_id),
    )?;
    Ok(StageMatch {
        game,
        team_a_name: team_a.name,
        team_a_logo: team_a.logo,
        team_b_name: team_b.name,
        team_b_logo: team_b.logo,
    })
}

async fn standings(
    resolver: &Resolver<'_>,
    table: &StandingsTable,
    games: &[GameMatch],
    points: PointSystem,
) -> Result<Standings, FeedError> {
    let rows = table.table.iter().map(|entry| async move {
        let club = resolver.team_club(&entry.team_id).await?;
        Ok::<_, FeedError>(StandingRow {
            team_id: entry.team_id.clone(),
            club_name: club.name,
            club_logo: club.logo,
            record: tally(games, &entry.team_id, points),
        })
    });
    let mut rows = try_join_all(rows).await?;
    // Stable: equal points keep the stored order.
    rows.sort_by(|a, b| b.record.points.cmp(&a.record.points));
    Ok(Standings {
        name: table.name.clone(),
        table: rows,
    })
}
