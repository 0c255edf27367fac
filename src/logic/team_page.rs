//! Team page: the team, its players, and its matches against named opponents.

use crate::error::FeedError;
use crate::logic::fetch::{fetch_by_id, fetch_where};
use crate::logic::lookups;
use crate::logic::resolver::Resolver;
use crate::models::{GameMatch, Lineups, MatchId, Player, PlayerId, Score, StageId, Team, TeamId};
use crate::store::{DocumentStore, Filter};
use futures_util::future::try_join_all;
use futures_util::try_join;
use serde::Serialize;

/// A team's match from its own point of view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatch {
    pub match_id: MatchId,
    pub opponent_id: TeamId,
    pub opponent_name: String,
    pub opponent_logo: String,
    pub stage_id: StageId,
    pub location: String,
    pub players: Lineups,
    pub final_score: Option<Score>,
    pub date: String,
    pub motm: Option<PlayerId>,
    pub is_team_a: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TeamPage {
    pub team: Team,
    pub players: Vec<Player>,
    /// Oldest first.
    pub matches: Vec<TeamMatch>,
}

pub async fn team_page(store: &dyn DocumentStore, team_id: &str) -> Result<TeamPage, FeedError> {
    build_page(store, team_id)
        .await
        .inspect_err(|e| log::error!("Error fetching team {team_id}: {e}"))
}

async fn build_page(store: &dyn DocumentStore, team_id: &str) -> Result<TeamPage, FeedError> {
    let team = fetch_by_id::<Team>(store, team_id)
        .await?
        .ok_or_else(|| FeedError::TeamNotFound(team_id.to_string()))?;
    let (players, matches) = try_join!(
        lookups::players(store, &team.player_ids),
        team_matches(store, team_id),
    )?;
    Ok(TeamPage {
        team,
        players,
        matches,
    })
}

/// Every match of a team, opponent resolved, sorted by date.
pub async fn team_matches(
    store: &dyn DocumentStore,
    team_id: &str,
) -> Result<Vec<TeamMatch>, FeedError> {
    let as_a = [Filter::eq("teamAId", team_id)];
    let as_b = [Filter::eq("teamBId", team_id)];
    let (home, away) = try_join!(
        fetch_where::<GameMatch>(store, &as_a),
        fetch_where::<GameMatch>(store, &as_b),
    )?;

    let resolver = Resolver::new(store);
    let rows = home.into_iter().chain(away).map(|game| {
        let resolver = &resolver;
        async move {
            let is_team_a = game.team_a_id == team_id;
            let opponent_id = if is_team_a {
                game.team_b_id
            } else {
                game.team_a_id
            };
            let opponent = resolver.team_club(&opponent_id).await?;
            Ok::<_, FeedError>(TeamMatch {
                match_id: game.id,
                opponent_id,
                opponent_name: opponent.name,
                opponent_logo: opponent.logo,
                stage_id: game.stage_id,
                location: game.location,
                players: game.players,
                final_score: game.final_score,
                date: game.date,
                motm: game.motm,
                is_team_a,
            })
        }
    });
    let mut rows = try_join_all(rows).await?;
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(rows)
}
