//! Player history: every match a player appeared in, with both clubs and their own stats.

use crate::error::FeedError;
use crate::logic::fetch::fetch_where;
use crate::logic::resolver::Resolver;
use crate::models::{GameMatch, MatchId, Score, Side, StageId, TeamId};
use crate::store::{DocumentStore, Filter};
use futures_util::future::try_join_all;
use futures_util::try_join;
use serde::Serialize;
use std::collections::HashSet;

/// One appearance of a player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatch {
    pub match_id: MatchId,
    pub stage_id: StageId,
    pub date: String,
    pub location: String,
    pub final_score: Option<Score>,
    pub side: Side,
    pub is_team_a: bool,
    pub player_team_id: TeamId,
    pub player_team_name: String,
    pub player_team_logo: String,
    pub opponent_id: TeamId,
    pub opponent_name: String,
    pub opponent_logo: String,
    /// The player's own points in this match.
    pub points: u32,
    pub is_motm: bool,
}

/// Appearances of a player, newest first.
///
/// Lineup membership is pushed down to the store as one `contains` query per
/// side, so no full scan of the matches collection is needed.
pub async fn history_for_player(
    store: &dyn DocumentStore,
    player_id: &str,
) -> Result<Vec<PlayerMatch>, FeedError> {
    build_history(store, player_id)
        .await
        .inspect_err(|e| log::error!("Error fetching matches of player {player_id}: {e}"))
}

async fn build_history(
    store: &dyn DocumentStore,
    player_id: &str,
) -> Result<Vec<PlayerMatch>, FeedError> {
    let in_a = [Filter::contains("players.A.playerId", player_id)];
    let in_b = [Filter::contains("players.B.playerId", player_id)];
    let (side_a, side_b) = try_join!(
        fetch_where::<GameMatch>(store, &in_a),
        fetch_where::<GameMatch>(store, &in_b),
    )?;

    let mut seen = HashSet::new();
    let games: Vec<GameMatch> = side_a
        .into_iter()
        .chain(side_b)
        .filter(|g| seen.insert(g.id.clone()))
        .collect();

    let resolver = Resolver::new(store);
    let appearances = games.into_iter().map(|g| appearance(&resolver, g, player_id));
    let mut history: Vec<PlayerMatch> = try_join_all(appearances)
        .await?
        .into_iter()
        .flatten()
        .collect();
    history.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(history)
}

async fn appearance(
    resolver: &Resolver<'_>,
    game: GameMatch,
    player_id: &str,
) -> Result<Option<PlayerMatch>, FeedError> {
    let Some((side, points)) = game.players.find(player_id).map(|(s, e)| (s, e.points)) else {
        return Ok(None);
    };
    let own_id = game.team_id(side).clone();
    let opponent_id = game.team_id(side.opposite()).clone();
    let (own, opponent) = try_join!(
        resolver.team_club(&own_id),
        resolver.team_club(&opponent_id),
    )?;
    Ok(Some(PlayerMatch {
        is_motm: game.is_motm(player_id),
        match_id: game.id,
        stage_id: game.stage_id,
        date: game.date,
        location: game.location,
        final_score: game.final_score,
        side,
        is_team_a: side == Side::A,
        player_team_id: own_id,
        player_team_name: own.name,
        player_team_logo: own.logo,
        opponent_id,
        opponent_name: opponent.name,
        opponent_logo: opponent.logo,
        points,
    }))
}
