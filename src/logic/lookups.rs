//! Single-collection reads: clubs, champion, players, posts.

use crate::error::FeedError;
use crate::logic::fetch::{fetch_all, fetch_by_id};
use crate::models::{Club, ClubStub, Player, PlayerId, Post};
use crate::store::DocumentStore;
use futures_util::future::try_join_all;

/// All clubs, sorted by city.
pub async fn clubs(store: &dyn DocumentStore) -> Result<Vec<Club>, FeedError> {
    let mut clubs = fetch_all::<Club>(store)
        .await
        .inspect_err(|e| log::error!("Error fetching clubs: {e}"))?;
    clubs.sort_by(|a, b| a.city.cmp(&b.city));
    Ok(clubs)
}

/// Name and logo of a tournament's champion club. The club must exist.
pub async fn champion(store: &dyn DocumentStore, club_id: &str) -> Result<ClubStub, FeedError> {
    fetch_by_id::<Club>(store, club_id)
        .await
        .and_then(|club| club.ok_or_else(|| FeedError::ClubNotFound(club_id.to_string())))
        .map(|club| club.stub())
        .inspect_err(|e| log::error!("Error fetching champion: {e}"))
}

/// All posts, newest first.
pub async fn posts(store: &dyn DocumentStore) -> Result<Vec<Post>, FeedError> {
    let mut posts = fetch_all::<Post>(store)
        .await
        .inspect_err(|e| log::error!("Error fetching posts: {e}"))?;
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

pub async fn player(store: &dyn DocumentStore, player_id: &str) -> Result<Option<Player>, FeedError> {
    let player = fetch_by_id::<Player>(store, player_id)
        .await
        .inspect_err(|e| log::error!("Error fetching player {player_id}: {e}"))?;
    if player.is_none() {
        log::info!("Player {player_id} not found");
    }
    Ok(player)
}

/// Players by id, sorted by jersey number. Unknown ids are dropped.
pub async fn players(store: &dyn DocumentStore, ids: &[PlayerId]) -> Result<Vec<Player>, FeedError> {
    let found = try_join_all(ids.iter().map(|id| fetch_by_id::<Player>(store, id)))
        .await
        .inspect_err(|e| log::error!("Error fetching players: {e}"))?;
    let mut players: Vec<Player> = found.into_iter().flatten().collect();
    players.sort_by_key(|p| p.number);
    Ok(players)
}
