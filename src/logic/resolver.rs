//! Reference resolution: team id -> owning club's name and logo.
//!
//! A [`Resolver`] lives for one builder invocation and memoises every lookup it
//! makes, so a feed that shows the same team or stage many times reads it once.

use crate::error::FeedError;
use crate::logic::fetch::fetch_by_id;
use crate::logic::tournament_context::{self, TournamentContext};
use crate::models::{Club, ClubStub, Team};
use crate::store::DocumentStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OnceCell;

type Memo<T> = Mutex<HashMap<String, Arc<OnceCell<T>>>>;

fn slot<T>(memo: &Memo<T>, key: &str) -> Arc<OnceCell<T>> {
    let mut g = memo.lock().unwrap_or_else(PoisonError::into_inner);
    g.entry(key.to_string()).or_default().clone()
}

/// Request-scoped join helper.
pub struct Resolver<'a> {
    store: &'a dyn DocumentStore,
    clubs_by_team: Memo<ClubStub>,
    tournaments_by_stage: Memo<TournamentContext>,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self {
            store,
            clubs_by_team: Mutex::default(),
            tournaments_by_stage: Mutex::default(),
        }
    }

    pub fn store(&self) -> &'a dyn DocumentStore {
        self.store
    }

    /// Club stub of a team; [`ClubStub::unknown`] if the team or club is missing.
    pub async fn team_club(&self, team_id: &str) -> Result<ClubStub, FeedError> {
        let cell = slot(&self.clubs_by_team, team_id);
        let stub = cell
            .get_or_try_init(|| lookup_team_club(self.store, team_id))
            .await?;
        Ok(stub.clone())
    }

    /// Tournament owning a stage. Missing stage or tournament is an error.
    pub async fn stage_tournament(&self, stage_id: &str) -> Result<TournamentContext, FeedError> {
        let cell = slot(&self.tournaments_by_stage, stage_id);
        let context = cell
            .get_or_try_init(|| tournament_context::lookup(self.store, stage_id))
            .await?;
        Ok(context.clone())
    }
}

/// One-off resolution without memoisation.
pub async fn resolve_team_club(
    store: &dyn DocumentStore,
    team_id: &str,
) -> Result<ClubStub, FeedError> {
    lookup_team_club(store, team_id).await
}

async fn lookup_team_club(store: &dyn DocumentStore, team_id: &str) -> Result<ClubStub, FeedError> {
    let Some(team) = fetch_by_id::<Team>(store, team_id).await? else {
        log::warn!("Team {team_id} not found, shown as unknown");
        return Ok(ClubStub::unknown());
    };
    match fetch_by_id::<Club>(store, &team.club_id).await? {
        Some(club) => Ok(club.stub()),
        None => {
            log::warn!("Club {} of team {team_id} not found, shown as unknown", team.club_id);
            Ok(ClubStub::unknown())
        }
    }
}
