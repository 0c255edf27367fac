//! Errors raised by the aggregation builders.

use crate::models::{ClubId, StageId, TeamId, TournamentId};
use crate::store::{Collection, StoreError};
use thiserror::Error;

/// Fatal builder failures. Dangling references inside joins are not errors;
/// they resolve to [`crate::models::ClubStub::unknown`].
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport or read failure, passed through unmodified.
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed {collection} document {id}: {source}")]
    Decode {
        collection: Collection,
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("stage {0} not found")]
    StageNotFound(StageId),
    #[error("stage {0} does not reference a tournament")]
    MissingTournamentRef(StageId),
    #[error("tournament {0} not found")]
    TournamentNotFound(TournamentId),
    #[error("club {0} not found")]
    ClubNotFound(ClubId),
    #[error("team {0} not found")]
    TeamNotFound(TeamId),
}

impl FeedError {
    /// A required parent entity was missing (as opposed to a store failure).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FeedError::StageNotFound(_)
                | FeedError::TournamentNotFound(_)
                | FeedError::ClubNotFound(_)
                | FeedError::TeamNotFound(_)
        )
    }
}
