//! Stage -> tournament resolution, used to label matches in feeds.

use crate::error::FeedError;
use crate::logic::fetch::fetch_by_id;
use crate::models::{ClubId, Season, Sport, Stage, StageId, Tournament, TournamentId};
use crate::store::DocumentStore;
use serde::Serialize;

/// Tournament fields plus the heading for one of its stages.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentContext {
    pub tournament_id: TournamentId,
    pub stage_id: StageId,
    pub name: String,
    pub stage_name: String,
    pub tournament_stage_string: String,
    pub season: Season,
    pub sport: Sport,
    pub teams_type: String,
    pub champion: Option<ClubId>,
    pub notes: String,
}

impl TournamentContext {
    fn new(tournament: Tournament, stage: &Stage) -> Self {
        Self {
            tournament_stage_string: tournament.stage_heading(&stage.name),
            tournament_id: tournament.id,
            stage_id: stage.id.clone(),
            name: tournament.name,
            stage_name: stage.name.clone(),
            season: tournament.season,
            sport: tournament.sport,
            teams_type: tournament.teams_type,
            champion: tournament.champion,
            notes: tournament.notes,
        }
    }
}

/// Resolve the tournament a stage belongs to.
pub async fn tournament_for_stage(
    store: &dyn DocumentStore,
    stage_id: &str,
) -> Result<TournamentContext, FeedError> {
    lookup(store, stage_id)
        .await
        .inspect_err(|e| log::error!("Error fetching tournament for stage {stage_id}: {e}"))
}

pub(crate) async fn lookup(
    store: &dyn DocumentStore,
    stage_id: &str,
) -> Result<TournamentContext, FeedError> {
    let stage = fetch_by_id::<Stage>(store, stage_id)
        .await?
        .ok_or_else(|| FeedError::StageNotFound(stage_id.to_string()))?;
    let tournament_id = stage
        .tournament_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| FeedError::MissingTournamentRef(stage_id.to_string()))?;
    let tournament = fetch_by_id::<Tournament>(store, tournament_id)
        .await?
        .ok_or_else(|| FeedError::TournamentNotFound(tournament_id.to_string()))?;
    Ok(TournamentContext::new(tournament, &stage))
}
