//! Club roster: a club's teams with their form, grouped by sport.

use crate::error::FeedError;
use crate::logic::fetch::{fetch_by_id, fetch_where};
use crate::logic::form::{compute_form, Form};
use crate::models::{BySport, Club, SportList, Team};
use crate::store::{DocumentStore, Filter};
use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use futures_util::try_join;
use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterTeam {
    #[serde(flatten)]
    pub team: Team,
    pub form: Form,
}

impl SportList for RosterTeam {
    const KEY_SUFFIX: &'static str = "Teams";
}

/// Teams of a club, each sport ordered oldest age group first, then by rank.
pub async fn roster_for_club(
    store: &dyn DocumentStore,
    club_id: &str,
    now: DateTime<Utc>,
) -> Result<BySport<RosterTeam>, FeedError> {
    build_roster(store, club_id, now)
        .await
        .inspect_err(|e| log::error!("Error fetching teams of club {club_id}: {e}"))
}

async fn build_roster(
    store: &dyn DocumentStore,
    club_id: &str,
    now: DateTime<Utc>,
) -> Result<BySport<RosterTeam>, FeedError> {
    let by_club = [Filter::eq("clubId", club_id)];
    let (club, teams) = try_join!(
        fetch_by_id::<Club>(store, club_id),
        fetch_where::<Team>(store, &by_club),
    )?;
    if club.is_none() {
        return Err(FeedError::ClubNotFound(club_id.to_string()));
    }

    let roster = try_join_all(teams.into_iter().map(|team| async move {
        let form = compute_form(store, &team.id, now).await?;
        Ok::<_, FeedError>(RosterTeam { team, form })
    }))
    .await?;

    let (mut grouped, unsorted) = BySport::partition(roster, |t| &t.team.sport);
    for t in &unsorted {
        log::warn!("Team {} has unrecognised sport `{}`, left out of the roster", t.team.id, t.team.sport);
    }
    for bucket in grouped.buckets_mut() {
        bucket.sort_by(|a, b| a.team.squad_order(&b.team));
    }
    Ok(grouped)
}
