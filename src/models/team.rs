//! Team document: one squad of a club for a sport and age group.

use crate::models::age_group::AgeGroup;
use crate::models::club::ClubId;
use crate::models::player::PlayerId;
use crate::models::sport::Sport;
use crate::store::{Collection, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub type TeamId = String;

/// Form is never stored; it is derived from match history on read.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub id: TeamId,
    pub club_id: ClubId,
    pub sport: Sport,
    /// Age-group label, e.g. "U19".
    #[serde(rename = "type", default)]
    pub age_group: String,
    /// Squad letter within the age group ("A" is the first squad).
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub player_ids: Vec<PlayerId>,
}

impl Record for Team {
    const COLLECTION: Collection = Collection::Teams;

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Team {
    /// Squad ordering inside a club: oldest age group first, then by rank letter.
    pub fn squad_order(&self, other: &Team) -> Ordering {
        AgeGroup::parse(&self.age_group)
            .cmp(&AgeGroup::parse(&other.age_group))
            .then_with(|| self.rank.cmp(&other.rank))
    }
}
