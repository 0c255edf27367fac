//! Stage document: one phase of a tournament.

use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use crate::store::{Collection, Record};
use serde::{Deserialize, Serialize};

pub type StageId = String;

/// Points awarded per result in a group stage.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointSystem {
    #[serde(rename = "W", default)]
    pub win: u32,
    #[serde(rename = "D", default)]
    pub draw: u32,
    #[serde(rename = "L", default)]
    pub loss: u32,
}

/// Stored standings row; club details and points are filled in on read.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    pub team_id: TeamId,
    #[serde(default)]
    pub points: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsTable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub table: Vec<TableEntry>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    #[serde(default)]
    pub id: StageId,
    /// Owning tournament; a stage without one cannot be placed in any feed.
    #[serde(default)]
    pub tournament_id: Option<TournamentId>,
    #[serde(default)]
    pub name: String,
    /// Round robin when true, knockout otherwise.
    #[serde(default)]
    pub group: bool,
    #[serde(default)]
    pub point_system: PointSystem,
    #[serde(default)]
    pub tables: Vec<StandingsTable>,
    #[serde(default)]
    pub notes: String,
}

impl Record for Stage {
    const COLLECTION: Collection = Collection::Stages;

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}
