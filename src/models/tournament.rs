//! Tournament document: one season of a named competition.

use crate::models::club::ClubId;
use crate::models::sport::{Sport, SportList};
use crate::store::{Collection, Record};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type TournamentId = String;

/// Season label: either a bare year (`2024`) or text (`"2024/2025"`).
/// Numbers compare numerically, text lexicographically, and any number sorts
/// before any text.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Season {
    Number(i64),
    Text(String),
}

impl Default for Season {
    fn default() -> Self {
        Season::Text(String::new())
    }
}

impl From<&str> for Season {
    fn from(label: &str) -> Self {
        Season::Text(label.to_string())
    }
}

impl From<i64> for Season {
    fn from(year: i64) -> Self {
        Season::Number(year)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Number(year) => write!(f, "{year}"),
            Season::Text(label) => f.write_str(label),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    #[serde(default)]
    pub id: TournamentId,
    pub name: String,
    #[serde(default)]
    pub season: Season,
    pub sport: Sport,
    /// Competition category, e.g. "U19".
    #[serde(default)]
    pub teams_type: String,
    /// Winning club, once decided.
    #[serde(default)]
    pub champion: Option<ClubId>,
    #[serde(default)]
    pub notes: String,
}

impl Record for Tournament {
    const COLLECTION: Collection = Collection::Tournaments;

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl SportList for Tournament {
    const KEY_SUFFIX: &'static str = "Tournaments";
}

impl Tournament {
    /// Feed heading: "{name} - {teamsType}, {stage} {emoji}".
    pub fn stage_heading(&self, stage_name: &str) -> String {
        let heading = format!("{} - {}, {}", self.name, self.teams_type, stage_name);
        match self.sport.emoji() {
            "" => heading,
            emoji => format!("{heading} {emoji}"),
        }
    }
}
