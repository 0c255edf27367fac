//! Club document and the name+logo stub used wherever a team is displayed.

use crate::store::{Collection, Record};
use serde::{Deserialize, Serialize};

pub type ClubId = String;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    #[serde(default)]
    pub id: ClubId,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, alias = "desc")]
    pub description: String,
}

impl Record for Club {
    const COLLECTION: Collection = Collection::Clubs;

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Club {
    pub fn stub(&self) -> ClubStub {
        ClubStub {
            name: self.name.clone(),
            logo: self.logo.clone(),
        }
    }
}

/// Minimal display projection of a club.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClubStub {
    pub name: String,
    pub logo: String,
}

impl ClubStub {
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// Stand-in for a dangling team or club reference.
    pub fn unknown() -> Self {
        Self {
            name: Self::UNKNOWN_NAME.to_string(),
            logo: String::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.name == Self::UNKNOWN_NAME && self.logo.is_empty()
    }
}
