//! Player document.

use crate::store::{Collection, Record};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub type PlayerId = String;

/// A player. Team membership is implied by rosters and match lineups, never stored here.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub id: PlayerId,
    pub name: String,
    /// Jersey number.
    #[serde(default)]
    pub number: u32,
    /// Date of birth, `YYYY-MM-DD`.
    #[serde(default)]
    pub dob: String,
}

impl Record for Player {
    const COLLECTION: Collection = Collection::Players;

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Player {
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.dob.get(..10)?, "%Y-%m-%d").ok()
    }

    /// Age in whole years on the given day; None if the birth date is unreadable.
    pub fn age_on(&self, on: NaiveDate) -> Option<u32> {
        let born = self.birth_date()?;
        let mut age = on.year() - born.year();
        if (on.month(), on.day()) < (born.month(), born.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }
}
