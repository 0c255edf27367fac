//! Sport and per-sport partitioning of result lists.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sport of a team or tournament. Unrecognised names are kept verbatim.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sport {
    Handball,
    Football,
    Volleyball,
    Basketball,
    Other(String),
}

impl Sport {
    pub fn as_str(&self) -> &str {
        match self {
            Sport::Handball => "Handball",
            Sport::Football => "Football",
            Sport::Volleyball => "Volleyball",
            Sport::Basketball => "Basketball",
            Sport::Other(name) => name,
        }
    }

    /// Display glyph; empty for unrecognised sports.
    pub fn emoji(&self) -> &'static str {
        match self {
            Sport::Handball => "🤾",
            Sport::Football => "⚽",
            Sport::Basketball => "🏀",
            Sport::Volleyball => "🏐",
            Sport::Other(_) => "",
        }
    }
}

impl Default for Sport {
    fn default() -> Self {
        Sport::Other(String::new())
    }
}

impl From<String> for Sport {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Handball" => Sport::Handball,
            "Football" => Sport::Football,
            "Volleyball" => Sport::Volleyball,
            "Basketball" => Sport::Basketball,
            _ => Sport::Other(name),
        }
    }
}

impl From<&str> for Sport {
    fn from(name: &str) -> Self {
        Sport::from(name.to_string())
    }
}

impl From<Sport> for String {
    fn from(sport: Sport) -> Self {
        match sport {
            Sport::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Items listed per sport. The suffix completes the output keys:
/// `handball` + `Matches` gives `handballMatches`.
pub trait SportList {
    const KEY_SUFFIX: &'static str;
}

/// One list per recognised sport, in the order the lists were filled.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BySport<T> {
    pub handball: Vec<T>,
    pub football: Vec<T>,
    pub volleyball: Vec<T>,
    pub basketball: Vec<T>,
}

impl<T> Default for BySport<T> {
    fn default() -> Self {
        Self {
            handball: Vec::new(),
            football: Vec::new(),
            volleyball: Vec::new(),
            basketball: Vec::new(),
        }
    }
}

impl<T: Serialize + SportList> Serialize for BySport<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        for (sport, bucket) in [
            ("handball", &self.handball),
            ("football", &self.football),
            ("volleyball", &self.volleyball),
            ("basketball", &self.basketball),
        ] {
            map.serialize_entry(&format!("{sport}{}", T::KEY_SUFFIX), bucket)?;
        }
        map.end()
    }
}

impl<T> BySport<T> {
    /// Split `items` by sport, keeping relative order. Items of an unrecognised
    /// sport are returned separately.
    pub fn partition<I, F>(items: I, sport_of: F) -> (Self, Vec<T>)
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> &Sport,
    {
        let mut grouped = Self::default();
        let mut unsorted = Vec::new();
        for item in items {
            match grouped.bucket_mut(sport_of(&item)) {
                Some(bucket) => bucket.push(item),
                None => unsorted.push(item),
            }
        }
        (grouped, unsorted)
    }

    pub fn bucket(&self, sport: &Sport) -> Option<&Vec<T>> {
        match sport {
            Sport::Handball => Some(&self.handball),
            Sport::Football => Some(&self.football),
            Sport::Volleyball => Some(&self.volleyball),
            Sport::Basketball => Some(&self.basketball),
            Sport::Other(_) => None,
        }
    }

    pub fn bucket_mut(&mut self, sport: &Sport) -> Option<&mut Vec<T>> {
        match sport {
            Sport::Handball => Some(&mut self.handball),
            Sport::Football => Some(&mut self.football),
            Sport::Volleyball => Some(&mut self.volleyball),
            Sport::Basketball => Some(&mut self.basketball),
            Sport::Other(_) => None,
        }
    }

    pub fn buckets_mut(&mut self) -> [&mut Vec<T>; 4] {
        [
            &mut self.handball,
            &mut self.football,
            &mut self.volleyball,
            &mut self.basketball,
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.handball
            .iter()
            .chain(&self.football)
            .chain(&self.volleyball)
            .chain(&self.basketball)
    }

    pub fn len(&self) -> usize {
        self.handball.len() + self.football.len() + self.volleyball.len() + self.basketball.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
