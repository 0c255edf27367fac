//! Match document: two teams, a stage, a score once played, and lineups per side.

use crate::models::player::PlayerId;
use crate::models::stage::StageId;
use crate::models::team::TeamId;
use crate::store::{Collection, Record};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match.
pub type MatchId = String;

/// Which side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Final score. Both sides are present once a match is played.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "A")]
    pub a: u32,
    #[serde(rename = "B")]
    pub b: u32,
}

impl Score {
    /// (own, opponent) goals from the given side's point of view.
    pub fn for_side(self, side: Side) -> (u32, u32) {
        match side {
            Side::A => (self.a, self.b),
            Side::B => (self.b, self.a),
        }
    }
}

/// One lineup entry.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub player_id: PlayerId,
    #[serde(default)]
    pub points: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Lineups {
    #[serde(rename = "A", default)]
    pub a: Vec<Participant>,
    #[serde(rename = "B", default)]
    pub b: Vec<Participant>,
}

impl Lineups {
    pub fn side(&self, side: Side) -> &[Participant] {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Side and lineup entry of a player; side A wins if listed on both.
    pub fn find(&self, player_id: &str) -> Option<(Side, &Participant)> {
        [Side::A, Side::B].into_iter().find_map(|side| {
            self.side(side)
                .iter()
                .find(|p| p.player_id == player_id)
                .map(|p| (side, p))
        })
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    #[serde(default)]
    pub id: MatchId,
    pub stage_id: StageId,
    pub team_a_id: TeamId,
    pub team_b_id: TeamId,
    /// Kick-off, ISO 8601 (`YYYY-MM-DD`, optionally followed by a time).
    pub date: String,
    #[serde(default)]
    pub location: String,
    /// None until the match is played.
    #[serde(default)]
    pub final_score: Option<Score>,
    /// Man of the match.
    #[serde(default)]
    pub motm: Option<PlayerId>,
    #[serde(default)]
    pub players: Lineups,
}

impl Record for GameMatch {
    const COLLECTION: Collection = Collection::Matches;

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl GameMatch {
    pub fn team_id(&self, side: Side) -> &TeamId {
        match side {
            Side::A => &self.team_a_id,
            Side::B => &self.team_b_id,
        }
    }

    pub fn side_of_team(&self, team_id: &str) -> Option<Side> {
        if self.team_a_id == team_id {
            Some(Side::A)
        } else if self.team_b_id == team_id {
            Some(Side::B)
        } else {
            None
        }
    }

    pub fn is_played(&self) -> bool {
        self.final_score.is_some()
    }

    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }

    pub fn is_motm(&self, player_id: &str) -> bool {
        self.motm.as_deref() == Some(player_id)
    }
}

/// Parse a stored date. Values without an offset are read as UTC; a bare date is midnight.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
