//! Ranked age-group categories, so squads sort by age rather than by label text.

use std::cmp::{Ordering, Reverse};

/// Parsed age-group label. Orders oldest first: senior categories, then
/// youth categories by descending age limit, then anything unrecognised.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AgeGroup {
    Senior,
    /// "U{limit}", e.g. U19.
    Youth(u32),
    Other(String),
}

const SENIOR_LABELS: [&str; 4] = ["senior", "seniors", "open", "adults"];

impl AgeGroup {
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if SENIOR_LABELS.iter().any(|s| label.eq_ignore_ascii_case(s)) {
            return AgeGroup::Senior;
        }
        label
            .strip_prefix(['U', 'u'])
            .and_then(|limit| limit.parse().ok())
            .map(AgeGroup::Youth)
            .unwrap_or_else(|| AgeGroup::Other(label.to_string()))
    }

    fn rank_key(&self) -> (u8, Reverse<u32>, &str) {
        match self {
            AgeGroup::Senior => (0, Reverse(u32::MAX), ""),
            AgeGroup::Youth(limit) => (1, Reverse(*limit), ""),
            AgeGroup::Other(label) => (2, Reverse(0), label),
        }
    }
}

impl Ord for AgeGroup {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_key().cmp(&other.rank_key())
    }
}

impl PartialOrd for AgeGroup {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
