//! Team form: the five most recent results, newest first.

use crate::error::FeedError;
use crate::logic::fetch::fetch_where;
use crate::models::{GameMatch, Score, Side};
use crate::store::{DocumentStore, Filter};
use chrono::{DateTime, Utc};
use futures_util::try_join;
use serde::{Deserialize, Serialize};

/// Number of results in a form sequence.
pub const FORM_LENGTH: usize = 5;

/// One form symbol. `U` pads history that does not exist.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum FormResult {
    W,
    D,
    L,
    U,
}

pub type Form = [FormResult; FORM_LENGTH];

/// Result of a played match from one side's point of view.
pub fn classify(score: Score, side: Side) -> FormResult {
    let (own, other) = score.for_side(side);
    if own == other {
        FormResult::D
    } else if own > other {
        FormResult::W
    } else {
        FormResult::L
    }
}

/// Form of a team as of `now`, derived from every match it took part in.
pub async fn compute_form(
    store: &dyn DocumentStore,
    team_id: &str,
    now: DateTime<Utc>,
) -> Result<Form, FeedError> {
    let as_a = [Filter::eq("teamAId", team_id)];
    let as_b = [Filter::eq("teamBId", team_id)];
    let (home, away) = try_join!(
        fetch_where::<GameMatch>(store, &as_a),
        fetch_where::<GameMatch>(store, &as_b),
    )?;
    Ok(form_from_matches(team_id, home.iter().chain(&away), now))
}

/// Only matches that kicked off strictly before `now` and carry a score count.
pub fn form_from_matches<'m>(
    team_id: &str,
    matches: impl IntoIterator<Item = &'m GameMatch>,
    now: DateTime<Utc>,
) -> Form {
    let mut played: Vec<(DateTime<Utc>, FormResult)> = matches
        .into_iter()
        .filter_map(|m| {
            let at = m.kickoff().filter(|at| *at < now)?;
            let side = m.side_of_team(team_id)?;
            let score = m.final_score?;
            Some((at, classify(score, side)))
        })
        .collect();
    played.sort_by(|a, b| b.0.cmp(&a.0));

    let mut form = [FormResult::U; FORM_LENGTH];
    for (slot, (_, result)) in form.iter_mut().zip(played) {
        *slot = result;
    }
    form
}
