//! Tournament directory: the latest season of every competition, grouped by sport.

use crate::error::FeedError;
use crate::logic::fetch::fetch_all;
use crate::models::{BySport, Sport, Tournament};
use crate::store::DocumentStore;
use std::collections::HashMap;

pub async fn tournament_directory(
    store: &dyn DocumentStore,
) -> Result<BySport<Tournament>, FeedError> {
    let tournaments = fetch_all::<Tournament>(store)
        .await
        .inspect_err(|e| log::error!("Error fetching tournaments: {e}"))?;

    let (mut grouped, unsorted) = BySport::partition(latest_seasons(tournaments), |t| &t.sport);
    if !unsorted.is_empty() {
        log::debug!("{} tournament(s) of unrecognised sport skipped", unsorted.len());
    }
    for bucket in grouped.buckets_mut() {
        bucket.sort_by(|a, b| a.teams_type.cmp(&b.teams_type));
    }
    Ok(grouped)
}

/// Keep one tournament per (name, sport): the one with the greatest season.
/// Ties keep the first seen. Output follows first-seen key order.
pub fn latest_seasons(tournaments: Vec<Tournament>) -> Vec<Tournament> {
    let mut slots: HashMap<(String, Sport), usize> = HashMap::new();
    let mut latest: Vec<Tournament> = Vec::new();
    for t in tournaments {
        let key = (t.name.clone(), t.sport.clone());
        match slots.get(&key) {
            Some(&i) if t.season > latest[i].season => latest[i] = t,
            Some(_) => {}
            None => {
                slots.insert(key, latest.len());
                latest.push(t);
            }
        }
    }
    latest
}
