//! Integration tests for the date-window match feed.

mod common;

use club_feed::{
    matches_for, matches_in_window, Collection, FeedError, FeedWindow, MatchCard, MemoryStore,
};
use common::{day, seeded_store, today};
use serde_json::json;

fn ids(cards: &[MatchCard]) -> Vec<&str> {
    cards.iter().map(|c| c.match_id.as_str()).collect()
}

#[tokio::test]
async fn today_feed_is_sorted_by_heading_and_split_by_sport() {
    let store = seeded_store();
    let feed = matches_for(&store, FeedWindow::Today, today()).await.unwrap();

    // "Superliga - U19, Final" sorts before "Superliga - U19, Group A"
    assert_eq!(ids(&feed.handball), vec!["m3", "m6"]);
    assert_eq!(ids(&feed.football), vec!["m4"]);
    assert!(feed.volleyball.is_empty());
    assert!(feed.basketball.is_empty());

    let m4 = &feed.football[0];
    assert_eq!(m4.tournament_string, "Cup - U17, Semi-final ⚽");
    assert_eq!(m4.team_a_name, "Partizan");
    assert_eq!(m4.team_b_name, "Metaloplastika");
    assert_eq!(m4.team_b_logo, "metalac.png");
    assert_eq!(feed.handball[1].tournament_string, "Superliga - U19, Group A 🤾");
}

#[tokio::test]
async fn feed_serialises_one_list_per_sport() {
    let store = seeded_store();
    let feed = matches_for(&store, FeedWindow::Today, today()).await.unwrap();
    let json = serde_json::to_value(&feed).unwrap();
    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys.len(), 4);
    for key in ["handballMatches", "footballMatches", "volleyballMatches", "basketballMatches"] {
        assert!(json[key].is_array(), "missing {key}");
    }
    assert_eq!(json["footballMatches"][0]["matchId"], "m4");
    assert_eq!(json["footballMatches"][0]["tournamentString"], "Cup - U17, Semi-final ⚽");
}

#[tokio::test]
async fn yesterday_and_tomorrow_windows() {
    let store = seeded_store();
    let yesterday = matches_for(&store, FeedWindow::Yesterday, today()).await.unwrap();
    assert_eq!(ids(&yesterday.football), vec!["m5"]);
    assert_eq!(yesterday.len(), 1);

    let tomorrow = matches_for(&store, FeedWindow::Tomorrow, today()).await.unwrap();
    assert_eq!(ids(&tomorrow.handball), vec!["m3"]);
    assert_eq!(tomorrow.len(), 1);
}

#[tokio::test]
async fn today_window_spans_two_utc_days() {
    let store = seeded_store();
    for (id, date) in [
        ("late-yesterday", "2025-01-24T23:59"),
        ("start-of-today", "2025-01-25"),
        ("end-of-tomorrow", "2025-01-26T23:59"),
        ("day-after", "2025-01-27T00:00"),
    ] {
        store
            .insert_with_id(
                Collection::Matches,
                id,
                json!({ "stageId": "s3", "teamAId": "t3", "teamBId": "t4", "date": date }),
            )
            .unwrap();
    }
    let feed = matches_for(&store, FeedWindow::Today, today()).await.unwrap();
    let football = ids(&feed.football);
    assert!(football.contains(&"start-of-today"));
    assert!(football.contains(&"end-of-tomorrow"));
    assert!(!football.contains(&"late-yesterday"));
    assert!(!football.contains(&"day-after"));
}

#[tokio::test]
async fn every_match_in_window_lands_in_exactly_one_bucket() {
    let store = seeded_store();
    let feed = matches_in_window(&store, day("2025-01-01"), day("2025-02-01")).await.unwrap();
    let mut all: Vec<&str> = feed.iter().map(|c| c.match_id.as_str()).collect();
    all.sort();
    assert_eq!(all, vec!["m1", "m2", "m3", "m4", "m5", "m6"]);
}

#[tokio::test]
async fn dangling_team_shows_as_unknown() {
    let store = seeded_store();
    store
        .insert_with_id(
            Collection::Matches,
            "m7",
            json!({ "stageId": "s3", "teamAId": "t3", "teamBId": "gone", "date": "2025-01-25T16:00" }),
        )
        .unwrap();
    let feed = matches_for(&store, FeedWindow::Today, today()).await.unwrap();
    let m7 = feed.football.iter().find(|c| c.match_id == "m7").unwrap();
    assert_eq!(m7.team_b_name, "Unknown");
    assert_eq!(m7.team_b_logo, "");
}

#[tokio::test]
async fn stage_without_tournament_fails_the_feed() {
    let store = seeded_store();
    store
        .insert(
            Collection::Matches,
            json!({ "stageId": "s4", "teamAId": "t1", "teamBId": "t2", "date": "2025-01-25T09:00" }),
        )
        .unwrap();
    let err = matches_for(&store, FeedWindow::Today, today()).await.unwrap_err();
    assert!(matches!(err, FeedError::MissingTournamentRef(ref s) if s == "s4"));
}

#[tokio::test]
async fn missing_stage_fails_the_feed() {
    let store = seeded_store();
    store
        .insert(
            Collection::Matches,
            json!({ "stageId": "nope", "teamAId": "t1", "teamBId": "t2", "date": "2025-01-24T09:00" }),
        )
        .unwrap();
    let err = matches_for(&store, FeedWindow::Yesterday, today()).await.unwrap_err();
    assert!(matches!(err, FeedError::StageNotFound(_)));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn empty_window_is_not_an_error() {
    let store = MemoryStore::new();
    let feed = matches_for(&store, FeedWindow::Today, today()).await.unwrap();
    assert!(feed.is_empty());
}
