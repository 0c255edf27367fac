//! Integration tests for the tournament directory and single-collection lookups.

mod common;

use club_feed::{
    champion, clubs, player, players, posts, tournament_directory, FeedError, MemoryStore, Season,
};
use common::seeded_store;
use serde_json::json;

#[tokio::test]
async fn directory_keeps_latest_season_per_competition() {
    let store = seeded_store();
    let directory = tournament_directory(&store).await.unwrap();

    let handball: Vec<_> = directory.handball.iter().map(|t| t.id.as_str()).collect();
    // tr0 is an older Superliga season; Seniors sorts before U19
    assert_eq!(handball, vec!["tr3", "tr1"]);
    assert_eq!(directory.football.len(), 1);
    assert_eq!(directory.football[0].id, "tr2");
    // tr4 is a chess tournament and has no bucket
    assert_eq!(directory.len(), 3);
}

#[tokio::test]
async fn numeric_seasons_are_accepted_and_compared_as_numbers() {
    let store = MemoryStore::from_seed(json!({
        "tournaments": [
            { "id": "a", "name": "League", "season": 2023, "sport": "Handball", "teamsType": "U19" },
            { "id": "b", "name": "League", "season": 2024, "sport": "Handball", "teamsType": "U19" },
            { "id": "c", "name": "League", "season": 998, "sport": "Handball", "teamsType": "U19" }
        ]
    }))
    .unwrap();
    let directory = tournament_directory(&store).await.unwrap();

    assert_eq!(directory.handball.len(), 1);
    assert_eq!(directory.handball[0].id, "b");
    assert_eq!(directory.handball[0].season, Season::Number(2024));
    let json = serde_json::to_value(&directory).unwrap();
    assert_eq!(json["handballTournaments"][0]["season"], 2024);
}

#[tokio::test]
async fn clubs_are_sorted_by_city() {
    let store = seeded_store();
    let cities: Vec<_> = clubs(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.city)
        .collect();
    assert_eq!(cities, vec!["Belgrade", "Novi Sad", "Sabac"]);
}

#[tokio::test]
async fn champion_requires_existing_club() {
    let store = seeded_store();
    let stub = champion(&store, "c1").await.unwrap();
    assert_eq!(stub.name, "Partizan");
    assert_eq!(stub.logo, "partizan.png");

    let err = champion(&store, "c9").await.unwrap_err();
    assert!(matches!(err, FeedError::ClubNotFound(_)));
}

#[tokio::test]
async fn posts_are_newest_first() {
    let store = seeded_store();
    let titles: Vec<_> = posts(&store).await.unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(titles, vec!["Derby preview", "Season opens"]);
}

#[tokio::test]
async fn players_sorted_by_number_and_missing_dropped() {
    let store = seeded_store();
    let ids = vec!["p1".to_string(), "ghost".to_string(), "p3".to_string(), "p2".to_string()];
    let numbers: Vec<_> = players(&store, &ids)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.number)
        .collect();
    assert_eq!(numbers, vec![3, 7, 10]);

    assert!(player(&store, "ghost").await.unwrap().is_none());
    assert_eq!(player(&store, "p3").await.unwrap().unwrap().name, "Stefan Stefanovic");
}
