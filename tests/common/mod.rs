//! Shared fixture: two tournaments' worth of clubs, teams, stages and matches.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use club_feed::{Collection, Document, DocumentStore, Filter, MemoryStore, StoreError};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

/// "Now" for every test: 2025-01-25 12:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 25, 12, 0, 0).unwrap()
}

pub fn today() -> NaiveDate {
    now().date_naive()
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn seeded_store() -> MemoryStore {
    MemoryStore::from_seed(json!({
        "clubs": [
            { "id": "c1", "name": "Partizan", "logo": "partizan.png", "city": "Belgrade", "desc": "" },
            { "id": "c2", "name": "Vojvodina", "logo": "vojvodina.png", "city": "Novi Sad", "desc": "" },
            { "id": "c3", "name": "Metaloplastika", "logo": "metalac.png", "city": "Sabac", "desc": "" }
        ],
        "teams": [
            { "id": "t1", "clubId": "c1", "sport": "Handball", "type": "U19", "rank": "A", "playerIds": ["p1", "p2"] },
            { "id": "t2", "clubId": "c2", "sport": "Handball", "type": "U19", "rank": "A", "playerIds": ["p3"] },
            { "id": "t3", "clubId": "c1", "sport": "Football", "type": "U17", "rank": "A", "playerIds": [] },
            { "id": "t4", "clubId": "c3", "sport": "Football", "type": "U17", "rank": "A", "playerIds": [] },
            { "id": "t5", "clubId": "c1", "sport": "Handball", "type": "U15", "rank": "A", "playerIds": [] },
            { "id": "t6", "clubId": "c1", "sport": "Handball", "type": "U19", "rank": "B", "playerIds": [] },
            { "id": "t7", "clubId": "c1", "sport": "Handball", "type": "Seniors", "rank": "A", "playerIds": [] },
            { "id": "t8", "clubId": "c1", "sport": "Handball", "type": "U9", "rank": "A", "playerIds": [] }
        ],
        "players": [
            { "id": "p1", "name": "Marko Markovic", "number": 7, "dob": "2006-04-02" },
            { "id": "p2", "name": "Nikola Nikolic", "number": 3, "dob": "2006-09-12" },
            { "id": "p3", "name": "Stefan Stefanovic", "number": 10, "dob": "2007-01-30" }
        ],
        "tournaments": [
            { "id": "tr0", "name": "Superliga", "season": "2023/2024", "sport": "Handball", "teamsType": "U19", "champion": "c2", "notes": "" },
            { "id": "tr1", "name": "Superliga", "season": "2024/2025", "sport": "Handball", "teamsType": "U19", "champion": "c1", "notes": "" },
            { "id": "tr2", "name": "Cup", "season": "2025", "sport": "Football", "teamsType": "U17", "notes": "" },
            { "id": "tr3", "name": "Kup", "season": "2025", "sport": "Handball", "teamsType": "Seniors", "notes": "" },
            { "id": "tr4", "name": "Open", "season": "2025", "sport": "Chess", "teamsType": "Seniors", "notes": "" }
        ],
        "stages": [
            {
                "id": "s1", "tournamentId": "tr1", "name": "Group A", "group": true,
                "pointSystem": { "W": 2, "D": 1, "L": 0 },
                "tables": [{ "name": "Group A", "table": [{ "teamId": "t2", "points": 0 }, { "teamId": "t1", "points": 0 }] }],
                "notes": ""
            },
            {
                "id": "s2", "tournamentId": "tr1", "name": "Final", "group": false,
                "pointSystem": { "W": 0, "D": 0, "L": 0 }, "tables": [], "notes": ""
            },
            {
                "id": "s3", "tournamentId": "tr2", "name": "Semi-final", "group": false,
                "pointSystem": { "W": 0, "D": 0, "L": 0 }, "tables": [], "notes": ""
            },
            { "id": "s4", "name": "Orphan", "group": false, "tables": [], "notes": "" }
        ],
        "matches": [
            {
                "id": "m1", "stageId": "s1", "teamAId": "t1", "teamBId": "t2",
                "date": "2025-01-10T18:00", "location": "Belgrade",
                "finalScore": { "A": 2, "B": 1 }, "motm": "p1",
                "players": { "A": [{ "playerId": "p1", "points": 5 }, { "playerId": "p2", "points": 2 }], "B": [{ "playerId": "p3", "points": 4 }] }
            },
            {
                "id": "m2", "stageId": "s1", "teamAId": "t2", "teamBId": "t1",
                "date": "2025-01-20T18:00", "location": "Novi Sad",
                "finalScore": { "A": 0, "B": 0 }, "motm": "p3",
                "players": { "A": [{ "playerId": "p3", "points": 1 }], "B": [{ "playerId": "p1", "points": 0 }] }
            },
            {
                "id": "m3", "stageId": "s2", "teamAId": "t1", "teamBId": "t2",
                "date": "2025-01-26T18:00", "location": "Belgrade",
                "players": { "A": [], "B": [] }
            },
            {
                "id": "m4", "stageId": "s3", "teamAId": "t3", "teamBId": "t4",
                "date": "2025-01-25T10:00", "location": "Belgrade",
                "finalScore": { "A": 1, "B": 3 },
                "players": { "A": [], "B": [] }
            },
            {
                "id": "m5", "stageId": "s3", "teamAId": "t4", "teamBId": "t3",
                "date": "2025-01-24T20:00", "location": "Sabac",
                "finalScore": { "A": 2, "B": 2 },
                "players": { "A": [], "B": [] }
            },
            {
                "id": "m6", "stageId": "s1", "teamAId": "t2", "teamBId": "t1",
                "date": "2025-01-25T19:00", "location": "Novi Sad",
                "players": { "A": [], "B": [] }
            }
        ],
        "posts": [
            { "id": "n1", "name": "Season opens", "text": "", "author": "Desk", "date": "2025-01-02" },
            { "id": "n2", "name": "Derby preview", "text": "", "author": "Desk", "date": "2025-01-19" }
        ]
    }))
    .unwrap()
}

/// Wraps a [`MemoryStore`], counts `get` calls per `collection/id` and fails
/// reads of one chosen document.
pub struct CountingStore {
    inner: MemoryStore,
    failing: Option<(Collection, String)>,
    gets: Mutex<HashMap<String, usize>>,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            failing: None,
            gets: Mutex::default(),
        }
    }

    pub fn failing_on(inner: MemoryStore, collection: Collection, id: &str) -> Self {
        Self {
            failing: Some((collection, id.to_string())),
            ..Self::new(inner)
        }
    }

    pub fn gets_of(&self, collection: Collection, id: &str) -> usize {
        let key = format!("{collection}/{id}");
        self.gets.lock().unwrap().get(&key).copied().unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError> {
        *self
            .gets
            .lock()
            .unwrap()
            .entry(format!("{collection}/{id}"))
            .or_default() += 1;
        if let Some((c, failing_id)) = &self.failing {
            if *c == collection && failing_id == id {
                return Err(StoreError::Unavailable(format!("connection reset reading {id}")));
            }
        }
        self.inner.get(collection, id).await
    }

    async fn get_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        self.inner.get_all(collection).await
    }

    async fn query(
        &self,
        collection: Collection,
        filters: &[Filter],
    ) -> Result<Vec<Document>, StoreError> {
        self.inner.query(collection, filters).await
    }
}
