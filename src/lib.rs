//! Sports club feed: read-side aggregation over a document store.
//!
//! Clubs, teams, players, matches, stages and tournaments live in separate
//! collections. The builders in [`logic`] join them into display-ready records
//! with derived fields (team form, date-window feeds, stage standings, player
//! history). Nothing here writes to the store.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod store;

pub use config::ServerConfig;
pub use error::FeedError;
pub use logic::{
    champion, clubs, compute_form, history_for_player, matches_for, matches_in_window, player,
    players, posts, resolve_team_club, roster_for_club, stages_for_tournament, team_page,
    tournament_directory, tournament_for_stage, FeedWindow, Form, FormResult, MatchCard,
    PlayerMatch, RosterTeam, StageView, TeamPage,
};
pub use models::{
    BySport, Club, ClubStub, GameMatch, Player, PointSystem, Post, Score, Season, Side, Sport,
    SportList, Stage, Team, Tournament,
};
pub use store::{Collection, Document, DocumentStore, Filter, MemoryStore, StoreError};
