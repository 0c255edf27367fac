//! Documents stored per collection and the small shared types used in joins.

mod age_group;
mod club;
mod game;
mod player;
mod post;
mod sport;
mod stage;
mod team;
mod tournament;

pub use age_group::AgeGroup;
pub use club::{Club, ClubId, ClubStub};
pub use game::{parse_timestamp, GameMatch, Lineups, MatchId, Participant, Score, Side};
pub use player::{Player, PlayerId};
pub use post::{Post, PostId};
pub use sport::{BySport, Sport, SportList};
pub use stage::{PointSystem, Stage, StageId, StandingsTable, TableEntry};
pub use team::{Team, TeamId};
pub use tournament::{Season, Tournament, TournamentId};
