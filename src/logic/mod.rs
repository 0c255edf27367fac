//! Read-side builders: join documents across collections into display records.

mod club_roster;
mod directory;
mod fetch;
mod form;
mod lookups;
mod match_feed;
mod player_history;
mod resolver;
mod stages;
mod team_page;
mod tournament_context;

pub use club_roster::{roster_for_club, RosterTeam};
pub use directory::{latest_seasons, tournament_directory};
pub use form::{classify, compute_form, form_from_matches, Form, FormResult, FORM_LENGTH};
pub use lookups::{champion, clubs, player, players, posts};
pub use match_feed::{matches_for, matches_in_window, FeedWindow, MatchCard};
pub use player_history::{history_for_player, PlayerMatch};
pub use resolver::{resolve_team_club, Resolver};
pub use stages::{
    stages_for_tournament, tally, StageMatch, StageView, Standings, StandingRow, TeamRecord,
};
pub use team_page::{team_matches, team_page, TeamMatch, TeamPage};
pub use tournament_context::{tournament_for_stage, TournamentContext};
