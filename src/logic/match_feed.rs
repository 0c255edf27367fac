//! Match feed: every match in a date window, joined and grouped by sport.

use crate::error::FeedError;
use crate::logic::fetch::fetch_where;
use crate::logic::resolver::Resolver;
use crate::models::{
    BySport, GameMatch, Lineups, MatchId, PlayerId, Score, Sport, SportList, StageId, TeamId,
};
use crate::store::{DocumentStore, Filter};
use chrono::{Days, NaiveDate};
use futures_util::future::try_join_all;
use futures_util::try_join;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Named feed windows, all relative to the current UTC day.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeedWindow {
    /// `[today-1, today)`
    Yesterday,
    /// `[today, today+2)`: two calendar days wide.
    Today,
    /// `[today+1, today+2)`
    Tomorrow,
}

impl FeedWindow {
    /// Half-open `[start, end)` day bounds.
    pub fn bounds(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let shift = |days: u64| today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
        match self {
            FeedWindow::Yesterday => (
                today.checked_sub_days(Days::new(1)).unwrap_or(NaiveDate::MIN),
                today,
            ),
            FeedWindow::Today => (today, shift(2)),
            FeedWindow::Tomorrow => (shift(1), shift(2)),
        }
    }
}

impl FromStr for FeedWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yesterday" => Ok(FeedWindow::Yesterday),
            "today" => Ok(FeedWindow::Today),
            "tomorrow" => Ok(FeedWindow::Tomorrow),
            other => Err(format!("unknown feed window `{other}`")),
        }
    }
}

impl fmt::Display for FeedWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FeedWindow::Yesterday => "yesterday",
            FeedWindow::Today => "today",
            FeedWindow::Tomorrow => "tomorrow",
        })
    }
}

/// A match ready for display in a feed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCard {
    pub match_id: MatchId,
    pub team_a_id: TeamId,
    pub team_a_name: String,
    pub team_a_logo: String,
    pub team_b_id: TeamId,
    pub team_b_name: String,
    pub team_b_logo: String,
    pub stage_id: StageId,
    pub location: String,
    pub players: Lineups,
    pub final_score: Option<Score>,
    pub date: String,
    pub motm: Option<PlayerId>,
    pub sport: Sport,
    pub tournament_string: String,
}

impl SportList for MatchCard {
    const KEY_SUFFIX: &'static str = "Matches";
}

fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Matches dated in `[start, end)`, sorted by tournament heading, grouped by sport.
pub async fn matches_in_window(
    store: &dyn DocumentStore,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<BySport<MatchCard>, FeedError> {
    build_feed(store, start, end).await.inspect_err(|e| {
        log::error!("Error fetching matches for {start}..{end}: {e}");
    })
}

/// Feed for a named window relative to `today`.
pub async fn matches_for(
    store: &dyn DocumentStore,
    window: FeedWindow,
    today: NaiveDate,
) -> Result<BySport<MatchCard>, FeedError> {
    let (start, end) = window.bounds(today);
    matches_in_window(store, start, end).await
}

async fn build_feed(
    store: &dyn DocumentStore,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<BySport<MatchCard>, FeedError> {
    let window = [
        Filter::gte("date", day_key(start)),
        Filter::lt("date", day_key(end)),
    ];
    let matches = fetch_where::<GameMatch>(store, &window).await?;
    log::debug!("{} match(es) dated {start}..{end}", matches.len());

    let resolver = Resolver::new(store);
    let mut cards = try_join_all(matches.into_iter().map(|m| card(&resolver, m))).await?;
    cards.sort_by(|a, b| a.tournament_string.cmp(&b.tournament_string));

    let (feed, unsorted) = BySport::partition(cards, |c| &c.sport);
    for c in &unsorted {
        log::warn!("Match {} has unrecognised sport `{}`, left out of the feed", c.match_id, c.sport);
    }
    Ok(feed)
}

async fn card(resolver: &Resolver<'_>, m: GameMatch) -> Result<MatchCard, FeedError> {
    let (team_a, team_b, tournament) = try_join!(
        resolver.team_club(&m.team_a_id),
        resolver.team_club(&m.team_b_id),
        resolver.stage_tournament(&m.stage_id),
    )?;
    Ok(MatchCard {
        match_id: m.id,
        team_a_id: m.team_a_id,
        team_a_name: team_a.name,
        team_a_logo: team_a.logo,
        team_b_id: m.team_b_id,
        team_b_name: team_b.name,
        team_b_logo: team_b.logo,
        stage_id: m.stage_id,
        location: m.location,
        players: m.players,
        final_score: m.final_score,
        date: m.date,
        motm: m.motm,
        sport: tournament.sport,
        tournament_string: tournament.tournament_stage_string,
    })
}
