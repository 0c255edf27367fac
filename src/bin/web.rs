//! JSON read API over the club feed builders.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! CLUB_FEED_SEED points at a JSON file used to fill the in-memory store.

use actix_web::{
    get,
    web::{Data, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::Utc;
use club_feed::{
    champion, clubs, history_for_player, matches_for, player, posts, roster_for_club,
    stages_for_tournament, team_page, tournament_directory, tournament_for_stage, DocumentStore,
    FeedError, FeedWindow, MemoryStore, ServerConfig,
};
use serde::Deserialize;
use std::sync::Arc;

type AppState = Data<dyn DocumentStore>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: entity id (e.g. /api/clubs/{id}/teams)
#[derive(Deserialize)]
struct IdPath {
    id: String,
}

/// Path segment: feed window name (yesterday, today, tomorrow)
#[derive(Deserialize)]
struct WindowPath {
    window: String,
}

/// Map a builder result to a JSON response: not-found parents are 404, everything else 500.
fn respond<T: serde::Serialize>(result: Result<T, FeedError>) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) if e.is_not_found() => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "club-feed",
    })
}

/// Matches of yesterday, today (two days wide) or tomorrow, grouped by sport.
#[get("/api/matches/{window}")]
async fn api_matches(state: AppState, path: Path<WindowPath>) -> HttpResponse {
    let window: FeedWindow = match path.window.parse() {
        Ok(w) => w,
        Err(e) => return HttpResponse::NotFound().json(serde_json::json!({ "error": e })),
    };
    let today = Utc::now().date_naive();
    respond(matches_for(&**state, window, today).await)
}

/// All clubs, sorted by city.
#[get("/api/clubs")]
async fn api_clubs(state: AppState) -> HttpResponse {
    respond(clubs(&**state).await)
}

/// Teams of a club with form, grouped by sport.
#[get("/api/clubs/{id}/teams")]
async fn api_club_teams(state: AppState, path: Path<IdPath>) -> HttpResponse {
    respond(roster_for_club(&**state, &path.id, Utc::now()).await)
}

/// Name and logo of a champion club.
#[get("/api/clubs/{id}/champion")]
async fn api_champion(state: AppState, path: Path<IdPath>) -> HttpResponse {
    respond(champion(&**state, &path.id).await)
}

/// Team details, players and matches.
#[get("/api/teams/{id}")]
async fn api_team(state: AppState, path: Path<IdPath>) -> HttpResponse {
    respond(team_page(&**state, &path.id).await)
}

#[get("/api/players/{id}")]
async fn api_player(state: AppState, path: Path<IdPath>) -> HttpResponse {
    match player(&**state, &path.id).await {
        Ok(Some(p)) => HttpResponse::Ok().json(p),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({ "error": "Player not found" })),
        Err(e) => respond::<()>(Err(e)),
    }
}

/// Every match a player appeared in.
#[get("/api/players/{id}/matches")]
async fn api_player_matches(state: AppState, path: Path<IdPath>) -> HttpResponse {
    respond(history_for_player(&**state, &path.id).await)
}

/// Latest season of every tournament, grouped by sport.
#[get("/api/tournaments")]
async fn api_tournaments(state: AppState) -> HttpResponse {
    respond(tournament_directory(&**state).await)
}

/// Stages of a tournament with matches and standings.
#[get("/api/tournaments/{id}/stages")]
async fn api_tournament_stages(state: AppState, path: Path<IdPath>) -> HttpResponse {
    respond(stages_for_tournament(&**state, &path.id).await)
}

/// Tournament a stage belongs to, with its feed heading.
#[get("/api/stages/{id}/tournament")]
async fn api_stage_tournament(state: AppState, path: Path<IdPath>) -> HttpResponse {
    respond(tournament_for_stage(&**state, &path.id).await)
}

/// News posts, newest first.
#[get("/api/posts")]
async fn api_posts(state: AppState) -> HttpResponse {
    respond(posts(&**state).await)
}

fn open_store(config: &ServerConfig) -> std::io::Result<MemoryStore> {
    let Some(path) = &config.seed_path else {
        log::warn!("CLUB_FEED_SEED not set, serving an empty store");
        return Ok(MemoryStore::new());
    };
    let store = MemoryStore::load(path).map_err(std::io::Error::other)?;
    log::info!("Loaded seed data from {}", path.display());
    Ok(store)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let store: Arc<dyn DocumentStore> = Arc::new(open_store(&config)?);
    let state: AppState = Data::from(store);

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_matches)
            .service(api_clubs)
            .service(api_club_teams)
            .service(api_champion)
            .service(api_team)
            .service(api_player)
            .service(api_player_matches)
            .service(api_tournaments)
            .service(api_tournament_stages)
            .service(api_stage_tournament)
            .service(api_posts)
    })
    .bind(bind)?
    .run()
    .await
}
