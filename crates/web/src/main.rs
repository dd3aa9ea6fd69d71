use anyhow::Context;
use axum::{Extension, Router};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::players::handlers::list_players,
        features::players::handlers::get_player,
        features::players::handlers::create_player,
        features::matches::handlers::list_matches,
        features::matches::handlers::get_match,
        features::matches::handlers::create_match,
        features::matches::handlers::update_match_status,
        features::matches::handlers::run_match_scoring,
        features::matches::handlers::match_leaderboard,
        features::matches::handlers::list_match_performances,
        features::squads::handlers::create_squad,
        features::squads::handlers::get_squad_for_match_and_user,
        features::squads::handlers::list_squads_for_user,
        features::leagues::handlers::create_league,
        features::leagues::handlers::get_league_by_code,
        features::leagues::handlers::join_league,
        features::leagues::handlers::list_leagues_for_user,
        features::leagues::handlers::league_leaderboard,
        features::tournaments::handlers::list_tournaments,
        features::tournaments::handlers::create_tournament,
        features::tournaments::handlers::add_matches,
        features::tournaments::handlers::season_leaderboard,
        features::users::handlers::create_user,
        features::users::handlers::get_user,
    ),
    components(
        schemas(
            storage::dto::player::CreatePlayerRequest,
            storage::dto::matches::CreateMatchRequest,
            storage::dto::matches::UpdateMatchStatusRequest,
            storage::dto::matches::PlayerStatLine,
            storage::dto::matches::ScoringRunRequest,
            storage::dto::matches::ScoringRunSummary,
            storage::dto::squad::CreateSquadRequest,
            storage::dto::league::CreateLeagueRequest,
            storage::dto::league::JoinLeagueRequest,
            storage::dto::tournament::CreateTournamentRequest,
            storage::dto::tournament::AddMatchesRequest,
            storage::dto::user::CreateUserRequest,
            storage::dto::leaderboard::MatchLeaderboardEntry,
            storage::dto::leaderboard::LeagueLeaderboardEntry,
            storage::dto::leaderboard::SeasonLeaderboardEntry,
            storage::models::Player,
            storage::models::Match,
            storage::models::MatchPerformance,
            storage::models::Squad,
            storage::models::League,
            storage::models::Tournament,
            storage::models::AppUser,
        )
    ),
    tags(
        (name = "players", description = "Public player endpoints"),
        (name = "matches", description = "Match schedule, scoring runs, and leaderboards"),
        (name = "squads", description = "Fantasy squad drafting"),
        (name = "leagues", description = "Private leagues and their standings"),
        (name = "tournaments", description = "Tournaments and season leaderboards"),
        (name = "users", description = "User identities"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Fantasy Cricket API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    let scoring_rules = config.scoring_rules.clone();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/players", features::players::routes(api_keys.clone()))
        .nest("/api/matches", features::matches::routes(api_keys.clone()))
        .nest("/api/squads", features::squads::routes())
        .nest("/api/leagues", features::leagues::routes())
        .nest("/api/tournaments", features::tournaments::routes(api_keys))
        .nest("/api/users", features::users::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(scoring_rules))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
