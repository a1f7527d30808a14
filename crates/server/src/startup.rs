use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::{goal_service::GoalService, rates::YahooRateProvider};

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Prefer the tuned pool from config.toml; fall back to DATABASE_URL.
async fn connect_db() -> anyhow::Result<DatabaseConnection> {
    if let Ok(mut cfg) = configs::load_default() {
        cfg.database.normalize_from_env();
        if cfg.database.validate().is_ok() {
            return models::db::connect_with_config(&cfg.database).await;
        }
    }
    models::db::connect().await
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let db = connect_db().await?;
    migration::Migrator::up(&db, None).await?;
    info!("database migrations applied");

    let state = ServerState {
        goals: Arc::new(GoalService::new(db, Arc::new(YahooRateProvider))),
    };

    let app: Router = routes::build_router(state, build_cors());

    let addr = load_bind_addr()?;
    info!(%addr, "starting saving goals api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
