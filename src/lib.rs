pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;

/// Create app router against an existing pool
///
/// Useful for integration testing without starting the full server.
pub fn create_app(config: config::Config, pool: sqlx::SqlitePool) -> axum::Router {
    let state = AppState {
        diet_query: fitso_diet::Query {
            read_db: pool.clone(),
        },
        diet_command: fitso_diet::Command {
            write_db: pool.clone(),
        },
        pool,
        config,
    };

    routes::router(state)
}
