// API layer module (HTTP adapter over the domain)

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
