//! CureChat server — shared state, routes, and router assembly.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
