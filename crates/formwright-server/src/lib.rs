//! HTTP surface of Formwright.
//!
//! * `POST /generate-form` – run the generation pipeline for `{ "query" }`.
//! * `POST /api/forms/save` – store a field list as a draft.
//! * `GET /api/user/:user_id` – list a user's saved forms.
//! * `GET /health` – liveness.
pub mod config;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use routes::build_router;
pub use state::AppState;
