pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod links;
pub mod models;
pub mod provider;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
