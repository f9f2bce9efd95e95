pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use app::App;
pub use config::AppConfig;
pub use error::{MemeError, Result};
