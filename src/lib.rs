pub mod app;
pub mod capture;
pub mod chart;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod mood;
pub mod seed;
pub mod state;
pub mod stats;
pub mod store;
pub mod ui;

pub use app::router;
pub use capture::submit_entry;
pub use chart::to_chart_points;
pub use config::{Config, SeedSource};
pub use mood::MoodLevel;
pub use seed::load_seed;
pub use state::AppState;
pub use stats::rolling_stats;
pub use store::EntryStore;
