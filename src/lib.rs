pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::FootballDataClient;
pub use app::writers::get_writer;
pub use config::{ApiSettings, FileConfig};
pub use self::core::{
    command::{parse_command, ScoreRequest, Sport},
    dispatcher::{Dispatcher, ReportKind, ReportParams},
    service::ScoresService,
};
pub use domain::leagues::LeagueRegistry;
pub use utils::error::{Result, ScoresError};
