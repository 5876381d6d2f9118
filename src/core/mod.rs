pub mod command;
pub mod dispatcher;
pub mod grouping;
pub mod normalizer;
pub mod service;

pub use crate::domain::model::{ApiResponse, Fixture, LeagueTable, LiveGame, MatchResult, Score};
pub use crate::domain::ports::{Endpoint, Renderer, ScoresApi};
pub use crate::utils::error::Result;
