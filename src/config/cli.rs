use crate::config::FileConfig;
use crate::core::command::{ScoreRequest, MAX_WINDOW_DAYS};
use crate::core::dispatcher::{ReportKind, ReportParams, DEFAULT_WINDOW_DAYS};
use crate::domain::model::OutputFormat;
use crate::utils::error::{Result, ScoresError};
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "footy-scores")]
#[command(about = "Football live scores, fixtures and league tables")]
pub struct CliConfig {
    #[arg(long, help = "Shows live scores from various leagues")]
    pub live: bool,

    #[arg(long, help = "Standings for a particular league", conflicts_with = "live")]
    pub standings: bool,

    #[arg(
        short,
        long,
        help = "League whose fixtures or standings you want to see (e.g. EPL, SA, BL)"
    )]
    pub league: Option<String>,

    #[arg(long, help = "Team whose fixtures you want to see", conflicts_with_all = ["live", "standings"])]
    pub team: Option<String>,

    #[arg(long, help = "Shows players for a particular team", requires = "team")]
    pub players: bool,

    #[arg(long, help = "Number of days in the past to show scores for [default: 6]")]
    pub time: Option<u32>,

    #[arg(long, help = "Print to stdout", conflicts_with_all = ["csv", "json"])]
    pub stdout: bool,

    #[arg(long, help = "Output in CSV format", conflicts_with = "json")]
    pub csv: bool,

    #[arg(long, help = "Output in JSON format")]
    pub json: bool,

    #[arg(short, long, help = "Save output to a file (only with --csv or --json)")]
    pub output_file: Option<PathBuf>,

    #[arg(long, env = "SOCCER_CLI_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    #[arg(long, default_value = "scores.toml", help = "Config file with the API token")]
    pub config: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn report_kind(&self) -> ReportKind {
        if self.live {
            ReportKind::Live
        } else if self.standings {
            ReportKind::Standings
        } else if self.team.is_some() {
            ReportKind::Team
        } else {
            ReportKind::League
        }
    }

    /// Flags first, then the config file, then the built-in default.
    pub fn output_format(&self, file: Option<&FileConfig>) -> OutputFormat {
        if self.csv {
            OutputFormat::Csv
        } else if self.json {
            OutputFormat::Json
        } else if self.stdout {
            OutputFormat::Stdout
        } else {
            file.and_then(|f| f.output.format).unwrap_or_default()
        }
    }

    pub fn request(&self, file: Option<&FileConfig>) -> ScoreRequest {
        let window_days = self
            .time
            .or_else(|| file.and_then(|f| f.output.window_days))
            .unwrap_or(DEFAULT_WINDOW_DAYS);

        ScoreRequest::football(
            self.report_kind(),
            ReportParams {
                league: self.league.as_ref().map(|l| l.to_uppercase()),
                window_days,
                team: self.team.as_ref().map(|t| t.to_uppercase()),
                players: self.players,
            },
        )
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(time) = self.time {
            validate_range("time", time, 1, MAX_WINDOW_DAYS)?;
        }

        if self.standings && self.league.is_none() {
            return Err(ScoresError::MissingConfigError {
                field: "league".to_string(),
            });
        }

        if self.output_file.is_some() && !(self.csv || self.json) {
            return Err(ScoresError::ConfigError {
                message: "--output-file needs --csv or --json".to_string(),
            });
        }

        Ok(())
    }
}
