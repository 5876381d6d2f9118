use anyhow::Context;
use clap::Parser;
use footy_scores::domain::model::OutputFormat;
use footy_scores::utils::logger;
use footy_scores::{
    parse_command, ApiSettings, Dispatcher, FileConfig, FootballDataClient, LeagueRegistry,
    ScoresService,
};
use std::io::Read;

/// Answers one `/scores ...` slash command and prints the reply.
#[derive(Parser)]
#[command(name = "scores-command")]
#[command(about = "Replies to a /scores slash command, e.g. `football league EPL 3`")]
struct Args {
    /// Command text; read from stdin when omitted
    text: Vec<String>,

    #[arg(long, env = "SOCCER_CLI_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Config file with the API token
    #[arg(long, default_value = "scores.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_json_logger();

    let text = if args.text.is_empty() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading command from stdin")?;
        buffer
    } else {
        args.text.join(" ")
    };
    tracing::info!(command = %text.trim(), "Received slash command");

    // 指令錯誤直接回覆給使用者
    let request = match parse_command(&text) {
        Ok(request) => request,
        Err(e) => {
            println!("{}", e.user_friendly_message());
            return Ok(());
        }
    };

    let file = FileConfig::load_optional(&args.config)?;
    let settings = match ApiSettings::resolve(args.api_token, file.as_ref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            println!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let client = FootballDataClient::new(settings).context("building HTTP client")?;
    let service = ScoresService::new(
        client,
        Dispatcher::new(LeagueRegistry::builtin(), OutputFormat::Stdout),
    );

    println!("{}", service.run(&request).await);
    Ok(())
}
