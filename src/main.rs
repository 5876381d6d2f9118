use anyhow::Context;
use clap::Parser;
use footy_scores::utils::{logger, validation::Validate};
use footy_scores::{
    ApiSettings, CliConfig, Dispatcher, FileConfig, FootballDataClient, LeagueRegistry,
    ScoresService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting footy-scores CLI");

    // 驗證參數
    if let Err(e) = config.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let file = match FileConfig::load_optional(&config.config) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", config.config.display(), e);
            eprintln!("💡 Make sure the file is valid TOML format");
            std::process::exit(1);
        }
    };

    let settings = match ApiSettings::resolve(config.api_token.clone(), file.as_ref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let client = FootballDataClient::new(settings).context("building HTTP client")?;
    let dispatcher = Dispatcher::new(
        LeagueRegistry::builtin(),
        config.output_format(file.as_ref()),
    );
    let service = ScoresService::new(client, dispatcher);

    let request = config.request(file.as_ref());
    tracing::info!("Rendering {} report", request.kind);
    let report = service.run(&request).await;

    match &config.output_file {
        Some(path) => {
            tokio::fs::write(path, &report)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            println!("📁 Output saved to: {}", path.display());
        }
        None => println!("{}", report),
    }

    Ok(())
}
