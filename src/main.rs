use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use eco_cli::{
    Config,
    cli::{AuthCommands, Cli, Commands, ConfigCommands, auth},
    tui::Route,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so they never interleave with `eco tip` output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // No subcommand = launch TUI
    let Some(command) = cli.command else {
        return launch_tui(cli.view).await;
    };

    match command {
        Commands::Tui { view } => {
            launch_tui(view.or(cli.view)).await?;
        }

        Commands::Tip => {
            let config = Config::load()?;
            let provider = config.tips.create_tip_provider()?;
            println!("{}", provider.tip().await?);
        }

        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let config = Config::load()?;
                println!("{}", toml::to_string_pretty(&config)?);
            }
            ConfigCommands::Path => {
                let path = Config::config_path()?;
                println!("{}", path.display());
            }
        },

        Commands::Auth { command } => match command {
            AuthCommands::Login(args) => auth::auth_login(args)?,
            AuthCommands::Logout { provider } => auth::auth_logout(&provider)?,
        },
    }

    Ok(())
}

async fn launch_tui(view: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let start = view.unwrap_or_else(|| config.tui.start_view.clone());
    eco_cli::tui::run(&config, Route::parse(&start)).await
}
