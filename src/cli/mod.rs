//! CLI command parsing and execution.

pub mod auth;

use clap::{Args, Parser, Subcommand};

/// Eco CLI - sustainability dashboard for the terminal.
#[derive(Parser)]
#[command(name = "eco")]
#[command(about = "Sustainability dashboard for the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// View to open when launching the TUI without a subcommand.
    #[arg(long, env = "ECO_VIEW")]
    pub view: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the TUI interface.
    Tui {
        /// View to open first (home, dashboard, ai-consultant, scanner, about, resources).
        #[arg(long)]
        view: Option<String>,
    },

    /// Print one eco tip and exit.
    Tip,

    /// Manage configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage provider credentials.
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration.
    Show,

    /// Show the configuration file path.
    Path,
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Store an API key for a tip provider.
    Login(LoginArgs),

    /// Remove a stored API key.
    Logout {
        /// Provider name.
        provider: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    /// Provider name (prompted when omitted).
    #[arg(short, long)]
    pub provider: Option<String>,

    /// API key (prompted when omitted).
    #[arg(long)]
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_no_args() {
        let cli = Cli::parse_from(["eco"]);
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::parse_from(["eco", "-v"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["eco", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn tui_view_help_lists_every_view() {
        let mut cmd = Cli::command();
        let tui = cmd.find_subcommand_mut("tui").unwrap();
        let view = tui
            .get_arguments()
            .find(|arg| arg.get_id() == "view")
            .unwrap();
        let help = view.get_help().unwrap().to_string();

        for id in crate::tui::ViewState::ALL.map(crate::tui::ViewState::id) {
            assert!(help.contains(id), "{id} missing from `{help}`");
        }
        assert!(!help.contains("features"));
    }

    #[test]
    fn cli_parses_top_level_view() {
        let cli = Cli::parse_from(["eco", "--view", "scanner"]);
        assert_eq!(cli.view.as_deref(), Some("scanner"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_tui_command() {
        let cli = Cli::parse_from(["eco", "tui"]);
        assert!(matches!(cli.command, Some(Commands::Tui { view: None })));
    }

    #[test]
    fn cli_parses_tui_view() {
        let cli = Cli::parse_from(["eco", "tui", "--view", "dashboard"]);
        match cli.command {
            Some(Commands::Tui { view }) => assert_eq!(view.as_deref(), Some("dashboard")),
            _ => panic!("expected Tui command"),
        }
    }

    #[test]
    fn cli_parses_tip() {
        let cli = Cli::parse_from(["eco", "tip"]);
        assert!(matches!(cli.command, Some(Commands::Tip)));
    }

    #[test]
    fn cli_parses_config_show() {
        let cli = Cli::parse_from(["eco", "config", "show"]);
        match cli.command {
            Some(Commands::Config { command }) => {
                assert!(matches!(command, ConfigCommands::Show));
            }
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn cli_parses_config_path() {
        let cli = Cli::parse_from(["eco", "config", "path"]);
        match cli.command {
            Some(Commands::Config { command }) => {
                assert!(matches!(command, ConfigCommands::Path));
            }
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn cli_parses_auth_login() {
        let cli = Cli::parse_from(["eco", "auth", "login", "-p", "google", "--api-key", "k"]);
        match cli.command {
            Some(Commands::Auth {
                command: AuthCommands::Login(args),
            }) => {
                assert_eq!(args.provider.as_deref(), Some("google"));
                assert_eq!(args.api_key.as_deref(), Some("k"));
            }
            _ => panic!("expected Auth login command"),
        }
    }

    #[test]
    fn cli_parses_auth_logout() {
        let cli = Cli::parse_from(["eco", "auth", "logout", "groq"]);
        match cli.command {
            Some(Commands::Auth {
                command: AuthCommands::Logout { provider },
            }) => assert_eq!(provider, "groq"),
            _ => panic!("expected Auth logout command"),
        }
    }

    #[test]
    fn cli_verbose_is_global() {
        let cli = Cli::parse_from(["eco", "-v", "tui"]);
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Some(Commands::Tui { .. })));

        let cli = Cli::parse_from(["eco", "tui", "-v"]);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
