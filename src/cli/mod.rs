//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod context;
pub mod deploy;
pub mod login;
pub mod logout;
pub mod register;
pub mod status;
pub mod whoami;

pub use context::CommandContext;

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - human-optimized (default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// voxctl - CLI companion for the Victory AI voice-agent platform
#[derive(Parser, Debug)]
#[command(name = "voxctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "VOXCTL_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "VOXCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override API host
    #[arg(long, global = true, env = "VOXCTL_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "VOXCTL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to the platform and store a session token
    Login {
        /// Account email (prompted for when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted for when omitted)
        #[arg(long, env = "VOXCTL_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Create a new platform account
    Register {
        /// Account email (prompted for when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted for when omitted)
        #[arg(long, env = "VOXCTL_PASSWORD", hide_env = true)]
        password: Option<String>,

        /// Username (prompted for when omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// First name (prompted for when omitted)
        #[arg(long)]
        first_name: Option<String>,

        /// Last name (prompted for when omitted)
        #[arg(long)]
        last_name: Option<String>,
    },

    /// Sign out and discard the stored session token
    Logout,

    /// Show the signed-in user from the session token
    Whoami,

    /// Show configuration and session status
    Status,

    /// Deploy an n8n workflow to the platform
    #[command(after_help = "EXAMPLES:\n  \
            voxctl deploy getVehicleByPhone   # Vehicle lookup by caller phone\n  \
            voxctl deploy suggestApptSlots    # Appointment slot suggestions\n  \
            voxctl deploy bookAppt            # Appointment booking")]
    Deploy {
        /// Workflow name to deploy
        workflow: String,
    },
}

/// Global CLI options passed to all command handlers.
///
/// Consolidates the global flags from the CLI into a single unit, keeping
/// handler signatures small.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.voxctl/config.yaml)
    pub config: Option<String>,

    /// Custom API host for development/testing
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
        }
    }

    /// Get config path as `Option<&str>`
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_from_cli() {
        let cli = Cli::parse_from([
            "voxctl",
            "--config",
            "/custom/path",
            "--api-host",
            "http://localhost:8080",
            "logout",
        ]);

        let opts = GlobalOptions::from_cli(&cli);
        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.api_host.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_cli_parses_deploy_workflow() {
        let cli = Cli::parse_from(["voxctl", "deploy", "bookAppt"]);
        match cli.command {
            Commands::Deploy { workflow } => assert_eq!(workflow, "bookAppt"),
            _ => panic!("Expected deploy command"),
        }
    }

    #[test]
    fn test_cli_parses_login_flags() {
        let cli = Cli::parse_from([
            "voxctl",
            "login",
            "--email",
            "user@example.com",
            "--password",
            "secret1",
        ]);
        match cli.command {
            Commands::Login { email, password } => {
                assert_eq!(email.as_deref(), Some("user@example.com"));
                assert_eq!(password.as_deref(), Some("secret1"));
            }
            _ => panic!("Expected login command"),
        }
    }
}
