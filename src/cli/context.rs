//! Command execution context
//!
//! Provides a unified context for command execution: config loading, client
//! initialization, and the session guard protecting signed-in commands. The
//! session travels through this context explicitly instead of being re-read
//! from disk ad hoc inside each command.

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::VictoryClient;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::session::{Claims, decode_claims};

/// Context for command execution containing config, client, and runtime
/// options.
pub struct CommandContext {
    /// Loaded configuration (session store)
    pub config: Config,
    /// Platform API client
    pub client: VictoryClient,
    /// Output format preference
    pub format: OutputFormat,
    /// Config path override, kept so writes land where reads came from
    config_path: Option<String>,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads config from the resolved path (a missing file means an empty
    /// session, not an error) and builds the API client against the
    /// configured or overridden host.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;

        // CLI flag wins over the host stored in config
        let host = opts.api_host.clone().or_else(|| config.api_host.clone());
        let client = VictoryClient::with_host(host)?;

        Ok(Self {
            config,
            client,
            format: opts.format,
            config_path: opts.config.clone(),
        })
    }

    /// Guard for signed-in commands.
    ///
    /// Returns the decoded claims when a stored token is present and
    /// decodable. An absent token and an undecodable one are treated
    /// identically: the command body never runs and the user is pointed at
    /// `voxctl login`. Decoding here is display-only; the backend remains
    /// the authority on whether the token is actually accepted.
    pub fn require_session(&self) -> Result<Claims> {
        self.config
            .token()
            .and_then(decode_claims)
            .ok_or_else(|| ConfigError::NotLoggedIn.into())
    }

    /// Persist the current config to the same location it was loaded from
    pub fn save_config(&self) -> Result<()> {
        self.config.save_at(self.config_path.as_deref())
    }
}
