//! Logout command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;

/// Run the logout command.
///
/// Clears the stored token and saves the config. Idempotent: logging out
/// with no session leaves the same end state and reports the same success.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    let had_session = ctx.config.token().is_some();
    ctx.config.clear_token();
    ctx.save_config()?;

    if had_session {
        println!("{} Signed out", "✓".green());
    } else {
        println!("{} Already signed out", "✓".green());
    }

    Ok(())
}
