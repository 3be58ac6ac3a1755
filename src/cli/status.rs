//! Status command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::config::Config;
use crate::error::Result;
use crate::session::decode_claims;

/// Run the status command to display configuration and session status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "voxctl Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());

    let ctx = CommandContext::new(opts)?;

    // API host (only shown when custom)
    if let Some(host) = opts.api_host.as_deref().or(ctx.config.api_host.as_deref()) {
        println!("API host: {}", host.cyan());
    }

    println!();

    match ctx.config.token() {
        None => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run 'voxctl login' to sign in");
        }
        Some(token) => match decode_claims(token) {
            None => {
                // Present but undecodable: same as no session
                println!("{} Stored token is not decodable", "✗".red());
                println!("  → Run 'voxctl login' to sign in again");
            }
            Some(claims) => {
                println!(
                    "{} Signed in as {}",
                    "✓".green(),
                    claims.display_name().bold()
                );

                // Informational only: expiry is never enforced locally and
                // the backend remains the authority on token acceptance
                if let Some(exp) = claims.exp {
                    if let Some(expires_at) = chrono::DateTime::from_timestamp(exp, 0) {
                        if expires_at < chrono::Utc::now() {
                            println!(
                                "{} Token expiry claim is in the past ({})",
                                "⚠".yellow(),
                                expires_at.to_rfc3339()
                            );
                            println!("  → The backend may reject it; sign in again if so");
                        } else {
                            println!(
                                "{} Token expiry claim: {}",
                                "○".dimmed(),
                                expires_at.to_rfc3339()
                            );
                        }
                    }
                }
            }
        },
    }

    println!();

    Ok(())
}
