//! Login command implementation

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use indicatif::ProgressBar;

use crate::auth::{self, AuthMode, AuthOutcome, Credentials};
use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::session::decode_claims;

/// Run the login command
pub async fn run(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    let email = match email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let credentials = Credentials {
        email,
        password,
        ..Default::default()
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Signing in...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = auth::submit(&ctx.client, AuthMode::Login, &credentials).await;

    // Clear the indicator on every outcome, not just success
    spinner.finish_and_clear();

    let outcome = result?;
    let AuthOutcome::LoggedIn { token } = outcome else {
        unreachable!("login mode yields LoggedIn");
    };

    ctx.config.set_token(token);
    ctx.save_config()?;

    let greeting = ctx
        .config
        .token()
        .and_then(decode_claims)
        .map(|claims| claims.display_name().to_string());

    match greeting {
        Some(name) => println!("{} Signed in as {}", "✓".green(), name.bold()),
        None => println!("{} Signed in", "✓".green()),
    }

    println!("\n{}", "Try running:".bold());
    println!("  {} - Show the signed-in user", "voxctl whoami".cyan());
    println!("  {} - Deploy a workflow", "voxctl deploy bookAppt".cyan());

    Ok(())
}
