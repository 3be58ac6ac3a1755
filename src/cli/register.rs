//! Register command implementation

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use indicatif::ProgressBar;

use crate::auth::{self, AuthMode, Credentials};
use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;

/// Fields the register command collects from flags or prompts
pub struct RegisterArgs {
    pub email: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?),
    }
}

/// Run the register command
pub async fn run(opts: &GlobalOptions, args: RegisterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    println!("{}", "Create a Victory AI account".bold());

    let email = prompt_if_missing(args.email, "Email")?;
    let username = prompt_if_missing(args.username, "Username")?;
    let first_name = prompt_if_missing(args.first_name, "First name")?;
    let last_name = prompt_if_missing(args.last_name, "Last name")?;

    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let credentials = Credentials {
        email,
        password,
        username: Some(username),
        first_name: Some(first_name),
        last_name: Some(last_name),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Creating account...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = auth::submit(&ctx.client, AuthMode::Register, &credentials).await;

    spinner.finish_and_clear();
    result?;

    // Registration does not return a token; the session starts at login
    println!("{} Account created", "✓".green());
    println!(
        "\nRun {} to sign in with your new account.",
        "voxctl login".cyan()
    );

    Ok(())
}
