//! Deploy command implementation

use std::time::Duration;

use colored::Colorize;
use indicatif::ProgressBar;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::VictoryApi;
use crate::error::Result;

/// Run the deploy command
pub async fn run(opts: &GlobalOptions, workflow: String) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    // Deploying is a signed-in action even though the deploy endpoint itself
    // takes no Authorization header
    ctx.require_session()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Deploying workflow '{}'...", workflow));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = ctx.client.deploy_workflow(&workflow).await;

    spinner.finish_and_clear();
    result?;

    println!(
        "{} Workflow '{}' deployed successfully",
        "✓".green(),
        workflow.bold()
    );

    Ok(())
}
