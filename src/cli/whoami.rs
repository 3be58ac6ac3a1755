//! Whoami command implementation

use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::output::{json, table};
use crate::session::Claims;

/// Claims for table display
#[derive(Tabled)]
struct ClaimsDisplay {
    #[tabled(rename = "USER")]
    user: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl From<&Claims> for ClaimsDisplay {
    fn from(claims: &Claims) -> Self {
        Self {
            user: claims.display_name().to_string(),
            email: claims.email.clone().unwrap_or_else(|| "-".to_string()),
            id: claims.id.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Run the whoami command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    // Guarded: nothing below runs without a decodable session
    let claims = ctx.require_session()?;

    match ctx.format {
        OutputFormat::Table => {
            let rows = vec![ClaimsDisplay::from(&claims)];
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&claims)?);
        }
    }

    Ok(())
}
