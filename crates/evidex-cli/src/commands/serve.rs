//! Web server command.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use evidex_core::files;
use evidex_core::layout::ChromeOptions;
use evidex_web::auth::CookieAuth;
use evidex_web::state::AppState;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Suppress the header chrome for anonymous pages
    #[arg(long)]
    pub no_navbar: bool,

    /// Suppress the footer chrome for anonymous pages
    #[arg(long)]
    pub no_footer: bool,
}

/// Map the CLI suppression flags onto the chrome options.
fn chrome_options(args: &ServeArgs) -> ChromeOptions {
    ChromeOptions {
        show_navbar: !args.no_navbar,
        show_footer: !args.no_footer,
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let chrome = chrome_options(&args);

    let state = AppState::new(Arc::new(CookieAuth), chrome, files::sample_files());

    println!();
    println!("  {} {}", "Evidex".cyan().bold(), "Dashboard".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Dashboard".green(),
        args.host,
        args.port
    );
    println!(
        "  {}     http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    tracing::info!(
        host = %args.host,
        port = args.port,
        show_navbar = chrome.show_navbar,
        show_footer = chrome.show_footer,
        "starting dashboard server"
    );

    evidex_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(no_navbar: bool, no_footer: bool) -> ServeArgs {
        ServeArgs {
            port: 3030,
            host: "127.0.0.1".to_string(),
            no_navbar,
            no_footer,
        }
    }

    #[test]
    fn test_default_flags_show_all_chrome() {
        let chrome = chrome_options(&args(false, false));
        assert!(chrome.show_navbar);
        assert!(chrome.show_footer);
    }

    #[test]
    fn test_suppression_flags_invert_into_options() {
        let chrome = chrome_options(&args(true, false));
        assert!(!chrome.show_navbar);
        assert!(chrome.show_footer);

        let chrome = chrome_options(&args(false, true));
        assert!(chrome.show_navbar);
        assert!(!chrome.show_footer);
    }
}
