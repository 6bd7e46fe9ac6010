//! bizdocs command-line front end
//!
//! Computes, prints, and saves business documents described as JSON drafts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bizdocs_shared::AppConfig;

mod commands;

/// Document summaries, printing, and backend sync for bizdocs.
#[derive(Parser, Debug)]
#[command(name = "bizdocs", version, about, long_about = None)]
struct Cli {
    /// Use the configured VAT rate instead of asking the backend.
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the computed summary of a document draft as JSON.
    Summary {
        /// Draft JSON file.
        file: PathBuf,
        /// VAT rate to use when the draft has none.
        #[arg(long)]
        vat_rate: Option<Decimal>,
    },

    /// Render a document draft as paged text.
    Print {
        /// Draft JSON file.
        file: PathBuf,
        /// Lines per page.
        #[arg(long, default_value_t = 60)]
        page_lines: usize,
    },

    /// Validate a withholding-tax certificate and show its totals.
    Certificate {
        /// Certificate JSON file.
        file: PathBuf,
        /// Render the certificate as text instead of JSON.
        #[arg(long)]
        print: bool,
    },

    /// Save a draft or certificate to the backend.
    Save {
        /// Draft or certificate JSON file.
        file: PathBuf,
        /// Update the document with this ID instead of creating one.
        #[arg(long)]
        id: Option<String>,
        /// The file holds a withholding-tax certificate.
        #[arg(long)]
        certificate: bool,
    },

    /// Show the company settings.
    Settings {
        /// Bypass the cache and fetch again.
        #[arg(long)]
        refresh: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(command = ?cli.command, offline = cli.offline, "bizdocs starting");

    let ctx = commands::Context::new(config, cli.offline)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Summary { file, vat_rate } => {
            commands::summary(&ctx, &file, vat_rate, &mut stdout).await
        }
        Commands::Print { file, page_lines } => {
            commands::print(&ctx, &file, page_lines, &mut stdout).await
        }
        Commands::Certificate { file, print } => {
            commands::certificate(&ctx, &file, print, &mut stdout)
        }
        Commands::Save {
            file,
            id,
            certificate,
        } => commands::save(&ctx, &file, id.as_deref(), certificate, &mut stdout).await,
        Commands::Settings { refresh } => commands::settings(&ctx, refresh, &mut stdout).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_parse_summary_with_vat_rate() {
        let cli = Cli::try_parse_from(["bizdocs", "summary", "draft.json", "--vat-rate", "0"]).unwrap();
        match cli.command {
            Commands::Summary { file, vat_rate } => {
                assert_eq!(file, PathBuf::from("draft.json"));
                assert_eq!(vat_rate, Some(dec!(0)));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(!cli.offline);
    }

    #[test]
    fn cli_parse_save_update() {
        let cli = Cli::try_parse_from([
            "bizdocs",
            "--offline",
            "save",
            "cert.json",
            "--certificate",
            "--id",
            "0190f1c2-7a4b-7c3d-8e9f-0a1b2c3d4e5f",
        ])
        .unwrap();
        assert!(cli.offline);
        assert!(matches!(
            cli.command,
            Commands::Save {
                certificate: true,
                id: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn cli_parse_print_default_page_lines() {
        let cli = Cli::try_parse_from(["bizdocs", "print", "draft.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Print { page_lines: 60, .. }));
    }

    #[test]
    fn cli_parse_settings_refresh() {
        let cli = Cli::try_parse_from(["bizdocs", "settings", "--refresh"]).unwrap();
        assert!(matches!(cli.command, Commands::Settings { refresh: true }));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["bizdocs"]).is_err());
    }
}
