mod render;
mod server;

use boda_core::config::{self, shellexpand, SiteConfig};
use boda_core::locale::Locale;
use boda_core::route::{build_locale_path, Route};
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser)]
#[command(name = "boda", version, about = "Iker eta Nerea wedding site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, env = "BODA_CONFIG", default_value = "boda.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site.
    Serve {
        /// Override the configured port.
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Validate the message catalogs and report untranslated keys.
    Check,
    /// Print the locale-prefixed path of every page.
    Paths,
}

/// Log to stdout, or to a daily file when `log_dir` is set.
///
/// The returned guard must live as long as logging is needed.
fn init_logging(site: &SiteConfig) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&site.log_level));

    if site.log_dir.is_empty() {
        tracing_subscriber::fmt().with_env_filter(filter).init();
        return None;
    }

    let appender = tracing_appender::rolling::daily(shellexpand(&site.log_dir), "boda.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let found = config::read(&cli.config)?;
    let file_found = found.is_some();
    let mut cfg = found.unwrap_or_default();
    let _guard = init_logging(&cfg.site);
    if !file_found {
        tracing::info!("Config file not found at {}, using defaults", cli.config);
    }

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                cfg.server.port = port;
            }
            let catalog = cfg.i18n.catalog()?;
            for report in catalog.coverage() {
                if !report.missing.is_empty() {
                    tracing::warn!(
                        "{} catalog is missing {} keys, serving them in {}",
                        report.locale,
                        report.missing.len(),
                        Locale::DEFAULT
                    );
                }
            }
            let state = server::SiteState::new(catalog, &cfg.site.name);
            server::serve(&cfg.server, state).await?;
        }
        Commands::Check => {
            let catalog = cfg.i18n.catalog()?;
            println!("{}: catalog check\n", cfg.site.name);
            let mut untranslated = 0;
            for report in catalog.coverage() {
                println!(
                    "  {}: {:.1}% of {} keys",
                    report.locale,
                    report.coverage_percent(),
                    report.total
                );
                for key in &report.missing {
                    println!("    missing: {key}");
                }
                untranslated += report.missing.len();
            }
            if untranslated > 0 {
                anyhow::bail!("{untranslated} keys fall back to {}", Locale::DEFAULT);
            }
        }
        Commands::Paths => {
            for locale in Locale::ALL {
                for route in Route::ALL {
                    println!("{}", build_locale_path(locale, route.path()));
                }
            }
        }
    }

    Ok(())
}
