use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use banyo::catalog::Catalog;
use banyo::config::Config;
use banyo::geo::Coordinate;
use banyo::location::SimulatedGps;
use banyo::prefs::PrefsStore;
use banyo::state::AppStore;
use banyo::ui;

/// Where the simulated device GPS puts you when nothing else is configured:
/// a street corner just south of the default map center.
const DEFAULT_SIMULATED_FIX: Coordinate = Coordinate::new(10.3120, 123.8900);

#[derive(Parser)]
#[command(name = "banyo", version, about = "Map-centric restroom finder for the terminal")]
struct Cli {
    /// Path to the TOML config file (default: platform config dir).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to the preference file (default: platform config dir).
    #[arg(long, value_name = "FILE")]
    prefs: Option<PathBuf>,

    /// Start with the offline banner up, as if launched without network.
    #[arg(long)]
    offline: bool,

    /// Simulate a device without a usable GPS: every fix attempt fails.
    #[arg(long)]
    no_gps: bool,

    /// Write logs to this file instead of the default location.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: PathBuf) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = fs::File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    // The terminal belongs to the UI, so logs go to a file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("banyo=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli
        .log_file
        .unwrap_or_else(|| Config::config_path().with_file_name("banyo.log"));
    init_logging(log_path)?;

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path).context("loading configuration")?;

    let prefs_path = cli.prefs.unwrap_or_else(PrefsStore::default_path);
    let prefs = PrefsStore::load_or_default(prefs_path);

    let catalog = Arc::new(Catalog::bundled());
    let store = Arc::new(AppStore::new(prefs, Arc::clone(&catalog)));

    let fix = if cli.no_gps {
        None
    } else {
        Some(config.map.simulated_fix.unwrap_or(DEFAULT_SIMULATED_FIX))
    };
    let gps = SimulatedGps::new(
        fix,
        std::time::Duration::from_millis(config.location.fix_delay_ms),
    );

    tracing::info!("starting banyo");
    ui::run(ui::Runtime {
        store,
        catalog,
        config,
        gps,
        start_offline: cli.offline,
    })
    .context("running UI")?;

    Ok(())
}
