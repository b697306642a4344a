//! SmartOLT Monitor
//!
//! Headless launcher: loads configuration, rehydrates the local state and
//! logs store changes until interrupted.
//! Reads configuration from TOML file (~/.config/smartolt-monitor/config.toml).

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use smartolt::application::views::{scope, DashboardSummary};
use smartolt::config::{config_path, AppConfig, LogFormat};
use smartolt::App;

fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let path = config_path();
    let cfg = match AppConfig::load(&path) {
        Ok(cfg) => {
            init_logging(&cfg.logging.level, cfg.logging.format);
            info!("Configuration loaded from {}", path.display());
            cfg
        }
        Err(e) => {
            init_logging("info", LogFormat::Pretty);
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting SmartOLT Monitor...");

    let app = Arc::new(App::from_config(cfg));
    let mut events = app.subscribe();

    if let Some(report) = app.rehydrate().await {
        info!(
            restored = ?report.restored,
            seeded = ?report.seeded,
            "Local state ready"
        );
    }
    app.wait_until_ready().await;

    {
        let state = app.state().await;
        let user = state.auth.current_user();
        let visible = scope(user, state.olt.olts(), state.onu.onus());
        let summary = DashboardSummary::compute(&visible, state.auth.users().len());
        match user {
            Some(user) => info!(user = %user.username, role = %user.role, "Session restored"),
            None => info!("No active session"),
        }
        info!(
            app_name = %state.settings.settings().app_name,
            olts = summary.total_olts,
            onus = summary.total_onus,
            online = summary.online_onus,
            offline = summary.offline_onus,
            users = summary.total_users,
            "Dashboard"
        );
    }

    info!("Watching for changes. Press Ctrl+C to exit.");
    loop {
        tokio::select! {
            message = events.recv() => match message {
                Some(message) => info!(
                    event = message.event.event_type(),
                    id = %message.id,
                    "Store changed"
                ),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    info!("👋 SmartOLT Monitor stopped");
    Ok(())
}
