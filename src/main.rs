use std::io;

use anyhow::{anyhow, Context};
use gradebook::{AppError, LogCollector, Session, SettingsManager};

fn main() -> anyhow::Result<()> {
    // =========================================================================
    // SETTINGS - defaults unless ~/.config/gradebook/settings.toml exists
    // =========================================================================
    let settings = SettingsManager::load().unwrap_or_else(|e| {
        eprintln!("[Main] WARNING: Could not locate settings, using defaults: {}", e);
        Default::default()
    });

    // =========================================================================
    // LOGGING - file-backed and opt-in, so the terminal only shows the menu
    // =========================================================================
    let collector = if settings.logging.enabled {
        let collector = LogCollector::new(
            settings.logging.directory_path(),
            settings.logging.level_filter(),
        )
        .map_err(AppError::Logging)
        .context("LogCollector initialization failed")?;
        collector.install().map_err(AppError::Logging)?;
        log::info!("Gradebook {} logging to {}", gradebook::VERSION, collector.log_path().display());
        Some(collector)
    } else {
        None
    };

    // =========================================================================
    // SESSION
    // =========================================================================
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    let result = session.run();

    // =========================================================================
    // SHUTDOWN - make sure every queued log line reaches disk
    // =========================================================================
    if let Some(collector) = collector {
        if let Err(e) = collector.flush_blocking() {
            eprintln!("[Main] WARNING: Failed to flush session log: {}", e);
        }
        let failed = collector.failed_writes();
        if failed > 0 {
            eprintln!(
                "[Main] WARNING: {} log write(s) to {} failed",
                failed,
                collector.log_path().display()
            );
        }
    }

    result.map_err(|e| anyhow!(e.user_message()).context("Gradebook session failed"))
}
