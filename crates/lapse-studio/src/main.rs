mod studio;

use anyhow::Result;
use lapse_engine::logging::{init_logging, LoggingConfig};
use lapse_engine::window::{Runtime, RuntimeConfig};

use studio::{Studio, TITLE};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("keys: P toggles frame cap, Space pauses the light, R resets it, Esc quits");

    let config = RuntimeConfig {
        title: TITLE.to_string(),
        ..RuntimeConfig::default()
    };

    if let Err(e) = Runtime::run(config, Studio::new()) {
        log::error!("{e:#}");
        return Err(e);
    }

    Ok(())
}
