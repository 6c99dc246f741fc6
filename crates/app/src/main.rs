use anyhow::Context;
use chrono::Utc;

use fridgekeeper_app::{AppConfig, Session};

fn main() -> anyhow::Result<()> {
    fridgekeeper_observability::init();

    let config = AppConfig::from_env().context("invalid fridgekeeper configuration")?;
    let now = Utc::now();
    let session = Session::start(config, now).context("failed to load the starter inventory")?;

    let snapshot = serde_json::to_string(&session.snapshot(now))?;
    tracing::info!(snapshot = %snapshot, "fridge snapshot");

    let digest = session.notifications(now);
    if !digest.expired.is_empty() {
        tracing::warn!("{} item(s) have expired", digest.expired.len());
    }

    Ok(())
}
