use anyhow::Context;
use bridge_backend::{config::Settings, logging, training::TrainingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Nothing is served; the bind address is unused.
    let settings = Settings::from_env("");
    logging::init_tracing("bridge_backend=info,train=info");

    let dir = std::env::current_dir().context("cannot read working directory")?;
    TrainingConfig::from_settings(&settings).run(&dir).await?;
    Ok(())
}
