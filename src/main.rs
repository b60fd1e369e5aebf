use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use svgdb_mirror::config::SyncConfig;

const OUTPUT_DIR: &str = "Shadowverse Database";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config = SyncConfig::new(OUTPUT_DIR);
    match svgdb_mirror::run(&config).await {
        Ok(report) => {
            info!(
                "run complete: {} of {} targets saved",
                report.saved, report.targets
            );
        }
        Err(e) => {
            error!("run aborted: {}", e);
            std::process::exit(1);
        }
    }
}
