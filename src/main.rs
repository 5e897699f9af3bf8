use partner_catalog::config::ScrapeConfig;
use partner_catalog::pipeline;
use partner_catalog::session::{ChromiumSession, PageSession};
use tracing::{error, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ScrapeConfig::default();

    let mut session = match ChromiumSession::launch(&config).await {
        Ok(session) => session,
        Err(e) => {
            error!("Browser launch error: {}", e);
            std::process::exit(1);
        }
    };

    let result = pipeline::run(&session, &config).await;

    if let Err(e) = session.close().await {
        warn!("Session shutdown error: {}", e);
    }

    match result {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Pipeline error: {}", e);
            std::process::exit(1);
        }
    }
}
