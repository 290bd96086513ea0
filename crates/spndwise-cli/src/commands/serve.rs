//! Server command implementation

use anyhow::Result;
use spndwise_core::{Ledger, Settings};
use spndwise_server::ServerConfig;

pub async fn cmd_serve(
    ledger: Ledger,
    settings: &Settings,
    host: Option<&str>,
    port: Option<u16>,
) -> Result<()> {
    let host = host.unwrap_or(&settings.server.host);
    let port = port.unwrap_or(settings.server.port);

    println!("🚀 Starting spndwise web server...");
    println!("   Listening: http://{}:{}", host, port);
    println!(
        "   Records: {} subscriptions, {} expenses",
        ledger.list_subscriptions()?.len(),
        ledger.list_expenses()?.len()
    );
    println!("   Insight provider: {}", settings.insights.provider);
    if settings.server.allowed_origins.is_empty() {
        println!("   CORS: same-origin only");
    } else {
        println!(
            "   CORS origins: {}",
            settings.server.allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = ServerConfig::from(settings);
    spndwise_server::serve_with_config(ledger, host, port, config).await?;

    Ok(())
}
