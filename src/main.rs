use anyhow::Context;
use tracing::info;

use staticd::config::Config;
use staticd::server::Server;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    let mut server = Server::bind(&cfg)?;
    let addr = server
        .local_addr()
        .context("failed to query bound address")?;
    info!("Listening on {}, serving {}", addr, cfg.root.display());

    server.run()
}
