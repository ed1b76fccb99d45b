use anyhow::Result;
use tokcount_config::Config;
use tokcount_web::WebServer;

use super::build_pipeline;

pub async fn handle(config: &Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    let pipeline = build_pipeline(config)?;
    let host = host.unwrap_or_else(|| config.web.host.clone());
    let port = port.unwrap_or(config.web.port);

    let server = WebServer::new(
        pipeline,
        config.page.clone(),
        config.example_text(),
        config.default_model.clone(),
    );

    println!("Web UI available at http://{}:{}", host, port);
    server.serve(&host, port).await
}
