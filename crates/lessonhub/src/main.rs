use fileserver::{LessonServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    tracing::info!("Content root: {}", config.content_root.display());

    let server = LessonServer::new(config.content_root);
    if let Err(e) = server.serve(&config.host, config.port).await {
        tracing::error!("Lesson server failed: {}", e);
        std::process::exit(1);
    }
}
