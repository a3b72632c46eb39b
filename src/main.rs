use std::sync::Arc;

use dolla::cli::{Cli, HELP};
use dolla::config::{ServerConfig, WidgetConfig};
use dolla::remote::HttpChatBackend;
use dolla::render::PlainText;
use dolla::server;
use dolla::widget::ChatWidget;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    run().await?;
    Ok(())
}

async fn run() -> dolla::error::Result<()> {
    let server_config = ServerConfig::from_env()?;
    let widget_config = WidgetConfig::from_env();

    // Without a remote chat server, run one in-process and talk to it.
    let chat_url = match widget_config.chat_url.clone() {
        Some(url) => url,
        None => {
            let port = server_config.port;
            let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
            let app = server::app(&server_config);
            tokio::spawn(async move {
                tracing::info!(port, "Chat API server started");
                if let Err(e) = axum::serve(listener, app).await {
                    tracing::error!(error = %e, "Chat API server stopped");
                }
            });
            format!("http://127.0.0.1:{port}")
        }
    };

    eprintln!("💸 Dolla v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Chat API: {chat_url}/api/chat");
    eprintln!("   {HELP}\n");

    let backend = HttpChatBackend::new(&chat_url, widget_config.request_timeout);
    let widget = ChatWidget::new(Arc::new(backend));
    Cli::new(widget, PlainText).run().await?;

    Ok(())
}
