use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use corkboard::app::AppContext;
use corkboard::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.api_url.as_deref())?;

    match cli.command {
        Commands::List => {
            commands::list(&ctx).await?;
        }
        Commands::Post { name, content } => {
            commands::post(&ctx, &name, &content).await?;
        }
        Commands::Comment { feed_id, content } => {
            commands::comment(&ctx, feed_id, &content).await?;
        }
        Commands::Tui => {
            corkboard::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
