use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsreel::app::AppContext;
use newsreel::cli::{commands, Cli, Commands};
use newsreel::feed::NewsFeed;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.db)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Fetch => {
            commands::fetch(&ctx, cli.page_size).await?;
        }
        Commands::List { page } => {
            commands::list(&ctx, page, cli.page_size)?;
        }
        Commands::Tui => {
            let feed = NewsFeed::with_page_size(ctx.repository(), cli.page_size);
            newsreel::tui::run(feed).await?;
        }
    }

    Ok(())
}
