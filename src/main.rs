use anyhow::Result;
use clap::Parser;
use tracing::info;

use progbook::content;
use progbook::tui::app::App;
use progbook::tui::runner::run_tui;

#[derive(Parser)]
#[command(
    name = "progbook",
    about = "Terminal reader for 'How to Be a Good Programmer'"
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("progbook=info".parse()?),
        )
        .init();

    let _cli = Cli::parse();

    let languages = content::languages();
    content::validate(&languages)?;

    info!(
        "progbook starting: {} chapters, {} languages",
        content::chapters().len(),
        languages.len()
    );

    run_tui(App::new()).await
}
