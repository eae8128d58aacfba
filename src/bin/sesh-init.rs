use clap::Parser;

use sesh_api::database::{schema, DatabaseManager};

#[derive(Parser)]
#[command(name = "sesh-init")]
#[command(about = "Provision the sesh API database")]
#[command(version)]
struct Cli {
    /// Drop existing tables before creating them
    #[arg(long)]
    drop: bool,

    /// Insert a demo user, profile, and post
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let pool = DatabaseManager::pool().await?;

    if cli.drop {
        schema::drop_tables(&pool).await?;
    }
    schema::create_tables(&pool).await?;
    if cli.seed {
        schema::seed(&pool).await?;
    }

    DatabaseManager::close().await;
    println!("Database ready");

    Ok(())
}
