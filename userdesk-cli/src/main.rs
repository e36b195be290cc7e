//! userdesk CLI - run the user directory server
//!
//! - `serve`: open the database, seed it, and serve the API plus HTML shell
//! - `seed`: create the schema and insert missing seed users, then exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod serve;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "userdesk",
    author,
    version,
    about = "User directory served as FastUI view descriptions over SQLite"
)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Log every SQL statement
    #[arg(long, global = true)]
    echo_sql: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
    /// Create the schema and insert the seed users
    Seed(serve::DbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        echo_sql: cli.echo_sql,
    })
    .ok();

    match cli.command {
        Commands::Serve(args) => serve::run_serve(args).await?,
        Commands::Seed(args) => serve::run_seed(args).await?,
    }

    Ok(())
}
