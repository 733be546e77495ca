mod commands;
mod error;

use aw_core::{AwConfig, DatabaseSettings};
use aw_data::ProductDescription;
use aw_data_sqlx::SqlxRepository;
use clap::{Parser, Subcommand};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::Sqlite;

use error::ConsoleError;

#[derive(Parser)]
#[command(name = "aw-console", version, about = "Read AdventureWorks product descriptions")]
struct Cli {
    /// Configuration profile (overridden by AW_PROFILE)
    #[arg(long, default_value = "dev")]
    profile: String,
    /// Database URL, takes precedence over `app.database.url`
    #[arg(long)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print one description with its culture links
    Show {
        /// ProductDescriptionID
        id: i32,
    },
    /// Print every description with its culture links
    List,
    /// Print the number of descriptions
    Count,
}

#[tokio::main]
async fn main() {
    aw_core::init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<String, ConsoleError> {
    let config = AwConfig::load(&cli.profile)?;
    let mut settings = DatabaseSettings::from_config(&config)?;
    if let Some(url) = cli.database_url {
        settings.url = url;
    }
    tracing::info!(profile = config.profile(), url = %settings.url, "connecting");

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.url)
        .await
        .map_err(ConsoleError::Connect)?;
    let repo = SqlxRepository::<ProductDescription, Sqlite>::new(pool);

    match cli.command {
        Command::Show { id } => commands::show(&repo, id).await,
        Command::List => commands::list(&repo).await,
        Command::Count => commands::count(&repo).await,
    }
}
