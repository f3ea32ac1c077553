use std::str::FromStr;

use clap::{Parser, Subcommand};
use url::Url;

use motivar::commands::{cmd_add_phrases, cmd_show, IngestOutcome};
use motivar::config::Config;
use motivar::db::Repository;
use motivar::error::Result;
use motivar::feed::{Fetcher, PhraseFormat};
use motivar::models::Language;

const BANNER: &str = concat!(
    r#"
              ._ o o
              \_´-)|_
           ,""       \
         ,"  ## |   ಠ ಠ.
       ," ##   ,-\__    ´.
     ,"       /     ´--._;)
   ,"     ## / Motivar v"#,
    env!("CARGO_PKG_VERSION"),
    r#"
 ,"   ##    /
"#
);

#[derive(Parser)]
#[command(
    name = "motivar",
    version,
    about = "Print a random motivational quote",
    before_help = BANNER
)]
struct Cli {
    /// Quote language [br, us]
    #[arg(short = 'l', long, env = "MOTIVAR_LANGUAGE", global = true)]
    language: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a quote feed and store its phrases
    AddPhrases {
        /// Feed format [csv, json]
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Feed URL
        #[arg(short, long)]
        url: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the quote itself stays alone on stdout.
    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    let language = Language::from_str(cli.language.as_deref().unwrap_or(&config.language))?;
    let repo = Repository::new(&config.db_path).await?;

    match cli.command {
        Some(Commands::AddPhrases { format, url }) => {
            let format = PhraseFormat::from_str(&format)?;
            let url = Url::parse(&url)?;
            let fetcher = Fetcher::new(config.max_body_bytes);

            match cmd_add_phrases(&repo, &fetcher, format, &url, language).await? {
                IngestOutcome::Inserted(stats) => {
                    tracing::info!(
                        "OK, phrases into database: {} inserted, {} already known",
                        stats.inserted,
                        stats.skipped
                    );
                }
                IngestOutcome::DuplicateContent => {
                    tracing::warn!("This content already exists in the database");
                    std::process::exit(1);
                }
            }
        }
        None => cmd_show(&repo, language, config.db_preference).await?,
    }

    Ok(())
}
