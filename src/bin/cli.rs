use clap::{Parser, Subcommand};
use codewars_leaderboard::config::DEFAULT_LOG_FILTER;
use codewars_leaderboard::render::{render_table, LeaderboardView};
use codewars_leaderboard::{LeaderboardConfig, LeaderboardEngine, LeaderboardError, LeaderboardState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "leaderboard-cli")]
#[command(about = "Codewars leaderboard CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Profile API endpoint (identifier is appended)
    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch users and print the leaderboard
    Show {
        /// Comma-separated usernames
        users: String,

        /// Ranking category ("overall" or a language)
        #[arg(short, long, default_value = "overall")]
        by: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the ranking categories available for these users
    Categories {
        /// Comma-separated usernames
        users: String,
    },

    /// Fetch once, then switch categories from stdin
    Interactive {
        /// Comma-separated usernames
        users: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = LeaderboardConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(secs) = cli.timeout {
        config.request_timeout_secs = secs;
    }

    let engine = LeaderboardEngine::new(config)?;

    match cli.command {
        Commands::Show { users, by, json } => {
            let state = show_or_exit(&engine, &users).await?;
            let state = engine.change_selector(state, by.as_str().into());
            let view = LeaderboardView::from_state(&state, engine.config());

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render_table(&view));
            }
        }

        Commands::Categories { users } => {
            let state = show_or_exit(&engine, &users).await?;

            for failure in state.failures().filter_map(|r| r.error_message()) {
                eprintln!("⚠️  {}", failure);
            }
            for selector in state.selectors() {
                println!("{}", selector);
            }
        }

        Commands::Interactive { users } => {
            let mut state = show_or_exit(&engine, &users).await?;
            print_state(&engine, &state);

            println!("\nType a category to re-rank, `fetch <users>` to reload, `quit` to exit.");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();

            while let Some(line) = lines.next_line().await? {
                let line = line.trim();
                match line {
                    "" => continue,
                    "quit" | "exit" => break,
                    _ => {}
                }

                state = match line.strip_prefix("fetch ") {
                    Some(users) => match engine.show_rankings(state.clone(), users).await {
                        Ok(next) => next,
                        Err(e) => {
                            eprintln!("❌ {}", e);
                            continue;
                        }
                    },
                    None => engine.change_selector(state, line.into()),
                };
                print_state(&engine, &state);
            }
        }
    }

    Ok(())
}

async fn show_or_exit(engine: &LeaderboardEngine, users: &str) -> anyhow::Result<LeaderboardState> {
    match engine.show_rankings(LeaderboardState::default(), users).await {
        Ok(state) => Ok(state),
        Err(LeaderboardError::EmptyInput) => {
            eprintln!("⚠️  {}", LeaderboardError::EmptyInput);
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}

fn print_state(engine: &LeaderboardEngine, state: &LeaderboardState) {
    let view = LeaderboardView::from_state(state, engine.config());
    let categories: Vec<String> = view.options.iter().map(|o| o.value.clone()).collect();

    println!();
    print!("{}", render_table(&view));
    println!("Categories: {}", categories.join(", "));
}
