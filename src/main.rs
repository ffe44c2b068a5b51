use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lmsl_stats::api::{build_router, cors_layer, state::AppState};
use lmsl_stats::calculate::{medal_table, recent_results};
use lmsl_stats::config::AppConfig;
use lmsl_stats::dimensions::{Dimension, FilterOptions};
use lmsl_stats::filter::MatchFilter;
use lmsl_stats::loader;
use lmsl_stats::models::{Match, MatchResult, Race};
use lmsl_stats::views::{PlayersView, TournamentsView};

#[derive(Parser)]
#[command(name = "lmsl-stats")]
#[command(about = "Match statistics for the LittleMac StarCraft II League")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./lmsl.toml")]
    config: PathBuf,

    /// Match data CSV (overrides the config file)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the medal table
    Medals {
        /// Number of players to show
        #[arg(long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the most recent results
    Recent {
        /// Number of matches to show
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Print player win rates
    Players {
        /// Players to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        player: Vec<String>,

        /// Tournaments to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tournament: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Print race and matchup distributions
    Tournaments {
        /// Tournaments to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tournament: Vec<String>,

        /// Players to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        player: Vec<String>,

        /// Race codes to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        race: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// List the distinct values of a dimension (tournament, player, race)
    Dimensions {
        dimension: Dimension,

        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The config decides the log level, so it is loaded under a bootstrap subscriber
    let bootstrap_level = cli.log_level.as_deref().unwrap_or("info");
    let loaded = tracing::subscriber::with_default(
        bootstrap_subscriber(env_filter(bootstrap_level), std::io::stderr),
        || AppConfig::load_or_default(&cli.config),
    );
    let mut config =
        loaded.with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }
    let log_level = cli.log_level.unwrap_or_else(|| config.log_level.clone());

    // Initialize tracing
    let registry = tracing_subscriber::registry().with(env_filter(&log_level));
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting lmsl-stats v{}", env!("CARGO_PKG_VERSION"));

    let matches = loader::load_or_empty(&config.data_file);

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let cors = cors_layer(&config.server.cors_origin)
                .with_context(|| format!("Invalid CORS origin: {}", config.server.cors_origin))?;

            let state = AppState::new(matches, config.dashboard.clone());
            let app = build_router(state).layer(cors);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Dashboard API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Medals { limit, json } => {
            let limit = limit.unwrap_or(config.dashboard.medal_table_size);
            let table = medal_table(&matches, limit);
            if json {
                print_json(&table)?;
            } else {
                println!(
                    "{:<5} {:<24} {:<8} {:>4} {:>4} {:>4} {:>6}",
                    "Rank", "Player", "Race", "G", "S", "B", "Total"
                );
                for (i, s) in table.iter().enumerate() {
                    println!(
                        "{:<5} {:<24} {:<8} {:>4} {:>4} {:>4} {:>6}",
                        i + 1,
                        s.player,
                        race_label(s.race.as_ref()),
                        s.gold,
                        s.silver,
                        s.bronze,
                        s.total()
                    );
                }
            }
        }
        Commands::Recent { limit, json } => {
            let limit = limit.unwrap_or(config.dashboard.recent_results);
            let recent = recent_results(&matches, limit);
            if json {
                print_json(&recent)?;
            } else {
                for m in &recent {
                    print_match(m);
                }
            }
        }
        Commands::Players {
            player,
            tournament,
            json,
        } => {
            let filter = MatchFilter::new()
                .with_players(player)
                .with_tournaments(tournament);
            let view = PlayersView::build(&matches, &filter);
            if json {
                print_json(&view)?;
            } else {
                println!("=== Player Win Rates ({} matches) ===", view.match_count);
                for s in &view.player_stats {
                    println!(
                        "{:<24} {:<8} {:>3}-{:<3} {:>6.1}%",
                        s.player,
                        race_label(Some(&s.race)),
                        s.wins,
                        s.losses,
                        s.win_rate
                    );
                }
                if let Some(matchups) = &view.matchups {
                    println!("\n=== {}'s Matchups ===", matchups.player);
                    for m in &matchups.matchups {
                        println!(
                            "{:<8} {:>3} games {:>6.1}%",
                            m.matchup, m.total_matches, m.win_rate
                        );
                    }
                }
            }
        }
        Commands::Tournaments {
            tournament,
            player,
            race,
            json,
        } => {
            let filter = MatchFilter::new()
                .with_tournaments(tournament)
                .with_players(player)
                .with_races(race);
            let view = TournamentsView::build(&matches, &filter);
            if json {
                print_json(&view)?;
            } else {
                println!("=== Race Distribution (players by main race) ===");
                for share in &view.race_distribution {
                    println!("{:<8} {:>4}", race_label(Some(&share.race)), share.players);
                }
                println!("\n=== Matchup Distribution ({} matches) ===", view.match_count);
                for m in &view.matchup_distribution {
                    println!("{:<8} {:>4}", m.matchup, m.count);
                }
            }
        }
        Commands::Dimensions { dimension, json } => {
            let options = FilterOptions::from_matches(&matches);
            let values = options.values(dimension);
            if json {
                print_json(&values)?;
            } else {
                for value in values {
                    println!("{}", value);
                }
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Plain subscriber used until the configured one is installed.
fn bootstrap_subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn race_label(race: Option<&Race>) -> String {
    match race {
        Some(race) => race.name().unwrap_or(race.code()).to_string(),
        None => "-".to_string(),
    }
}

fn result_label(result: MatchResult) -> &'static str {
    match result {
        MatchResult::Win => "W",
        MatchResult::Loss => "L",
    }
}

fn print_match(m: &Match) {
    println!(
        "[{}] {} ({}) vs [{}] {} ({})",
        result_label(m.result),
        m.player,
        race_label(Some(&m.race)),
        result_label(m.opponent_result()),
        m.opponent,
        race_label(Some(&m.opponent_race))
    );
    println!(
        "  {} - {} {} Match {}",
        m.tournament, m.group, m.group_stage, m.match_number
    );
    let score = |s: Option<u32>| s.map(|v| v.to_string()).unwrap_or_default();
    println!(
        "  Score: {} - {}",
        score(m.player1_score),
        score(m.player2_score)
    );
}
