// src/main.rs
//
// moviehub command line driver

use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use futures_util::StreamExt;
use serde::Serialize;

use moviehub::application::{
    department_dtos, CatalogSession, ErrorResponse, GroupedMoviesDto, MovieDetailsDto, MovieDto,
    ToErrorResponse, ViewSignal, WatchlistEntryDto,
};
use moviehub::{AppConfig, AppState, GroupedMovies, LifecycleState, StateStream};

#[derive(Parser)]
#[command(
    name = "moviehub",
    version,
    about = "Browse a movie catalog and keep a local watchlist"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List popular movies grouped by release year
    Popular {
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Search the catalog
    Search {
        query: String,

        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Show one movie with its top cast, directors and similar movies
    Details { id: i64 },

    /// Add a movie to the watchlist, or remove it if already there
    Watch { id: i64 },

    /// List watchlisted movie ids
    Watchlist,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let config = AppConfig::from_env().map_err(render_error)?;
    if !matches!(cli.command, Command::Watch { .. } | Command::Watchlist) {
        config.require_access_token().map_err(render_error)?;
    }

    let state = AppState::initialize(&config)
        .map_err(render_error)
        .context("Failed to start moviehub")?;

    let (session, signals) = CatalogSession::new(
        Arc::clone(&state.popular),
        Arc::clone(&state.search),
        Arc::clone(&state.watchlist),
        config.session.clone(),
    );
    let reporter = tokio::spawn(report_signals(signals));

    match cli.command {
        Command::Popular { pages } => {
            for _ in 0..pages {
                session.load_popular();
                session.settle().await;
            }
            print_grouped(&session.results().borrow(), cli.json)?;
        }

        Command::Search { query, pages } => {
            for _ in 0..pages {
                session.search(query.clone());
                session.settle().await;
            }
            print_grouped(&session.results().borrow(), cli.json)?;
        }

        Command::Details { id } => {
            let details = last_success(state.details.details(id)).await;
            let credits = last_success(state.details.credits(id)).await;
            let similar = last_success(state.details.similar(id)).await;

            let details = details.ok_or_else(|| anyhow!("Could not load movie {}", id))?;

            if cli.json {
                print_json(&serde_json::json!({
                    "details": MovieDetailsDto::from(&details),
                    "credits": credits.as_ref().map(department_dtos),
                    "similar": similar
                        .unwrap_or_default()
                        .iter()
                        .map(MovieDto::from)
                        .collect::<Vec<_>>(),
                }))?;
            } else {
                let marker = if details.watchlisted { "[*]" } else { "[ ]" };
                println!("{} {} ({})", marker, details.title, details.release_year());
                if !details.tagline.is_empty() {
                    println!("    {}", details.tagline);
                }
                println!("    {}", details.overview);
                for department in credits.as_ref().map(department_dtos).unwrap_or_default() {
                    let names: Vec<&str> = department.people.iter().map(|p| p.name.as_str()).collect();
                    println!("{}: {}", department.department, names.join(", "));
                }
                for movie in similar.unwrap_or_default() {
                    println!("  similar: {} ({})", movie.title, movie.id);
                }
            }
        }

        Command::Watch { id } => {
            let added = session
                .toggle_watchlist(id)
                .await
                .to_error_response()
                .map_err(|e| anyhow!(e.message))?;

            if cli.json {
                print_json(&serde_json::json!({ "movie_id": id, "watchlisted": added }))?;
            } else if added {
                println!("Added {} to the watchlist", id);
            } else {
                println!("Removed {} from the watchlist", id);
            }
        }

        Command::Watchlist => {
            let entries = state.watchlist.entries().await.map_err(render_error)?;
            let dtos: Vec<WatchlistEntryDto> = entries.iter().map(WatchlistEntryDto::from).collect();

            if cli.json {
                print_json(&dtos)?;
            } else if dtos.is_empty() {
                println!("Watchlist is empty");
            } else {
                for entry in dtos {
                    println!("{}  added {}", entry.movie_id, entry.added_at);
                }
            }
        }
    }

    drop(session);
    // The reporter ends once every signal sender is gone.
    let _ = reporter.await;
    Ok(())
}

/// Drains a lifecycle stream, reporting failures, and keeps the payload.
async fn last_success<T>(mut states: StateStream<T>) -> Option<T> {
    let mut payload = None;
    while let Some(state) = states.next().await {
        match state {
            LifecycleState::Success(value) => payload = Some(value),
            other => {
                if let Some(signal) = ViewSignal::from_state(&other) {
                    report(&signal);
                }
            }
        }
    }
    payload
}

async fn report_signals(mut signals: tokio::sync::mpsc::UnboundedReceiver<ViewSignal>) {
    while let Some(signal) = signals.recv().await {
        report(&signal);
    }
}

fn report(signal: &ViewSignal) {
    match signal {
        ViewSignal::ShowLoading => log::debug!("Loading..."),
        ViewSignal::HideLoading => log::debug!("Done"),
        ViewSignal::ShowError { message, code } => match code {
            Some(code) => eprintln!("error ({}): {}", code, message),
            None => eprintln!("error: {}", message),
        },
        ViewSignal::ShowNetworkError => {
            eprintln!("error: the movie catalog is unreachable, try again later")
        }
    }
}

fn print_grouped(grouped: &GroupedMovies, json: bool) -> anyhow::Result<()> {
    let dto = GroupedMoviesDto::from(grouped);
    if json {
        return print_json(&dto);
    }

    for group in &dto.groups {
        println!("== {} ==", group.year);
        for movie in &group.movies {
            let marker = if movie.watchlisted { "[*]" } else { "[ ]" };
            println!("  {} {} ({})", marker, movie.title, movie.id);
        }
    }
    println!("{} movies", dto.total);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_error(error: moviehub::AppError) -> anyhow::Error {
    let response = ErrorResponse::from_app_error(error);
    match response.details {
        Some(details) => anyhow!("{}: {}", response.message, details),
        None => anyhow!(response.message),
    }
}
