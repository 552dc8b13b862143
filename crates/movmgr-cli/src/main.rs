//! movmgr - movie discovery CLI backed by the TMDB API.

/// Application configuration (TOML).
mod config;
/// Display formatting helpers.
mod format;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, resolve_config_path};
use crate::format::{format_currency, format_long_date, release_label, release_year};
use movmgr_api::tmdb::{
    ListParams, LocalTmdbApi, SearchMovieParams, TmdbClient, TmdbMovieListResponse, TrendingWindow,
};
use movmgr_api::trailer::{embed_url, select_main_trailer, watch_url};

/// Number of entries the trailer command lists from the full video set.
const VIDEO_GALLERY_LIMIT: usize = 6;

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List trending movies.
    Trending(TrendingArgs),
    /// List movies currently in theatres.
    NowPlaying(ListArgs),
    /// List upcoming movie releases.
    Upcoming(ListArgs),
    /// Search for movies by title.
    Search(SearchArgs),
    /// Show full details for one movie.
    Details(DetailsArgs),
    /// Show the main trailer for one movie.
    Trailer(TrailerArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

/// Trending time window CLI choice.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum WindowArg {
    /// Trending today.
    Day,
    /// Trending this week.
    Week,
}

impl From<WindowArg> for TrendingWindow {
    fn from(value: WindowArg) -> Self {
        match value {
            WindowArg::Day => Self::Day,
            WindowArg::Week => Self::Week,
        }
    }
}

/// Arguments for the `trending` subcommand.
#[derive(clap::Args)]
struct TrendingArgs {
    /// Trending time window.
    #[arg(long, value_enum, default_value = "day")]
    window: WindowArg,

    /// Max entries to show. Falls back to config `trending_limit` (default: 10).
    #[arg(long)]
    limit: Option<usize>,

    /// Response language (e.g. "en-US"). Falls back to config.
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `now-playing` and `upcoming` subcommands.
#[derive(clap::Args)]
struct ListArgs {
    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Response language (e.g. "en-US"). Falls back to config.
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "Inception").
    #[arg(long, required = true)]
    query: String,

    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Filter by year.
    #[arg(long)]
    year: Option<u32>,

    /// Response language (e.g. "en-US"). Falls back to config.
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `details` subcommand.
#[derive(clap::Args)]
struct DetailsArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,

    /// Response language (e.g. "en-US"). Falls back to config.
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `trailer` subcommand.
#[derive(clap::Args)]
struct TrailerArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,

    /// Response language (e.g. "en-US"). Falls back to config.
    #[arg(long)]
    language: Option<String>,

    /// Open the selected trailer in the default browser.
    #[arg(long)]
    open: bool,
}

/// Arguments for the `completions` subcommand.
#[derive(clap::Args)]
struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(long, value_enum)]
    shell: clap_complete::Shell,
}

/// Builds a `TmdbClient` from the `TMDB_API_TOKEN` environment variable.
///
/// # Errors
///
/// Returns an error if `TMDB_API_TOKEN` is not set or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client() -> Result<TmdbClient> {
    let api_token = std::env::var("TMDB_API_TOKEN")
        .context("TMDB_API_TOKEN environment variable is required")?;

    TmdbClient::builder()
        .api_token(api_token)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build TMDB client")
}

/// Loads the app config from `--dir` or the default location.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    AppConfig::load(&config_path).context("failed to load config")
}

/// Resolves the response language: CLI flag wins over config.
fn resolve_language(arg: Option<&String>, config: &AppConfig) -> String {
    arg.cloned().unwrap_or_else(|| config.tmdb.language.clone())
}

/// Builds `ListParams` from CLI page/language and config region.
fn list_params(page: u32, language: Option<&String>, config: &AppConfig) -> ListParams {
    let mut params = ListParams::new()
        .language(resolve_language(language, config))
        .page(page);
    if let Some(ref region) = config.tmdb.region {
        params = params.region(region.as_str());
    }
    params
}

/// Prints one page of a movie list response as a table.
fn print_movie_list(response: &TmdbMovieListResponse) {
    tracing::info!(
        "Page {}/{} ({} results total)",
        response.page,
        response.total_pages,
        response.total_results,
    );
    tracing::info!("ID\tTitle\t\t\tReleaseDate\tRating");
    for movie in &response.results {
        tracing::info!(
            "{}\t{}\t{}\t{:.1} ({})",
            movie.id,
            movie.title,
            movie.release_date.as_deref().unwrap_or("-"),
            movie.vote_average,
            movie.vote_count,
        );
    }
}

/// Runs the `trending` subcommand.
///
/// Shows the top N entries of the requested window, where N comes from
/// `--limit` or the config `trending_limit`.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_trending(args: &TrendingArgs, app_config: &AppConfig) -> Result<()> {
    let client = build_tmdb_client()?;
    let limit = args.limit.unwrap_or(app_config.tmdb.trending_limit);

    let params = ListParams::new().language(resolve_language(args.language.as_ref(), app_config));
    let response = client
        .trending_movies(args.window.into(), &params)
        .await
        .context("TMDB trending request failed")?;

    tracing::info!("Rank\tID\tTitle\t\t\tYear\tRating");
    for (rank, movie) in response.results.iter().take(limit).enumerate() {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{:.1}",
            rank.saturating_add(1),
            movie.id,
            movie.title,
            release_year(movie.release_date.as_deref()),
            movie.vote_average,
        );
    }

    Ok(())
}

/// Runs the `now-playing` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_now_playing(args: &ListArgs, app_config: &AppConfig) -> Result<()> {
    let client = build_tmdb_client()?;

    let params = list_params(args.page, args.language.as_ref(), app_config);
    let response = client
        .now_playing(&params)
        .await
        .context("TMDB now_playing request failed")?;

    if let Some(ref dates) = response.dates {
        tracing::info!("In theatres {} .. {}", dates.minimum, dates.maximum);
    }
    print_movie_list(&response);

    Ok(())
}

/// Runs the `upcoming` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_upcoming(args: &ListArgs, app_config: &AppConfig) -> Result<()> {
    let client = build_tmdb_client()?;

    let params = list_params(args.page, args.language.as_ref(), app_config);
    let response = client
        .upcoming(&params)
        .await
        .context("TMDB upcoming request failed")?;

    if let Some(ref dates) = response.dates {
        tracing::info!("Releasing {} .. {}", dates.minimum, dates.maximum);
    }
    print_movie_list(&response);

    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, app_config: &AppConfig) -> Result<()> {
    let client = build_tmdb_client()?;

    let mut params = SearchMovieParams::new(&args.query)
        .language(resolve_language(args.language.as_ref(), app_config))
        .page(args.page);
    if let Some(year) = args.year {
        params = params.year(year);
    }
    if let Some(ref region) = app_config.tmdb.region {
        params = params.region(region.as_str());
    }

    let response = client
        .search_movie(&params)
        .await
        .context("TMDB search/movie request failed")?;

    print_movie_list(&response);

    Ok(())
}

/// Runs the `details` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_details(args: &DetailsArgs, app_config: &AppConfig) -> Result<()> {
    let client = build_tmdb_client()?;
    let language = resolve_language(args.language.as_ref(), app_config);

    let details = client
        .movie_details(args.id, &language)
        .await
        .context("TMDB movie details request failed")?;

    tracing::info!("{} ({})", details.title, details.id);
    if let Some(tagline) = details.tagline.as_deref().filter(|t| !t.is_empty()) {
        tracing::info!("\"{tagline}\"");
    }
    tracing::info!(
        "{} • {} min • {}",
        release_year(details.release_date.as_deref()),
        details
            .runtime
            .map_or_else(|| String::from("-"), |r| r.to_string()),
        details.original_language,
    );

    let today = chrono::Local::now().date_naive();
    tracing::info!(
        "{}: {}",
        release_label(details.release_date.as_deref(), today),
        details
            .release_date
            .as_deref()
            .map_or_else(|| String::from("-"), format_long_date),
    );
    tracing::info!(
        "Rating: {:.1} ({} votes)",
        details.vote_average,
        details.vote_count
    );
    tracing::info!(
        "Overview: {}",
        details.overview.as_deref().unwrap_or("-")
    );

    let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
    tracing::info!("Genres: {}", genres.join(", "));
    tracing::info!("Budget: {}", format_currency(details.budget));
    tracing::info!("Revenue: {}", format_currency(details.revenue));

    let companies: Vec<&str> = details
        .production_companies
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    tracing::info!("Production Companies: {}", companies.join(", "));

    let countries: Vec<&str> = details
        .production_countries
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    tracing::info!("Production Countries: {}", countries.join(", "));

    Ok(())
}

/// Runs the `trailer` subcommand.
///
/// Fetch failures degrade to an empty video list; a movie without a
/// usable trailer reports "No trailer available" and exits cleanly.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the browser
/// cannot be opened with `--open`.
#[instrument(skip_all)]
async fn run_trailer(args: &TrailerArgs, app_config: &AppConfig) -> Result<()> {
    let client = build_tmdb_client()?;
    let language = resolve_language(args.language.as_ref(), app_config);

    let videos = match client.movie_videos(args.id, &language).await {
        Ok(response) => response.results,
        Err(error) => {
            tracing::warn!(movie_id = args.id, %error, "failed to fetch videos, treating as empty");
            Vec::new()
        }
    };

    let Some(main) = select_main_trailer(&videos) else {
        tracing::info!("No trailer available");
        return Ok(());
    };

    let official = if main.official { ", official" } else { "" };
    tracing::info!("{} [{}{}]", main.name, main.video_type, official);
    tracing::info!("Watch: {}", watch_url(&main.key));
    tracing::info!("Embed: {}", embed_url(&main.key, false));

    if videos.len() > 1 {
        tracing::info!("All videos (first {VIDEO_GALLERY_LIMIT}):");
        for video in videos.iter().take(VIDEO_GALLERY_LIMIT) {
            tracing::info!(
                "  [{}] {} — {}",
                video.video_type,
                video.name,
                watch_url(&video.key),
            );
        }
    }

    if args.open {
        open::that(watch_url(&main.key)).context("failed to open trailer in browser")?;
    }

    Ok(())
}

/// Runs the `completions` subcommand.
fn run_completions(args: &CompletionsArgs) {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "movmgr", &mut std::io::stdout());
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let app_config = load_config(cli.dir.as_ref())?;

    match cli.command {
        Commands::Trending(args) => run_trending(&args, &app_config).await,
        Commands::NowPlaying(args) => run_now_playing(&args, &app_config).await,
        Commands::Upcoming(args) => run_upcoming(&args, &app_config).await,
        Commands::Search(args) => run_search(&args, &app_config).await,
        Commands::Details(args) => run_details(&args, &app_config).await,
        Commands::Trailer(args) => run_trailer(&args, &app_config).await,
        Commands::Completions(args) => {
            run_completions(&args);
            Ok(())
        }
    }
}
