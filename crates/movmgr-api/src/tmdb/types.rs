//! TMDB API response types and request parameters.

use serde::Deserialize;

// --- Trending ---

/// Time window for the `trending/movie/{window}` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendingWindow {
    /// Trending today.
    #[default]
    Day,
    /// Trending this week.
    Week,
}

impl TrendingWindow {
    /// Returns the URL path segment for this window.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

// --- Movie lists ---

/// Paginated movie list response.
///
/// Shared by `trending/movie/{window}`, `movie/now_playing`,
/// `movie/upcoming`, and `search/movie`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieListResponse {
    /// Current page number.
    pub page: u32,
    /// Movie entries on this page.
    pub results: Vec<TmdbMovieSummary>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
    /// Release date window (now-playing/upcoming only).
    #[serde(default)]
    pub dates: Option<TmdbDateRange>,
}

/// Release date window attached to now-playing/upcoming responses.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbDateRange {
    /// Latest release date in the window (YYYY-MM-DD).
    pub maximum: String,
    /// Earliest release date in the window (YYYY-MM-DD).
    pub minimum: String,
}

/// A single movie entry within a list response.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieSummary {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    pub adult: bool,
    /// Video flag.
    #[serde(default)]
    pub video: bool,
    /// Media type ("movie", trending responses only).
    #[serde(default)]
    pub media_type: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

// --- Movie details ---

/// Response from `movie/{movie_id}` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Tagline.
    pub tagline: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Production budget in USD (0 when unknown).
    #[serde(default)]
    pub budget: u64,
    /// Box office revenue in USD (0 when unknown).
    #[serde(default)]
    pub revenue: u64,
    /// Status (e.g., "Released", "Post Production").
    pub status: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Genres.
    pub genres: Vec<TmdbGenre>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<TmdbProductionCompany>,
    /// Production countries.
    #[serde(default)]
    pub production_countries: Vec<TmdbProductionCountry>,
    /// Official homepage.
    pub homepage: Option<String>,
    /// IMDb ID (e.g., "tt1375666").
    pub imdb_id: Option<String>,
    /// Adult flag.
    pub adult: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Genre entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Production company entry within movie details.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbProductionCompany {
    /// TMDB company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Origin country (ISO 3166-1).
    pub origin_country: Option<String>,
    /// Logo image path.
    pub logo_path: Option<String>,
}

/// Production country entry within movie details.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbProductionCountry {
    /// Country code (ISO 3166-1).
    pub iso_3166_1: String,
    /// Country name.
    pub name: String,
}

// --- Videos ---

/// Response from `movie/{movie_id}/videos` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideosResponse {
    /// TMDB movie ID the videos belong to.
    pub id: u64,
    /// Video entries, in provider order.
    pub results: Vec<TmdbVideo>,
}

/// One video metadata entry for a movie (trailer, teaser, clip, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideo {
    /// Opaque unique identifier, used as a display key only.
    pub id: String,
    /// Video language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Video country (ISO 3166-1).
    #[serde(default)]
    pub iso_3166_1: Option<String>,
    /// Host-platform video ID used to build playback URLs.
    pub key: String,
    /// Human-readable video title.
    pub name: String,
    /// Hosting platform name (e.g., "YouTube", "Vimeo").
    pub site: String,
    /// Resolution class (e.g., 1080, 2160).
    #[serde(default)]
    pub size: Option<u32>,
    /// Category tag ("Trailer", "Teaser", "Clip", "Featurette", ...).
    #[serde(rename = "type")]
    pub video_type: String,
    /// Provider-verified official flag (absent means unofficial).
    #[serde(default)]
    pub official: bool,
    /// Publish timestamp (RFC 3339).
    #[serde(default)]
    pub published_at: Option<String>,
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[allow(dead_code)]
    pub success: bool,
}

// --- Request Parameters ---

/// Parameters shared by the list endpoints (trending, now-playing, upcoming).
#[derive(Debug, Clone)]
pub struct ListParams {
    /// Response language (default: "en-US").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Region filter (ISO 3166-1).
    pub region: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ListParams {
    /// Creates new list params with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: String::from("en-US"),
            page: 1,
            region: None,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Parameters for `search/movie` endpoint.
#[derive(Debug, Clone)]
pub struct SearchMovieParams {
    /// Search query (required).
    pub query: String,
    /// Response language (default: "en-US").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Filter by primary release year.
    pub primary_release_year: Option<u32>,
    /// Filter by year.
    pub year: Option<u32>,
    /// Region filter (ISO 3166-1).
    pub region: Option<String>,
    /// Include adult content.
    pub include_adult: bool,
}

impl SearchMovieParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: String::from("en-US"),
            page: 1,
            primary_release_year: None,
            year: None,
            region: None,
            include_adult: false,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the primary release year filter.
    #[must_use]
    pub const fn primary_release_year(mut self, year: u32) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}
