//! Trailer selection.
//!
//! Picks the single best video to present as "the" trailer for a
//! movie, out of the unordered mix of trailers, teasers, and clips
//! that the TMDB videos endpoint returns. Pure functions over
//! already-fetched data; no I/O happens here.

use crate::tmdb::TmdbVideo;

/// The only hosting platform eligible for playback.
pub const ACCEPTED_SITE: &str = "YouTube";

/// Video types accepted as a trailer substitute, best first.
const TYPE_PRIORITY: [&str; 4] = ["Trailer", "Teaser", "Clip", "Featurette"];

/// Selects the main trailer from a movie's video listing.
///
/// Priority cascade, first match in input order wins:
/// 1. an official YouTube trailer;
/// 2. any YouTube video of the best-ranked type in
///    Trailer > Teaser > Clip > Featurette order;
/// 3. any YouTube video at all.
///
/// Returns `None` when no YouTube-hosted video exists. An empty or
/// non-matching listing is a normal outcome, not an error, and the
/// input is never reordered: ties are broken by provider order alone.
#[must_use]
pub fn select_main_trailer(videos: &[TmdbVideo]) -> Option<&TmdbVideo> {
    let official = videos
        .iter()
        .find(|v| v.site == ACCEPTED_SITE && v.video_type == "Trailer" && v.official);
    if official.is_some() {
        return official;
    }

    for video_type in TYPE_PRIORITY {
        let found = videos
            .iter()
            .find(|v| v.site == ACCEPTED_SITE && v.video_type == video_type);
        if found.is_some() {
            return found;
        }
    }

    // Anything YouTube-hosted beats nothing at all.
    videos.iter().find(|v| v.site == ACCEPTED_SITE)
}

/// Builds the YouTube watch URL for a video key.
#[must_use]
pub fn watch_url(key: &str) -> String {
    format!("https://www.youtube.com/watch?v={key}")
}

/// Builds the YouTube embed URL for a video key.
///
/// Mirrors the player options the web UI uses: related videos and
/// branding suppressed, optional autoplay.
#[must_use]
pub fn embed_url(key: &str, autoplay: bool) -> String {
    let autoplay_param = if autoplay { "autoplay=1&" } else { "" };
    format!("https://www.youtube.com/embed/{key}?{autoplay_param}rel=0&showinfo=0&modestbranding=1")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    /// Builds a test video with the given key fields.
    fn video(id: &str, key: &str, site: &str, video_type: &str, official: bool) -> TmdbVideo {
        TmdbVideo {
            id: String::from(id),
            iso_639_1: Some(String::from("en")),
            iso_3166_1: Some(String::from("US")),
            key: String::from(key),
            name: format!("{video_type} {id}"),
            site: String::from(site),
            size: Some(1080),
            video_type: String::from(video_type),
            official,
            published_at: None,
        }
    }

    #[test]
    fn test_empty_input_returns_none() {
        // Arrange & Act
        let result = select_main_trailer(&[]);

        // Assert
        assert!(result.is_none());
    }

    #[test]
    fn test_official_trailer_wins_over_everything() {
        // Arrange
        let videos = vec![
            video("v1", "k1", "YouTube", "Teaser", true),
            video("v2", "k2", "Vimeo", "Trailer", true),
            video("v3", "k3", "YouTube", "Trailer", false),
            video("v4", "k4", "YouTube", "Trailer", true),
            video("v5", "k5", "YouTube", "Clip", false),
        ];

        // Act
        let result = select_main_trailer(&videos).unwrap();

        // Assert
        assert_eq!(result.id, "v4");
    }

    #[test]
    fn test_first_official_trailer_wins_in_input_order() {
        // Arrange: two official trailers, no re-sorting by any other key
        let videos = vec![
            video("v1", "k1", "YouTube", "Clip", false),
            video("v2", "k2", "YouTube", "Trailer", true),
            video("v3", "k3", "YouTube", "Trailer", true),
        ];

        // Act
        let result = select_main_trailer(&videos).unwrap();

        // Assert
        assert_eq!(result.id, "v2");
    }

    #[test]
    fn test_unofficial_trailer_beats_teaser() {
        // Arrange: no official trailer present
        let videos = vec![
            video("v1", "k1", "YouTube", "Teaser", false),
            video("v2", "k2", "YouTube", "Trailer", false),
        ];

        // Act
        let result = select_main_trailer(&videos).unwrap();

        // Assert
        assert_eq!(result.id, "v2");
    }

    #[test]
    fn test_teaser_beats_clip() {
        // Arrange
        let videos = vec![
            video("v1", "k1", "YouTube", "Clip", false),
            video("v2", "k2", "YouTube", "Teaser", false),
            video("v3", "k3", "YouTube", "Clip", false),
        ];

        // Act
        let result = select_main_trailer(&videos).unwrap();

        // Assert
        assert_eq!(result.id, "v2");
    }

    #[test]
    fn test_featurette_beats_unlisted_type() {
        // Arrange: Featurette is in the priority list, BehindTheScenes is not
        let videos = vec![
            video("v1", "k1", "YouTube", "BehindTheScenes", false),
            video("v2", "k2", "YouTube", "Featurette", false),
        ];

        // Act
        let result = select_main_trailer(&videos).unwrap();

        // Assert
        assert_eq!(result.id, "v2");
    }

    #[test]
    fn test_fallback_to_first_youtube_video_of_any_type() {
        // Arrange: only unlisted types remain
        let videos = vec![
            video("v1", "k1", "Vimeo", "Trailer", true),
            video("v2", "k2", "YouTube", "BehindTheScenes", false),
            video("v3", "k3", "YouTube", "Bloopers", false),
        ];

        // Act
        let result = select_main_trailer(&videos).unwrap();

        // Assert
        assert_eq!(result.id, "v2");
    }

    #[test]
    fn test_no_youtube_video_returns_none() {
        // Arrange: high-quality trailers, wrong platform
        let videos = vec![
            video("v1", "k1", "Vimeo", "Trailer", true),
            video("v2", "k2", "Dailymotion", "Trailer", true),
        ];

        // Act
        let result = select_main_trailer(&videos);

        // Assert
        assert!(result.is_none());
    }

    #[test]
    fn test_selection_is_idempotent() {
        // Arrange
        let videos = vec![
            video("v1", "k1", "YouTube", "Teaser", false),
            video("v2", "k2", "YouTube", "Trailer", true),
        ];

        // Act
        let first = select_main_trailer(&videos).unwrap().id.clone();
        let second = select_main_trailer(&videos).unwrap().id.clone();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_is_not_mutated() {
        // Arrange
        let videos = vec![
            video("v1", "k1", "YouTube", "Clip", false),
            video("v2", "k2", "YouTube", "Trailer", true),
        ];
        let before: Vec<String> = videos.iter().map(|v| v.id.clone()).collect();

        // Act
        let _ = select_main_trailer(&videos);
        let after: Vec<String> = videos.iter().map(|v| v.id.clone()).collect();

        // Assert
        assert_eq!(before, after);
    }

    #[test]
    fn test_select_from_fixture() {
        // Arrange
        let json = include_str!("../../../fixtures/tmdb/movie_videos_27205.json");
        let response: crate::tmdb::TmdbVideosResponse = serde_json::from_str(json).unwrap();

        // Act
        let result = select_main_trailer(&response.results).unwrap();

        // Assert: the official YouTube trailer wins over the earlier teaser
        assert_eq!(result.video_type, "Trailer");
        assert!(result.official);
        assert_eq!(result.site, "YouTube");
    }

    #[test]
    fn test_watch_url() {
        // Arrange & Act
        let url = watch_url("8hP9D6kZseM");

        // Assert
        assert_eq!(url, "https://www.youtube.com/watch?v=8hP9D6kZseM");
    }

    #[test]
    fn test_embed_url_without_autoplay() {
        // Arrange & Act
        let url = embed_url("8hP9D6kZseM", false);

        // Assert
        assert_eq!(
            url,
            "https://www.youtube.com/embed/8hP9D6kZseM?rel=0&showinfo=0&modestbranding=1"
        );
    }

    #[test]
    fn test_embed_url_with_autoplay() {
        // Arrange & Act
        let url = embed_url("8hP9D6kZseM", true);

        // Assert
        assert!(url.contains("autoplay=1"));
        assert!(url.starts_with("https://www.youtube.com/embed/8hP9D6kZseM?"));
    }
}
