use once_cell::sync::Lazy;
use regex::Regex;

/// URL shapes that carry a video id, in the order they are tried.
static PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"youtube\.com/watch\?v=([^&\n?#]+)").expect("invalid watch url pattern"),
        Regex::new(r"youtu\.be/([^&\n?#]+)").expect("invalid short url pattern"),
        Regex::new(r"youtube\.com/embed/([^&\n?#]+)").expect("invalid embed url pattern"),
    ]
});

/// Extract the video id out of a watch, share (`youtu.be`) or embed link.
///
/// Anything that doesn't look like one of those yields an empty string, this never fails.
pub fn extract_video_id(url: &str) -> String {
    PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
        .unwrap_or_default()
}
