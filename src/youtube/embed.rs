use derive_new::new;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::Offset;

const EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Player options encoded in the embed url query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(default)]
pub struct EmbedOptions {
    #[new(value = "false")]
    pub autoplay: bool,
    #[new(value = "true")]
    pub controls: bool,
    #[new(value = "true")]
    pub modestbranding: bool,
    /// show related videos from other channels when playback ends
    #[new(value = "false")]
    pub rel: bool,
    #[new(value = "true")]
    pub enablejsapi: bool,
    #[new(default)]
    pub start: Option<Offset>,
    #[new(default)]
    pub end: Option<Offset>,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbedOptions {
    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn clip(mut self, start: Option<Offset>, end: Option<Offset>) -> Self {
        self.start = start;
        self.end = end;
        self
    }
}

/// Build the iframe player url for a video.
///
/// `end` is emitted as given, even when it comes before `start`.
pub fn embed_url(video_id: &str, options: &EmbedOptions) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("autoplay", flag(options.autoplay))
        .append_pair("controls", flag(options.controls))
        .append_pair("modestbranding", flag(options.modestbranding))
        .append_pair("rel", flag(options.rel))
        .append_pair("enablejsapi", flag(options.enablejsapi));

    if let Some(start) = &options.start {
        query.append_pair("start", &start.seconds().to_string());
    }

    if let Some(end) = &options.end {
        query.append_pair("end", &end.seconds().to_string());
    }

    format!("{EMBED_BASE}/{video_id}?{}", query.finish())
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        url::Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    fn param(url: &str, key: &str) -> Option<String> {
        query_pairs(url)
            .into_iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    #[test]
    fn defaults() {
        let url = embed_url("abc123", &EmbedOptions::default());
        assert_eq!(
            url,
            "https://www.youtube.com/embed/abc123?autoplay=0&controls=1&modestbranding=1&rel=0&enablejsapi=1"
        );
    }

    #[test]
    fn clip_with_time_strings() {
        let options = EmbedOptions::default()
            .autoplay(true)
            .clip(Some("1:20".into()), Some("2:13".into()));
        let url = embed_url("abc123", &options);

        assert_eq!(param(&url, "start").as_deref(), Some("80"));
        assert_eq!(param(&url, "end").as_deref(), Some("133"));
        assert_eq!(param(&url, "autoplay").as_deref(), Some("1"));
    }

    #[test]
    fn clip_with_seconds() {
        let options = EmbedOptions::default().clip(Some(30.into()), None);
        let url = embed_url("abc123", &options);

        assert_eq!(param(&url, "start").as_deref(), Some("30"));
        assert_eq!(param(&url, "end"), None);
    }

    #[test]
    fn end_before_start_is_kept() {
        let options = EmbedOptions::default()
            .clip(Some(90.into()), Some(10.into()));
        let url = embed_url("abc123", &options);

        assert_eq!(param(&url, "start").as_deref(), Some("90"));
        assert_eq!(param(&url, "end").as_deref(), Some("10"));
    }

    #[test]
    fn malformed_time_starts_at_zero() {
        let options = EmbedOptions::default().clip(Some("soon".into()), None);
        let url = embed_url("abc123", &options);

        assert_eq!(param(&url, "start").as_deref(), Some("0"));
    }

    #[test]
    fn options_fill_missing_fields_with_defaults() {
        let options: EmbedOptions =
            serde_json::from_str(r#"{ "autoplay": true, "end": "0:45" }"#).unwrap();

        assert!(options.autoplay);
        assert!(options.controls);
        assert!(!options.rel);
        assert_eq!(options.end.map(|end| end.seconds()), Some(45));
    }
}
