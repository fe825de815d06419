//! Everything the site needs to show a YouTube video without talking to YouTube:
//! pulling the id out of a pasted link, and building thumbnail and player urls.

use serde::{Deserialize, Serialize};

pub use embed::*;
pub use thumbnail::*;
pub use time::*;
pub use video_id::*;

mod embed;
mod thumbnail;
mod time;
mod video_id;

/// A playable video, resolved from whatever link the content author pasted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoReference {
    pub source_url: String,
    /// empty when the link wasn't recognized
    pub video_id: String,
    pub start_offset_seconds: Option<u64>,
    pub end_offset_seconds: Option<u64>,
}

impl VideoReference {
    pub fn resolve(source_url: &str) -> Self {
        let video_id = extract_video_id(source_url);
        if video_id.is_empty() {
            tracing::debug!(source_url, "no video id found in `{}`", source_url);
        }

        Self {
            source_url: source_url.to_string(),
            video_id,
            start_offset_seconds: None,
            end_offset_seconds: None,
        }
    }

    /// Restrict playback to a clip. The order of `start` and `end` isn't checked.
    pub fn clip(mut self, start: Option<&Offset>, end: Option<&Offset>) -> Self {
        self.start_offset_seconds = start.map(Offset::seconds);
        self.end_offset_seconds = end.map(Offset::seconds);
        self
    }

    pub fn is_resolved(&self) -> bool {
        !self.video_id.is_empty()
    }

    pub fn thumbnail_url(&self, quality: ThumbnailQuality) -> String {
        thumbnail_url(&self.video_id, quality)
    }

    /// Thumbnail urls in the order the renderer should try them.
    pub fn thumbnail_urls(&self) -> Vec<String> {
        ThumbnailQuality::default()
            .chain()
            .map(|quality| self.thumbnail_url(quality))
            .collect()
    }

    pub fn embed_url(&self, autoplay: bool) -> String {
        let options = EmbedOptions::default().autoplay(autoplay).clip(
            self.start_offset_seconds.map(Offset::Seconds),
            self.end_offset_seconds.map(Offset::Seconds),
        );
        embed_url(&self.video_id, &options)
    }
}
