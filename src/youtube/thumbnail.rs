use serde::{Deserialize, Serialize};

const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

/// Thumbnail sizes published by YouTube for every video.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    #[default]
    MaxResDefault,
    HqDefault,
    MqDefault,
    SdDefault,
    Default,
}

impl ThumbnailQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            ThumbnailQuality::MaxResDefault => "maxresdefault",
            ThumbnailQuality::HqDefault => "hqdefault",
            ThumbnailQuality::MqDefault => "mqdefault",
            ThumbnailQuality::SdDefault => "sddefault",
            ThumbnailQuality::Default => "default",
        }
    }

    /// The quality to try next when this one failed to load.
    ///
    /// Not every video has a `maxresdefault` image, so the renderer walks down
    /// `maxresdefault -> hqdefault -> mqdefault -> sddefault` and gives up after that.
    pub fn fallback(self) -> Option<ThumbnailQuality> {
        match self {
            ThumbnailQuality::MaxResDefault => Some(ThumbnailQuality::HqDefault),
            ThumbnailQuality::HqDefault => Some(ThumbnailQuality::MqDefault),
            ThumbnailQuality::MqDefault => Some(ThumbnailQuality::SdDefault),
            ThumbnailQuality::SdDefault | ThumbnailQuality::Default => None,
        }
    }

    /// This quality followed by every fallback after it.
    pub fn chain(self) -> impl Iterator<Item = ThumbnailQuality> {
        std::iter::successors(Some(self), |quality| quality.fallback())
    }
}

impl std::fmt::Display for ThumbnailQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thumbnail image url for a video. The id isn't checked, so an empty id gives a
/// url that won't resolve.
pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!("{THUMBNAIL_BASE}/{video_id}/{quality}.jpg")
}
