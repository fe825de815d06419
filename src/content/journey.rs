use serde::{Deserialize, Serialize};

use crate::youtube::{Offset, VideoReference};

/// One event on the timeline. The carousel never looks inside these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Milestone {
    #[serde(rename_all = "camelCase")]
    Video {
        title: String,
        #[serde(default)]
        description: Option<String>,
        video_url: String,
        #[serde(default)]
        start_time: Option<String>,
        #[serde(default)]
        end_time: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SideBySide {
        title: String,
        #[serde(default)]
        description: Option<String>,
        left_video_url: String,
        right_video_url: String,
        #[serde(default)]
        left_start_time: Option<String>,
        #[serde(default)]
        left_end_time: Option<String>,
        #[serde(default)]
        right_start_time: Option<String>,
        #[serde(default)]
        right_end_time: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        title: String,
        #[serde(default)]
        description: Option<String>,
        /// `None` renders a placeholder
        #[serde(default)]
        image_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Placeholder {
        title: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        placeholder_text: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    VideoFile {
        title: String,
        #[serde(default)]
        description: Option<String>,
        video_file: String,
    },
}

impl Milestone {
    pub fn title(&self) -> &str {
        match self {
            Milestone::Video { title, .. }
            | Milestone::SideBySide { title, .. }
            | Milestone::Image { title, .. }
            | Milestone::Placeholder { title, .. }
            | Milestone::VideoFile { title, .. } => title,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Milestone::Video { description, .. }
            | Milestone::SideBySide { description, .. }
            | Milestone::Image { description, .. }
            | Milestone::Placeholder { description, .. }
            | Milestone::VideoFile { description, .. } => description.as_deref(),
        }
    }

    /// The YouTube videos this milestone shows, left before right.
    pub fn videos(&self) -> Vec<VideoReference> {
        match self {
            Milestone::Video {
                video_url,
                start_time,
                end_time,
                ..
            } => vec![clip(video_url, start_time.as_deref(), end_time.as_deref())],
            Milestone::SideBySide {
                left_video_url,
                right_video_url,
                left_start_time,
                left_end_time,
                right_start_time,
                right_end_time,
                ..
            } => vec![
                clip(left_video_url, left_start_time.as_deref(), left_end_time.as_deref()),
                clip(right_video_url, right_start_time.as_deref(), right_end_time.as_deref()),
            ],
            Milestone::Image { .. }
            | Milestone::Placeholder { .. }
            | Milestone::VideoFile { .. } => Vec::new(),
        }
    }
}

fn clip(url: &str, start: Option<&str>, end: Option<&str>) -> VideoReference {
    let start = start.map(Offset::from);
    let end = end.map(Offset::from);
    VideoReference::resolve(url)
        .clip(start.as_ref(), end.as_ref())
}

/// One slide of the timeline: a year, or a span of years, and what happened in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGroup {
    pub year: String,
    pub milestones: Vec<Milestone>,
}
