//! JSON endpoints the rendering layer calls into.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::instrument;

use crate::carousel::{CarouselInput, CarouselState};
use crate::content::{ImpactStat, Milestone, YearGroup};
use crate::highlight::{HighlightSpan, Highlighter};
use crate::scroll::{is_at_top, ScrollTracker, Section, SectionBounds};
use crate::youtube::{Offset, VideoReference};

mod error;
mod extract;
mod state;

pub use error::*;
pub use extract::*;
pub use state::*;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

pub fn create_router(app: App) -> Router {
    Router::new()
        .route("/api/video", get(video))
        .route("/api/highlight", post(highlight))
        .route("/api/journey", get(journey))
        .route("/api/journey/navigate", post(navigate))
        .route("/api/journey/:index", get(slide))
        .route("/api/scroll", post(scroll))
        .route("/api/stats", get(stats))
        .route("/api/brands", get(brands))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app)
}

/// A video plus every url needed to show it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoView {
    #[serde(flatten)]
    pub video: VideoReference,
    /// thumbnails in fallback order
    pub thumbnails: Vec<String>,
    pub embed_url: String,
}

impl VideoView {
    fn new(video: VideoReference, autoplay: bool) -> Self {
        Self {
            thumbnails: video.thumbnail_urls(),
            embed_url: video.embed_url(autoplay),
            video,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VideoQuery {
    pub url: String,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub autoplay: bool,
}

#[instrument]
async fn video(QueryParams(query): QueryParams<VideoQuery>) -> Json<VideoView> {
    let start = query.start.as_deref().map(Offset::parse);
    let end = query.end.as_deref().map(Offset::parse);
    let video = VideoReference::resolve(&query.url)
        .clip(start.as_ref(), end.as_ref());

    Json(VideoView::new(video, query.autoplay))
}

#[derive(Debug, Deserialize)]
pub struct HighlightRequest {
    pub text: String,
    /// falls back to the catalogue's phrases
    pub phrases: Option<Vec<String>>,
}

#[instrument(skip(app))]
async fn highlight(
    State(app): State<App>,
    JsonBody(request): JsonBody<HighlightRequest>,
) -> Json<Vec<HighlightSpan>> {
    let spans = match &request.phrases {
        Some(phrases) => Highlighter::new(phrases.as_slice()).spans(&request.text),
        None => app.highlighter().spans(&request.text),
    };

    Json(spans)
}

#[instrument(skip(app))]
async fn journey(State(app): State<App>) -> Json<Vec<YearGroup>> {
    Json(app.deck().iter().cloned().collect())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneView {
    #[serde(flatten)]
    pub milestone: Milestone,
    pub videos: Vec<VideoView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideView {
    pub index: usize,
    pub total: usize,
    pub year: String,
    pub milestones: Vec<MilestoneView>,
}

#[instrument(skip(app))]
async fn slide(
    State(app): State<App>,
    PathParam(index): PathParam<usize>,
) -> Result<Json<SlideView>> {
    let deck = app.deck();
    let group = deck.get(index).ok_or(ApiError::SlideNotFound {
        index,
        len: deck.len(),
    })?;

    let milestones = group
        .milestones
        .iter()
        .map(|milestone| MilestoneView {
            videos: milestone
                .videos()
                .into_iter()
                .map(|video| VideoView::new(video, true))
                .collect(),
            milestone: milestone.clone(),
        })
        .collect();

    Ok(Json(SlideView {
        index,
        total: deck.len(),
        year: group.year.clone(),
        milestones,
    }))
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    #[serde(default)]
    pub state: CarouselState,
    pub input: CarouselInput,
}

/// The view owns the carousel state, this only computes the next one.
#[instrument(skip(app))]
async fn navigate(
    State(app): State<App>,
    JsonBody(request): JsonBody<NavigateRequest>,
) -> Result<Json<CarouselState>> {
    let len = app.deck().len();
    let mut state = request.state;

    if state.active_index >= len {
        return Err(ApiError::InvalidCarouselState {
            index: state.active_index,
            len,
        });
    }

    state.apply(&request.input, len);
    Ok(Json(state))
}

#[derive(Debug, Deserialize)]
pub struct ScrollRequest {
    pub viewport_height: f64,
    pub scroll_y: f64,
    pub hero_height: f64,
    pub sections: Vec<SectionBounds>,
    /// the section that was active before this scroll
    #[serde(default)]
    pub active: Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollResponse {
    pub active: Section,
    pub at_top: bool,
}

#[instrument(skip_all)]
async fn scroll(JsonBody(request): JsonBody<ScrollRequest>) -> Json<ScrollResponse> {
    let mut tracker = ScrollTracker::new(request.active);
    let active = tracker.update(request.viewport_height, &request.sections);

    Json(ScrollResponse {
        active,
        at_top: is_at_top(request.scroll_y, request.hero_height),
    })
}

async fn stats(State(app): State<App>) -> Json<Vec<ImpactStat>> {
    Json(app.impact_stats.clone())
}

async fn brands(State(app): State<App>) -> Json<Vec<String>> {
    Json(app.brands.clone())
}
