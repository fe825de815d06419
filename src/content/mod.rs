//! Site content: the journey timeline, headline stats, brands and the phrases
//! emphasized in the bio. All of it is data, loaded from JSON, so it can be
//! edited without touching the code that renders it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use tracing::instrument;

use crate::carousel::{Carousel, SlideDeck};
use crate::highlight::Highlighter;

pub use journey::*;

mod journey;

const BUILTIN_CATALOGUE: &str = include_str!("catalogue.json");

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ContentError {
    #[snafu(display("could not read content file `{}`: {source}", path.display()))]
    ReadContent {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("content file `{}` is malformed: {source}", path.display()))]
    ParseContent {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactStat {
    pub value: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub journey: SlideDeck<YearGroup>,
    #[serde(default)]
    pub impact_stats: Vec<ImpactStat>,
    #[serde(default)]
    pub brands: Vec<String>,
    /// phrases emphasized wherever bio text is rendered
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Catalogue {
    /// The content shipped with the site.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::parse(BUILTIN_CATALOGUE, Path::new("<builtin>"))
    }

    #[instrument]
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path).context(ReadContentSnafu { path })?;
        let catalogue = Self::parse(&text, path)?;

        tracing::info!(
            years = catalogue.journey.len(),
            highlights = catalogue.highlights.len(),
            "loaded content from `{}`",
            path.display()
        );
        Ok(catalogue)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ContentError> {
        serde_json::from_str(text).context(ParseContentSnafu { path })
    }

    pub fn deck(&self) -> &SlideDeck<YearGroup> {
        &self.journey
    }

    /// A fresh timeline view, starting on the first year.
    pub fn carousel(&self) -> Carousel<YearGroup> {
        Carousel::new(self.journey.clone())
    }

    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(self.highlights.as_slice())
    }
}
