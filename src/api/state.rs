use std::{ops::Deref, sync::Arc};

use crate::{content::Catalogue, highlight::Highlighter};

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct App {
    pub catalogue: Arc<Catalogue>,
    pub highlighter: Arc<Highlighter>,
}

impl App {
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }
}

impl Deref for App {
    type Target = Catalogue;

    fn deref(&self) -> &Self::Target {
        &self.catalogue
    }
}

pub fn create_app(catalogue: Catalogue) -> App {
    let highlighter = catalogue.highlighter();

    App {
        catalogue: Arc::new(catalogue),
        highlighter: Arc::new(highlighter),
    }
}
