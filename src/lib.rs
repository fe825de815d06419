pub mod api;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod highlight;
pub mod logger;
pub mod scroll;
pub mod youtube;
