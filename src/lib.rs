mod config;
mod document;
mod error;
mod escape;
mod headings;
mod links;
mod output_formats;
mod request;
mod theme_helpers;
mod types;

pub use config::{FeedConfig, FeedKind, HelperConfig};
pub use error::{Error, Result};
pub use links::build_url;
pub use output_formats::{FormatListStyle, DEFAULT_DELIMITER};
pub use request::Request;
pub use theme_helpers::ThemeHelpers;
pub use types::*;
