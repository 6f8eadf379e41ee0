pub mod categories;
pub mod error;
pub mod navigation;
pub mod render;
pub mod source;
pub mod state;
pub mod types;
pub mod views;

pub use categories::{Category, ALL_CATEGORY_ID, CATEGORIES};
pub use error::{Error, LoadError, Result, LOAD_ERROR_MESSAGE};
pub use navigation::{AnchorNavigation, Navigation};
pub use source::{load_articles, source_from_location, ArticleSource, FileSource, HttpSource, DATA_PATH};
pub use state::DisplayState;
pub use types::Article;
pub use views::{ArticleStore, CategorySlice, Section, Stats};
