pub mod config;
pub mod engine;
pub mod error;
pub mod materialize;
pub mod model;
pub mod naming;
pub mod platform;
pub mod scanner;
pub mod series;
pub mod store;
pub mod utils;
pub mod video;

pub use config::AppConfig;
pub use engine::{Organizer, ScanResult};
pub use error::{Error, Result};
pub use materialize::{materialize, MaterializeReport};
pub use model::{Episode, FileRef, FolderNode, Season, SeriesStructure};
pub use series::{build_series, clean_and_reorder};
