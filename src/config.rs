use crate::video::{VideoFilter, DEFAULT_VIDEO_EXTENSIONS};
use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub video_extensions: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub original_structure_file: String,
    pub series_structure_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            video_extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            ignore_patterns: Vec::new(),
            original_structure_file: "original_structure.json".to_string(),
            series_structure_file: "series_structure.json".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `Config.{toml,yaml,json}` from the working directory if present,
    /// then `COURSE_ORGANIZER_*` environment variables. Anything unset keeps
    /// its default.
    pub fn load() -> Result<AppConfig, ConfigError> {
        Self::load_from("Config")
    }

    pub fn load_from(file_stem: &str) -> Result<AppConfig, ConfigError> {
        let builder = Config::builder()
            .add_source(ConfigFile::with_name(file_stem).required(false))
            .add_source(
                Environment::with_prefix("COURSE_ORGANIZER")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("video_extensions")
                    .with_list_parse_key("ignore_patterns"),
            )
            .build()?;

        builder.try_deserialize::<AppConfig>()
    }

    pub fn video_filter(&self) -> VideoFilter {
        VideoFilter::new(&self.video_extensions)
    }
}
