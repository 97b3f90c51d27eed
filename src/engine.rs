use crate::config::AppConfig;
use crate::error::Result;
use crate::model::{FolderNode, SeriesStructure};
use crate::scanner;
use crate::series;
use crate::store;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{error, info};

pub struct Organizer {
    config: AppConfig,
}

#[derive(Debug)]
pub struct ScanResult {
    pub root: FolderNode,
    pub series: SeriesStructure,
    pub scan_duration: Duration,
    pub build_duration: Duration,
}

/// Which structure files were written by [`Organizer::persist`].
#[derive(Debug, Default)]
pub struct PersistResult {
    pub original_structure: Option<PathBuf>,
    pub series_structure: Option<PathBuf>,
}

impl Organizer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Scan `course_dir` and turn it into a renumbered series:
    /// 1. Load the folder tree (fatal on any read error)
    /// 2. Build provisional seasons and episodes
    /// 3. Drop empty seasons and renumber the rest
    pub fn scan(&self, course_dir: &Path) -> Result<ScanResult> {
        info!("Scanning {}...", course_dir.display());
        let scan_start = Instant::now();
        let root = scanner::load_tree(course_dir, &self.config.ignore_patterns)?;
        let scan_duration = scan_start.elapsed();

        let build_start = Instant::now();
        let provisional = series::build_series_with(&root, &self.config.video_filter());
        let series = series::clean_and_reorder(provisional);
        let build_duration = build_start.elapsed();

        info!(
            "{} seasons, {} episodes from {} top-level folders",
            series.seasons.len(),
            series.episode_count(),
            root.sub_folders.len()
        );

        Ok(ScanResult {
            root,
            series,
            scan_duration,
            build_duration,
        })
    }

    /// Write both structure files. A failed write is logged and leaves the
    /// corresponding entry `None`; it never stops the other write.
    pub fn persist(&self, result: &ScanResult, series_file: Option<&Path>) -> PersistResult {
        let original_path = PathBuf::from(&self.config.original_structure_file);
        let series_path = series_file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.config.series_structure_file));

        PersistResult {
            original_structure: write_logged(&result.root, original_path),
            series_structure: write_logged(&result.series, series_path),
        }
    }
}

fn write_logged<T: serde::Serialize>(data: &T, path: PathBuf) -> Option<PathBuf> {
    match store::write_json(data, &path) {
        Ok(()) => Some(path),
        Err(err) => {
            error!("Error writing {}: {}", path.display(), err);
            None
        }
    }
}
