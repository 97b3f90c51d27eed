use crate::model::SeriesStructure;
use crate::platform;
use crate::utils::split_extension;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

#[derive(Debug)]
pub struct MaterializeFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

#[derive(Debug, Default)]
pub struct MaterializeReport {
    pub seasons_created: usize,
    pub links_created: usize,
    pub failures: Vec<MaterializeFailure>,
}

impl MaterializeReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(&mut self, path: PathBuf, err: io::Error, what: &str) {
        error!("Error creating {} {}: {}", what, path.display(), err);
        self.failures.push(MaterializeFailure { path, error: err });
    }
}

/// Creates `output_root/series_dir_name/<season>/<episode><ext>` symlinks
/// pointing at each episode's source file.
///
/// Failures never abort the batch: a season whose directory cannot be
/// created is skipped, a link that cannot be created is skipped, and each
/// is recorded in the report. Links already created are left in place.
pub fn materialize(
    series: &SeriesStructure,
    output_root: &Path,
    series_dir_name: &str,
) -> MaterializeReport {
    let mut report = MaterializeReport::default();
    let series_dir = output_root.join(series_dir_name);

    if let Err(err) = fs::create_dir_all(&series_dir) {
        report.fail(series_dir, err, "series directory");
        return report;
    }

    for season in &series.seasons {
        let season_dir = series_dir.join(season.name());
        if let Err(err) = fs::create_dir_all(&season_dir) {
            report.fail(season_dir, err, "season directory");
            continue;
        }
        report.seasons_created += 1;

        for episode in &season.episodes {
            for file in &episode.files {
                let (_, ext) = split_extension(&file.name);
                let link = season_dir.join(format!("{}{}", episode, ext));

                match platform::symlink_file(&file.full_path, &link) {
                    Ok(()) => {
                        debug!("{} -> {}", link.display(), file.full_path.display());
                        report.links_created += 1;
                    }
                    Err(err) => report.fail(link, err, "symlink"),
                }
            }
        }
    }

    info!(
        "Created {} symlinks in {} season directories under {}",
        report.links_created,
        report.seasons_created,
        series_dir.display()
    );

    report
}
