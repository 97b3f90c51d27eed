use crate::model::{Episode, FileRef, FolderNode, Season, SeriesStructure};
use crate::naming::clean_name;
use crate::utils::{file_name_lossy, split_extension};
use crate::video::VideoFilter;
use tracing::debug;

/// Maps each direct subfolder of `root` to a season and each video file in
/// its subtree to an episode, using the default video extensions.
///
/// Ordinals are provisional: empty seasons are still present and keep their
/// position. Run [`clean_and_reorder`] before persisting.
pub fn build_series(root: &FolderNode) -> SeriesStructure {
    build_series_with(root, &VideoFilter::default())
}

pub fn build_series_with(root: &FolderNode, filter: &VideoFilter) -> SeriesStructure {
    let seasons = root
        .sub_folders
        .iter()
        .zip(1u32..)
        .map(|(season_folder, number)| {
            let mut season = Season::new(number, &clean_name(&season_folder.name));
            season.episodes = build_episodes(season_folder, number, &root.name, filter);
            debug!(
                "{} with {} episodes from {}",
                season,
                season.episodes.len(),
                season_folder.full_path.display()
            );
            season
        })
        .collect();

    SeriesStructure { seasons }
}

fn build_episodes(
    season_folder: &FolderNode,
    season: u32,
    root_name: &str,
    filter: &VideoFilter,
) -> Vec<Episode> {
    filter
        .collect_video_files(season_folder)
        .into_iter()
        .zip(1u32..)
        .map(|(file, number)| {
            let segments = episode_segments(&file, &season_folder.name, root_name);
            let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
            Episode::new(season, number, &segments, file)
        })
        .collect()
}

/// Title segments of an episode name: the cleaned parent folder when the file
/// sits below the season folder, then the cleaned file stem.
fn episode_segments(file: &FileRef, season_name: &str, root_name: &str) -> Vec<String> {
    let mut segments = Vec::with_capacity(2);

    if let Some(parent) = file.full_path.parent() {
        let parent_name = file_name_lossy(parent);
        if parent_name != season_name && parent_name != root_name {
            segments.push(clean_name(&parent_name));
        }
    }

    let (stem, _) = split_extension(&file.name);
    segments.push(clean_name(stem));
    segments
}

/// Drops empty seasons, orders the rest by their current season number and
/// renumbers them `1..=N`. Episode numbers are left alone.
///
/// Sorting is stable, so seasons sharing a number keep their relative order.
/// Running this on its own output changes nothing.
pub fn clean_and_reorder(series: SeriesStructure) -> SeriesStructure {
    let mut seasons: Vec<Season> = series
        .seasons
        .into_iter()
        .filter(|season| {
            if season.episodes.is_empty() {
                debug!("Dropping {}: no episodes", season);
                false
            } else {
                true
            }
        })
        .collect();

    seasons.sort_by_key(|season| season.number);

    for (season, number) in seasons.iter_mut().zip(1u32..) {
        if season.number != number {
            debug!("Renumbering {} to S{:02}", season, number);
        }
        season.renumber(number);
    }

    SeriesStructure { seasons }
}
