use crate::error::Result;
use crate::model::SeriesStructure;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes `data` as pretty-printed JSON, replacing any existing file.
pub fn write_json<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Loads a persisted series structure, typically one written by `generate`
/// and edited by hand.
///
/// The contract is stricter than "any name": every season name must start
/// with `S<digits>` and every episode name with `S<digits>E<digits>`. Text
/// after the prefix is kept verbatim. A name without its prefix, such as an
/// episode called `"S01 • Intro"`, fails the whole load with
/// [`Error::InvalidName`](crate::error::Error::InvalidName) wrapped in
/// [`Error::Json`](crate::error::Error::Json), and nothing is materialized.
pub fn read_series(path: &Path) -> Result<SeriesStructure> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Episode, FileRef, FolderNode, Season};
    use tempfile::tempdir;

    fn sample() -> SeriesStructure {
        let mut season = Season::new(1, "Basics");
        season.episodes.push(Episode::new(
            1,
            1,
            &["Lesson1"],
            FileRef {
                name: "lesson1.mp4".to_string(),
                full_path: "/courses/go/1. Basics/lesson1.mp4".into(),
            },
        ));
        SeriesStructure {
            seasons: vec![season],
        }
    }

    #[test]
    fn test_series_file_round_trips_byte_for_byte() {
        let tmp = tempdir().unwrap();
        let first = tmp.path().join("first.json");
        let second = tmp.path().join("second.json");

        write_json(&sample(), &first).unwrap();
        let loaded = read_series(&first).unwrap();
        assert_eq!(loaded, sample());

        write_json(&loaded, &second).unwrap();
        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_written_json_is_indented() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("series.json");
        write_json(&SeriesStructure::default(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"seasons\": []\n}");
    }

    #[test]
    fn test_read_series_errors() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("missing.json");
        assert!(matches!(read_series(&missing), Err(Error::Io(_))));

        let broken = tmp.path().join("broken.json");
        fs::write(&broken, "{\"seasons\": [").unwrap();
        assert!(matches!(read_series(&broken), Err(Error::Json(_))));
    }

    #[test]
    fn test_tree_round_trip() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("original_structure.json");
        let mut root = FolderNode::new("go", "/courses/go");
        root.sub_folders.push(FolderNode::new("1. Basics", "/courses/go/1. Basics"));

        write_json(&root, &path).unwrap();
        assert_eq!(read_json::<FolderNode>(&path).unwrap(), root);
        assert!(!fs::read_to_string(&path).unwrap().contains("\"files\""));
    }

    #[test]
    fn test_read_series_rejects_unprefixed_names() {
        let tmp = tempdir().unwrap();

        let episode = tmp.path().join("episode.json");
        fs::write(
            &episode,
            r#"{"seasons": [{"name": "S01 • Basics", "episodes": [
                {"name": "S01 • Intro", "files": []}
            ]}]}"#,
        )
        .unwrap();
        let err = read_series(&episode).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("S01 • Intro"));

        let season = tmp.path().join("season.json");
        fs::write(&season, r#"{"seasons": [{"name": "Basics", "episodes": []}]}"#).unwrap();
        assert!(matches!(read_series(&season), Err(Error::Json(_))));

        let edited = tmp.path().join("edited.json");
        fs::write(
            &edited,
            r#"{"seasons": [{"name": "S01 • Basics", "episodes": [
                {"name": "S01E01 • my own title", "files": []}
            ]}]}"#,
        )
        .unwrap();
        let loaded = read_series(&edited).unwrap();
        assert_eq!(loaded.seasons[0].episodes[0].label, " • my own title");
    }
}
