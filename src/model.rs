use crate::error::Error;
use crate::naming::{self, SEPARATOR};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub name: String,
    pub full_path: PathBuf,
}

/// Transient scan result: one directory with its naturally sorted children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    pub name: String,
    pub full_path: PathBuf,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_folders: Vec<FolderNode>,
}

impl FolderNode {
    pub fn new(name: impl Into<String>, full_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            files: Vec::new(),
            sub_folders: Vec::new(),
        }
    }
}

/// One episode of a season. `name` is rendered as `S<season>E<number><label>`.
///
/// `label` holds everything after the ordinal prefix verbatim, separator
/// included (`" • Basics • Lesson1"`), so a hand-edited structure file keeps
/// its text through renumbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEpisode", into = "RawEpisode")]
pub struct Episode {
    pub season: u32,
    pub number: u32,
    pub label: String,
    pub files: Vec<FileRef>,
}

impl Episode {
    pub fn new(season: u32, number: u32, segments: &[&str], file: FileRef) -> Self {
        Self {
            season,
            number,
            label: join_segments(segments),
            files: vec![file],
        }
    }

    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            naming::format_episode_prefix(self.season, self.number),
            self.label
        )
    }
}

/// One season. `name` is rendered as `S<number><label>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSeason", into = "RawSeason")]
pub struct Season {
    pub number: u32,
    pub label: String,
    pub episodes: Vec<Episode>,
}

impl Season {
    pub fn new(number: u32, title: &str) -> Self {
        Self {
            number,
            label: join_segments(&[title]),
            episodes: Vec::new(),
        }
    }

    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Moves this season and all of its episodes to `number`.
    pub fn renumber(&mut self, number: u32) {
        self.number = number;
        for episode in &mut self.episodes {
            episode.season = number;
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", naming::format_season_prefix(self.number), self.label)
    }
}

/// The durable artifact written to and read back from the structure file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStructure {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub seasons: Vec<Season>,
}

impl SeriesStructure {
    pub fn episode_count(&self) -> usize {
        self.seasons.iter().map(|s| s.episodes.len()).sum()
    }
}

fn join_segments(segments: &[&str]) -> String {
    segments.iter().fold(String::new(), |mut acc, segment| {
        acc.push_str(SEPARATOR);
        acc.push_str(segment);
        acc
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize)]
struct RawEpisode {
    name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    files: Vec<FileRef>,
}

impl TryFrom<RawEpisode> for Episode {
    type Error = Error;

    fn try_from(raw: RawEpisode) -> Result<Self, Self::Error> {
        let (season, number, label) = naming::parse_episode_name(&raw.name)?;
        Ok(Self {
            season,
            number,
            label,
            files: raw.files,
        })
    }
}

impl From<Episode> for RawEpisode {
    fn from(episode: Episode) -> Self {
        Self {
            name: episode.name(),
            files: episode.files,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawSeason {
    name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    episodes: Vec<Episode>,
}

impl TryFrom<RawSeason> for Season {
    type Error = Error;

    fn try_from(raw: RawSeason) -> Result<Self, Self::Error> {
        let (number, label) = naming::parse_season_name(&raw.name)?;
        Ok(Self {
            number,
            label,
            episodes: raw.episodes,
        })
    }
}

impl From<Season> for RawSeason {
    fn from(season: Season) -> Self {
        Self {
            name: season.name(),
            episodes: season.episodes,
        }
    }
}
