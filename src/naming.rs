use crate::error::{Error, Result};
use regex::Regex;

/// Separator placed between the segments of a season or episode name.
pub const SEPARATOR: &str = " • ";

lazy_static::lazy_static! {
    static ref ORDINAL_PREFIX: Regex = Regex::new(r"^(?:[0-9]+\.\s*)+").unwrap();
    static ref SEASON_PREFIX: Regex = Regex::new(r"^S([0-9]+)").unwrap();
    static ref EPISODE_PREFIX: Regex = Regex::new(r"^S([0-9]+)E([0-9]+)").unwrap();
}

/// Strips a leading ordinal such as `"03. "` and title-cases what is left.
///
/// `"03. Intro to GO"` becomes `"Intro To Go"`. Names without an ordinal
/// prefix are only re-cased.
pub fn clean_name(raw: &str) -> String {
    let stripped = ORDINAL_PREFIX.replace(raw, "");
    title_case(&stripped.to_lowercase())
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if at_word_start {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => out.push(u),
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
        at_word_start = is_separator(c);
    }

    out
}

/// ASCII punctuation and any whitespace start a new word. Other non-ASCII
/// characters (`’`, `•`, accented letters) stay inside the word.
fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}

pub fn format_season_prefix(season: u32) -> String {
    format!("S{:02}", season)
}

pub fn format_episode_prefix(season: u32, episode: u32) -> String {
    format!("S{:02}E{:02}", season, episode)
}

/// Splits `"S03 • Advanced"` into `(3, " • Advanced")`.
pub fn parse_season_name(name: &str) -> Result<(u32, String)> {
    let invalid = || Error::InvalidName {
        kind: "season",
        name: name.to_string(),
    };

    let caps = SEASON_PREFIX.captures(name).ok_or_else(invalid)?;
    let number = caps[1].parse::<u32>().map_err(|_| invalid())?;
    let rest = &name[caps.get(0).map_or(0, |m| m.end())..];

    Ok((number, rest.to_string()))
}

/// Splits `"S01E02 • Lesson2"` into `(1, 2, " • Lesson2")`.
pub fn parse_episode_name(name: &str) -> Result<(u32, u32, String)> {
    let invalid = || Error::InvalidName {
        kind: "episode",
        name: name.to_string(),
    };

    let caps = EPISODE_PREFIX.captures(name).ok_or_else(invalid)?;
    let season = caps[1].parse::<u32>().map_err(|_| invalid())?;
    let episode = caps[2].parse::<u32>().map_err(|_| invalid())?;
    let rest = &name[caps.get(0).map_or(0, |m| m.end())..];

    Ok((season, episode, rest.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_strips_ordinal_prefix() {
        assert_eq!(clean_name("03. Intro To Go"), "Intro To Go");
        assert_eq!(clean_name("1.Basics"), "Basics");
        assert_eq!(clean_name("12.   spaced out"), "Spaced Out");
    }

    #[test]
    fn test_clean_name_without_prefix() {
        assert_eq!(clean_name("No Prefix"), "No Prefix");
        assert_eq!(clean_name("3 Little Pigs"), "3 Little Pigs");
        assert_eq!(clean_name("3.5 things"), "5 Things");
    }

    #[test]
    fn test_clean_name_title_cases_every_word() {
        assert_eq!(clean_name("THE END OF a story"), "The End Of A Story");
        assert_eq!(clean_name("lesson1"), "Lesson1");
        assert_eq!(clean_name("part-two (final)"), "Part-Two (Final)");
        assert_eq!(clean_name("snake_case_name"), "Snake_case_name");
    }

    #[test]
    fn test_clean_name_keeps_non_ascii_punctuation_inside_words() {
        assert_eq!(clean_name("don’t stop"), "Don’t Stop");
        assert_eq!(clean_name("02. l’été\u{00A0}chaud"), "L’été\u{00A0}Chaud");
    }

    #[test]
    fn test_clean_name_empty() {
        assert_eq!(clean_name(""), "");
        assert_eq!(clean_name("01. "), "");
    }

    #[test]
    fn test_clean_name_is_idempotent() {
        let inputs = [
            "03. Intro To Go",
            "1. 2. nested ordinals",
            "ÉCOLE du ß",
            "  leading spaces",
            "a.b.c",
            "rock’n’roll",
            "42.",
            "",
        ];
        for input in inputs {
            let once = clean_name(input);
            assert_eq!(clean_name(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_parse_season_name() {
        assert_eq!(
            parse_season_name("S03 • Advanced").unwrap(),
            (3, " • Advanced".to_string())
        );
        assert_eq!(parse_season_name("S120").unwrap(), (120, String::new()));
        assert!(matches!(
            parse_season_name("Season 1"),
            Err(Error::InvalidName { kind: "season", .. })
        ));
    }

    #[test]
    fn test_parse_episode_name() {
        assert_eq!(
            parse_episode_name("S01E02 • Lesson2").unwrap(),
            (1, 2, " • Lesson2".to_string())
        );
        assert!(parse_episode_name("S01 • Missing Episode").is_err());
        assert!(parse_episode_name("E01").is_err());
    }

    #[test]
    fn test_format_prefixes() {
        assert_eq!(format_season_prefix(2), "S02");
        assert_eq!(format_season_prefix(100), "S100");
        assert_eq!(format_episode_prefix(2, 7), "S02E07");
    }
}
