use std::cmp::Ordering;

/// Numeric-aware, case-insensitive string ordering: `"2"` sorts before `"10"`
/// and `"Lesson 9"` before `"lesson 10"`.
///
/// Names that only differ in case fall back to byte order so the result is a
/// total order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    alphanumeric_sort::compare_str(a.to_lowercase(), b.to_lowercase()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(sorted(vec!["10", "2", "1"]), vec!["1", "2", "10"]);
        assert_eq!(
            sorted(vec!["10. Wrap Up", "2. Setup", "1. Intro"]),
            vec!["1. Intro", "2. Setup", "10. Wrap Up"]
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            sorted(vec!["lesson 10", "Lesson 9", "LESSON 1"]),
            vec!["LESSON 1", "Lesson 9", "lesson 10"]
        );
        assert_eq!(sorted(vec!["b", "A", "c"]), vec!["A", "b", "c"]);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(natural_cmp("03", "4"), Ordering::Less);
        assert_eq!(
            sorted(vec!["03. Advanced", "2. Extras", "1. Basics"]),
            vec!["1. Basics", "2. Extras", "03. Advanced"]
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(natural_cmp("part", "part2"), Ordering::Less);
        assert_eq!(natural_cmp("a", "a"), Ordering::Equal);
    }

    #[test]
    fn test_equal_ignoring_case_is_still_total() {
        assert_ne!(natural_cmp("Intro", "intro"), Ordering::Equal);
        assert_eq!(natural_cmp("Intro", "intro"), natural_cmp("Intro", "intro"));
    }
}
