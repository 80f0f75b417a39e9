use crate::directory::CreatorRecord;

fn matches(record: &CreatorRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// True when `query` is non-blank and matches at least one record.
pub fn has_matches(directory: &[CreatorRecord], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    !needle.is_empty() && directory.iter().any(|r| matches(r, &needle))
}

/// Records whose name or any tag contains `query` (trimmed, case-insensitive),
/// in directory order. A blank query, or one that matches nothing, gives back
/// the whole directory.
pub fn filter(directory: &[CreatorRecord], query: &str) -> Vec<CreatorRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return directory.to_vec();
    }

    let hits: Vec<CreatorRecord> = directory
        .iter()
        .filter(|r| matches(r, &needle))
        .cloned()
        .collect();

    if hits.is_empty() {
        directory.to_vec()
    } else {
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, tags: &[&str]) -> CreatorRecord {
        CreatorRecord {
            name: name.into(),
            url: format!("https://example.com/{}", name.to_lowercase()),
            image: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn names(v: &[CreatorRecord]) -> Vec<&str> {
        v.iter().map(|r| r.name.as_str()).collect()
    }

    fn dir() -> Vec<CreatorRecord> {
        vec![rec("A", &["cat"]), rec("B", &["dog"]), rec("C", &["dog", "new"])]
    }

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(filter(&dir(), ""), dir());
        assert_eq!(filter(&dir(), "   \t"), dir());
    }

    #[test]
    fn tag_match_keeps_directory_order() {
        assert_eq!(names(&filter(&dir(), "dog")), ["B", "C"]);
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        assert_eq!(names(&filter(&dir(), "  DoG ")), ["B", "C"]);
        assert_eq!(names(&filter(&dir(), "NE")), ["C"]);
    }

    #[test]
    fn name_match() {
        let d = vec![rec("Ada Lovelace", &[]), rec("Grace Hopper", &["navy"])];
        assert_eq!(names(&filter(&d, "hop")), ["Grace Hopper"]);
    }

    #[test]
    fn no_match_falls_back_to_directory() {
        assert_eq!(filter(&dir(), "zebra"), dir());
        assert!(!has_matches(&dir(), "zebra"));
        assert!(has_matches(&dir(), "cat"));
        assert!(!has_matches(&dir(), " "));
    }

    #[test]
    fn result_is_always_a_subsequence() {
        let d = dir();
        for q in ["", "a", "c", "dog", "new", "x", "o"] {
            let out = filter(&d, q);
            let mut it = d.iter();
            for r in &out {
                assert!(it.any(|x| x == r), "{q:?} reordered or invented records");
            }
        }
    }

    #[test]
    fn empty_directory_stays_empty() {
        assert!(filter(&[], "dog").is_empty());
    }
}
