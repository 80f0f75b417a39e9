use crate::directory::CreatorRecord;
use crate::filter::{filter, has_matches};
use crate::input::Step;

// The ring length is never zero, so the modulus is always defined; on an
// empty sequence the resulting index is simply never used.
fn ring(len: usize) -> usize {
    len.max(1)
}

pub fn advance(cursor: usize, len: usize) -> usize {
    let len = ring(len);
    (cursor % len + 1) % len
}

pub fn retreat(cursor: usize, len: usize) -> usize {
    let len = ring(len);
    (cursor % len + len - 1) % len
}

pub fn clamp(cursor: usize, len: usize) -> usize {
    if cursor < ring(len) {
        cursor
    } else {
        0
    }
}

/// Directory + query + cursor. Every change to the visible sequence goes
/// through here so the cursor can never point past its end.
#[derive(Debug, Clone, PartialEq)]
pub struct Reel {
    directory: Vec<CreatorRecord>,
    query: String,
    visible: Vec<CreatorRecord>,
    cursor: usize,
}

impl Reel {
    pub fn new(directory: Vec<CreatorRecord>) -> Self {
        let visible = directory.clone();
        Self {
            directory,
            query: String::new(),
            visible,
            cursor: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &[CreatorRecord] {
        &self.visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.visible = filter(&self.directory, &self.query);
        self.cursor = clamp(self.cursor, self.visible.len());
    }

    pub fn step(&mut self, step: Step) {
        let len = self.visible.len();
        self.cursor = match step {
            Step::Advance => advance(self.cursor, len),
            Step::Retreat => retreat(self.cursor, len),
        };
    }

    pub fn jump_to(&mut self, index: usize) {
        self.cursor = clamp(index, self.visible.len());
    }

    pub fn current(&self) -> Option<&CreatorRecord> {
        self.visible.get(self.cursor)
    }

    /// 1-based position and total, for the "n / total" counter.
    pub fn position(&self) -> (usize, usize) {
        if self.visible.is_empty() {
            (0, 0)
        } else {
            (self.cursor + 1, self.visible.len())
        }
    }

    /// A non-blank query matched nothing and the full directory is showing.
    pub fn is_fallback(&self) -> bool {
        !self.directory.is_empty()
            && !self.query.trim().is_empty()
            && !has_matches(&self.directory, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, tags: &[&str]) -> CreatorRecord {
        CreatorRecord {
            name: name.into(),
            url: format!("https://example.com/{name}"),
            image: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn reel() -> Reel {
        Reel::new(vec![rec("A", &["cat"]), rec("B", &["dog"]), rec("C", &["dog", "new"])])
    }

    #[test]
    fn ring_wraps_both_ways() {
        assert_eq!(advance(2, 3), 0);
        assert_eq!(retreat(0, 3), 2);
        assert_eq!(advance(0, 1), 0);
        assert_eq!(retreat(0, 1), 0);
    }

    #[test]
    fn zero_length_is_treated_as_one() {
        assert_eq!(advance(0, 0), 0);
        assert_eq!(retreat(0, 0), 0);
        assert_eq!(clamp(5, 0), 0);
    }

    #[test]
    fn advance_and_retreat_are_inverses() {
        for len in 1..=7 {
            for c in 0..len {
                assert_eq!(retreat(advance(c, len), len), c);
                assert_eq!(advance(retreat(c, len), len), c);
            }
        }
    }

    #[test]
    fn clamp_resets_out_of_range() {
        assert_eq!(clamp(2, 3), 2);
        assert_eq!(clamp(3, 3), 0);
        assert_eq!(clamp(usize::MAX, 3), 0);
    }

    #[test]
    fn filtered_scenario() {
        let mut r = reel();
        r.set_query("dog");
        assert_eq!(r.current().map(|c| c.name.as_str()), Some("B"));
        r.step(Step::Advance);
        assert_eq!(r.cursor(), 1);
        assert_eq!(r.current().map(|c| c.name.as_str()), Some("C"));
        r.step(Step::Advance);
        assert_eq!(r.cursor(), 0);
        assert_eq!(r.current().map(|c| c.name.as_str()), Some("B"));
    }

    #[test]
    fn narrowing_the_query_reclamps() {
        let mut r = reel();
        r.step(Step::Retreat);
        assert_eq!(r.cursor(), 2);
        r.set_query("cat");
        assert_eq!(r.visible().len(), 1);
        assert_eq!(r.cursor(), 0);
        assert!(r.current().is_some());
    }

    #[test]
    fn in_range_cursor_survives_a_query_change() {
        let mut r = reel();
        r.step(Step::Advance);
        r.set_query("dog");
        assert_eq!(r.cursor(), 1);
        assert_eq!(r.current().map(|c| c.name.as_str()), Some("C"));
    }

    #[test]
    fn cursor_never_escapes_the_visible_range() {
        let mut r = reel();
        for (i, q) in ["", "dog", "new", "zzz", "a", "", "cat"].iter().enumerate() {
            for _ in 0..i {
                r.step(Step::Advance);
            }
            r.set_query(*q);
            assert!(r.cursor() < r.visible().len(), "query {q:?}");
        }
    }

    #[test]
    fn fallback_is_reported() {
        let mut r = reel();
        assert!(!r.is_fallback());
        r.set_query("zebra");
        assert!(r.is_fallback());
        assert_eq!(r.visible().len(), 3);
        r.set_query("dog");
        assert!(!r.is_fallback());
    }

    #[test]
    fn position_and_jump() {
        let mut r = reel();
        assert_eq!(r.position(), (1, 3));
        r.jump_to(2);
        assert_eq!(r.position(), (3, 3));
        r.jump_to(9);
        assert_eq!(r.position(), (1, 3));
    }

    #[test]
    fn empty_directory_has_no_current() {
        let mut r = Reel::new(vec![]);
        r.step(Step::Advance);
        r.set_query("x");
        assert_eq!(r.cursor(), 0);
        assert!(r.current().is_none());
        assert!(!r.is_fallback());
        assert_eq!(r.position(), (0, 0));
    }
}
