use ahash::AHashSet;

/// Per-engine memo of dictionary verdicts.
///
/// A word is in at most one of the two sets; recording a verdict moves it
/// out of the other.
#[derive(Debug, Clone, Default)]
pub struct VerdictSession {
    known_correct: AHashSet<String>,
    known_incorrect: AHashSet<String>,
    hits: u64,
    misses: u64,
}

impl VerdictSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached verdict for `word`, counting the hit or miss.
    pub fn lookup(&mut self, word: &str) -> Option<bool> {
        let verdict = self.peek(word);
        match verdict {
            Some(_) => self.hits += 1,
            None => self.misses += 1,
        }
        verdict
    }

    /// The cached verdict without touching the counters.
    pub fn peek(&self, word: &str) -> Option<bool> {
        if self.known_correct.contains(word) {
            Some(true)
        } else if self.known_incorrect.contains(word) {
            Some(false)
        } else {
            None
        }
    }

    pub fn is_known_correct(&self, word: &str) -> bool {
        self.known_correct.contains(word)
    }

    pub fn record(&mut self, word: &str, correct: bool) {
        if correct {
            self.known_incorrect.remove(word);
            self.known_correct.insert(word.to_string());
        } else {
            self.known_correct.remove(word);
            self.known_incorrect.insert(word.to_string());
        }
    }

    pub fn correct_count(&self) -> usize {
        self.known_correct.len()
    }

    pub fn incorrect_count(&self) -> usize {
        self.known_incorrect.len()
    }

    pub fn len(&self) -> usize {
        self.known_correct.len() + self.known_incorrect.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.known_correct.clear();
        self.known_incorrect.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let mut session = VerdictSession::new();
        assert_eq!(session.lookup("cats"), None);

        session.record("cats", true);
        session.record("zorblax", false);
        assert_eq!(session.lookup("cats"), Some(true));
        assert_eq!(session.lookup("zorblax"), Some(false));
        assert_eq!(session.hits(), 2);
        assert_eq!(session.misses(), 1);
    }

    #[test]
    fn test_sets_stay_disjoint() {
        let mut session = VerdictSession::new();
        session.record("word", false);
        session.record("word", true);
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.incorrect_count(), 0);
        assert!(session.is_known_correct("word"));

        session.clear();
        assert!(session.is_empty());
    }
}
