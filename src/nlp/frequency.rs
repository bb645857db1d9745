// Word frequency distribution.
// Counts are case-sensitive; ties in `most_common` keep first-occurrence order.
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyDistribution {
    counts: Vec<(String, usize)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    total: usize,
}

impl FrequencyDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.counts.len());
                self.counts.push((word.to_string(), 1));
            }
        }
        self.total += 1;
    }

    /// Total number of samples counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The `n` most frequent words, highest count first.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        // stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyDistribution {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dist = Self::new();
        for word in iter {
            dist.add(word.as_ref());
        }
        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_totals() {
        let dist: FrequencyDistribution = ["a", "b", "a", "c", "a", "b"].into_iter().collect();
        assert_eq!(dist.total(), 6);
        assert_eq!(dist.distinct(), 3);
        assert_eq!(dist.most_common(2), vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_most_common_order() {
        let dist: FrequencyDistribution = ["x", "y", "z", "y", "z", "w"].into_iter().collect();
        assert_eq!(dist.most_common(3), vec![("y", 2), ("z", 2), ("x", 1)]);
    }

    #[test]
    fn test_most_common_more_than_available() {
        let dist: FrequencyDistribution = ["one"].into_iter().collect();
        assert_eq!(dist.most_common(10), vec![("one", 1)]);
    }

    #[test]
    fn test_case_sensitive() {
        let dist: FrequencyDistribution = ["The", "the"].into_iter().collect();
        assert_eq!(dist.distinct(), 2);
    }

    #[test]
    fn test_empty() {
        let dist = FrequencyDistribution::new();
        assert!(dist.is_empty());
        assert!(dist.most_common(5).is_empty());
    }
}
