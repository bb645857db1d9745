// NLP pipeline for txtprep
pub mod frequency;
pub mod ner;
pub mod pos;
pub mod tokenize;

use indicatif::ProgressBar;
use serde::Serialize;
use std::collections::HashMap;

pub use frequency::FrequencyDistribution;
pub use ner::{Entity, EntityLabel};
pub use pos::{PosTag, TaggedToken};

/// Everything derived from one pass over the input text.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub sentences: Vec<String>,
    /// Tokens of each sentence, punctuation included.
    pub words: Vec<Vec<String>>,
    pub tagged: Vec<Vec<TaggedToken>>,
    pub entities: Vec<Entity>,
    /// Counts over word tokens only; punctuation is left out.
    pub frequency: FrequencyDistribution,
}

impl Analysis {
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn word_count(&self) -> usize {
        self.frequency.total()
    }

    /// Entity label frequencies, in order of first appearance.
    pub fn entity_label_counts(&self) -> Vec<(EntityLabel, usize)> {
        count_in_order(self.entities.iter().map(|e| e.label))
    }

    /// Tag frequencies over non-punctuation tokens, most frequent first.
    pub fn pos_counts(&self) -> Vec<(PosTag, usize)> {
        let mut counts = count_in_order(
            self.tagged
                .iter()
                .flatten()
                .map(|t| t.tag)
                .filter(|tag| !tag.is_punctuation()),
        );
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

pub fn analyze(text: &str) -> Analysis {
    analyze_with_progress(text, &ProgressBar::hidden())
}

/// Run the full pipeline, ticking `progress` once per sentence.
pub fn analyze_with_progress(text: &str, progress: &ProgressBar) -> Analysis {
    let sentences = tokenize::sentences(text);
    progress.set_length(sentences.len() as u64);

    let mut words = Vec::with_capacity(sentences.len());
    let mut tagged = Vec::with_capacity(sentences.len());
    let mut entities = Vec::new();

    for (idx, sentence) in sentences.iter().enumerate() {
        let sentence_words = tokenize::words(sentence);
        let sentence_tags = pos::tag(&sentence_words);
        entities.extend(ner::chunk(&sentence_tags, idx));
        words.push(sentence_words);
        tagged.push(sentence_tags);
        progress.inc(1);
    }

    let frequency: FrequencyDistribution = words
        .iter()
        .flatten()
        .filter(|w| tokenize::is_word(w))
        .collect();

    tracing::debug!(
        sentences = sentences.len(),
        words = frequency.total(),
        entities = entities.len(),
        "analysis complete"
    );

    Analysis {
        sentences,
        words,
        tagged,
        entities,
        frequency,
    }
}

fn count_in_order<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Copy + Eq + std::hash::Hash,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        let slot = *slots.entry(item).or_insert_with(|| {
            counts.push((item, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    counts
}
