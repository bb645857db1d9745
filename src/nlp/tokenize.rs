// Sentence and word tokenization using regex patterns.
// Word tokens follow Treebank conventions: punctuation is split off and English
// clitics become their own tokens ("don't" -> "do", "n't").
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Terminal punctuation, optional closing quotes/brackets, then whitespace or end of text
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?]+["'”’)\]]*(?:\s+|$)"#).unwrap()
});

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        (?i:mrs|mr|ms|dr|prof|st|jr|sr|vs|etc|inc|ltd|corp|co)\.   # abbreviations keep their period
        | (?:[A-Za-z]\.){2,}                                      # dotted acronyms, e.g. U.S.
        | \d+(?:[.,:]\d+)*\b                                      # numbers, decimals, times
        | \w+(?:[-'’]\w+)*                                        # words with inner hyphens/apostrophes
        | \.{3}                                                   # ellipsis
        | --
        | \S                                                      # any other symbol
        ",
    )
    .unwrap()
});

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "e.g", "i.e",
        "inc", "ltd", "co", "corp", "fig", "gen", "gov", "sen", "rep", "mt",
    ]
    .iter()
    .copied()
    .collect()
});

const CLITICS: [&str; 6] = ["s", "re", "ve", "ll", "d", "m"];

/// Split text into trimmed, non-empty sentences.
pub fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END.find_iter(text) {
        if !is_boundary(text, start, m.start(), m.end()) {
            continue;
        }
        push_sentence(&mut out, &text[start..m.end()]);
        start = m.end();
    }
    push_sentence(&mut out, &text[start..]);

    out
}

/// Split one sentence into word and punctuation tokens.
pub fn words(sentence: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for m in WORD_PATTERN.find_iter(sentence) {
        split_clitic(m.as_str(), &mut tokens);
    }
    tokens
}

/// A token counts as a word when it carries at least one alphanumeric character.
pub fn is_word(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

fn is_boundary(text: &str, start: usize, punct_start: usize, end: usize) -> bool {
    let punct = text[punct_start..end].trim_end();
    if punct.contains(['!', '?']) {
        return true;
    }
    let continues_lowercase = text[end..].chars().next().is_some_and(char::is_lowercase);

    // "I was thinking... maybe not."
    if punct.starts_with("..") {
        return !continues_lowercase;
    }

    let previous = text[start..punct_start]
        .split_whitespace()
        .last()
        .map(|w| w.trim_start_matches(|c: char| !c.is_alphanumeric()))
        .unwrap_or("");

    let is_initial = previous.chars().count() == 1 && previous.chars().all(char::is_alphabetic);
    if is_initial || ABBREVIATIONS.contains(previous.to_lowercase().as_str()) {
        return false;
    }
    // dotted tokens such as "p.m" or "U.S" end a sentence unless lowercase text follows
    if previous.contains('.') {
        return !continues_lowercase;
    }
    true
}

fn split_clitic(token: &str, tokens: &mut Vec<String>) {
    for negation in ["n't", "n’t"] {
        let Some(cut) = token.len().checked_sub(negation.len()) else {
            continue;
        };
        if cut > 0 && token.is_char_boundary(cut) && token[cut..].eq_ignore_ascii_case(negation) {
            tokens.push(token[..cut].to_string());
            tokens.push(token[cut..].to_string());
            return;
        }
    }

    if let Some(pos) = token.rfind(['\'', '’']) {
        let tail = token[pos..].trim_start_matches(['\'', '’']).to_lowercase();
        if pos > 0 && CLITICS.contains(&tail.as_str()) {
            tokens.push(token[..pos].to_string());
            tokens.push(token[pos..].to_string());
            return;
        }
    }

    tokens.push(token.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_basic() {
        let result = sentences("Hello world. This is a test.");
        assert_eq!(result, vec!["Hello world.", "This is a test."]);
    }

    #[test]
    fn test_sentences_empty() {
        assert!(sentences("").is_empty());
        assert!(sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_sentences_trailing_fragment() {
        let result = sentences("First one. Second one without a stop");
        assert_eq!(result, vec!["First one.", "Second one without a stop"]);
    }

    #[test]
    fn test_sentences_mixed_terminators() {
        let result = sentences("Really?! Yes. Wow!");
        assert_eq!(result, vec!["Really?!", "Yes.", "Wow!"]);
    }

    #[test]
    fn test_sentences_abbreviations() {
        let result = sentences("Mr. Smith went to Washington. He met Dr. Jones there.");
        assert_eq!(
            result,
            vec!["Mr. Smith went to Washington.", "He met Dr. Jones there."]
        );
    }

    #[test]
    fn test_sentences_lowercase_continuation() {
        let result = sentences("We left at 5 p.m. yesterday. It rained.");
        assert_eq!(result, vec!["We left at 5 p.m. yesterday.", "It rained."]);
    }

    #[test]
    fn test_sentences_lowercase_text() {
        assert_eq!(
            sentences("the cat sat. the dog ran."),
            vec!["the cat sat.", "the dog ran."]
        );
        assert_eq!(sentences("i went home. i slept well.").len(), 2);
    }

    #[test]
    fn test_sentences_ellipsis() {
        assert_eq!(
            sentences("I was thinking... maybe not."),
            vec!["I was thinking... maybe not."]
        );
        assert_eq!(
            sentences("Wait... Then it happened."),
            vec!["Wait...", "Then it happened."]
        );
    }

    #[test]
    fn test_sentences_dotted_acronym_at_end() {
        let result = sentences("She moved to the U.S. Then she studied law.");
        assert_eq!(result, vec!["She moved to the U.S.", "Then she studied law."]);
    }

    #[test]
    fn test_sentences_initials() {
        let result = sentences("J. R. Tolkien wrote books. They sold well.");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], "J. R. Tolkien wrote books.");
    }

    #[test]
    fn test_sentences_closing_quote() {
        let result = sentences("She said \"stop.\" Then she left.");
        assert_eq!(result, vec!["She said \"stop.\"", "Then she left."]);
    }

    #[test]
    fn test_words_punctuation_split() {
        assert_eq!(words("Hello, world!"), vec!["Hello", ",", "world", "!"]);
    }

    #[test]
    fn test_words_contractions() {
        assert_eq!(words("I don't know."), vec!["I", "do", "n't", "know", "."]);
        assert_eq!(words("It's here"), vec!["It", "'s", "here"]);
        assert_eq!(words("we'll see"), vec!["we", "'ll", "see"]);
    }

    #[test]
    fn test_words_numbers_and_acronyms() {
        assert_eq!(
            words("It costs 3.14 in the U.S. today..."),
            vec!["It", "costs", "3.14", "in", "the", "U.S.", "today", "..."]
        );
        assert_eq!(words("1,000 people"), vec!["1,000", "people"]);
    }

    #[test]
    fn test_words_hyphenated_and_abbreviation() {
        assert_eq!(words("Mr. Smith is well-known"), vec!["Mr.", "Smith", "is", "well-known"]);
    }

    #[test]
    fn test_words_alphanumeric() {
        assert_eq!(words("test123 hello"), vec!["test123", "hello"]);
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("hello"));
        assert!(is_word("n't"));
        assert!(is_word("42"));
        assert!(!is_word(","));
        assert!(!is_word("..."));
    }
}
