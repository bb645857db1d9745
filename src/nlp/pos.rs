// Part-of-speech tagging using a lexicon and suffix rules.
// Tags follow the Penn Treebank tag set. A first pass assigns each token a tag from
// the lexicon, punctuation/number rules, capitalization and word endings; a second
// pass fixes common ambiguities from the neighbouring tags.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    CC,
    CD,
    DT,
    EX,
    IN,
    JJ,
    JJR,
    JJS,
    MD,
    NN,
    NNS,
    NNP,
    NNPS,
    PDT,
    POS,
    PRP,
    #[serde(rename = "PRP$")]
    PrpPossessive,
    RB,
    RBR,
    RBS,
    RP,
    SYM,
    TO,
    UH,
    VB,
    VBD,
    VBG,
    VBN,
    VBP,
    VBZ,
    WDT,
    WP,
    #[serde(rename = "WP$")]
    WpPossessive,
    WRB,
    #[serde(rename = ".")]
    Period,
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = ":")]
    Colon,
    #[serde(rename = "``")]
    OpenQuote,
    #[serde(rename = "''")]
    CloseQuote,
    #[serde(rename = "(")]
    OpenParen,
    #[serde(rename = ")")]
    CloseParen,
    #[serde(rename = "$")]
    Dollar,
    #[serde(rename = "#")]
    Hash,
}

impl PosTag {
    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::CC => "CC",
            PosTag::CD => "CD",
            PosTag::DT => "DT",
            PosTag::EX => "EX",
            PosTag::IN => "IN",
            PosTag::JJ => "JJ",
            PosTag::JJR => "JJR",
            PosTag::JJS => "JJS",
            PosTag::MD => "MD",
            PosTag::NN => "NN",
            PosTag::NNS => "NNS",
            PosTag::NNP => "NNP",
            PosTag::NNPS => "NNPS",
            PosTag::PDT => "PDT",
            PosTag::POS => "POS",
            PosTag::PRP => "PRP",
            PosTag::PrpPossessive => "PRP$",
            PosTag::RB => "RB",
            PosTag::RBR => "RBR",
            PosTag::RBS => "RBS",
            PosTag::RP => "RP",
            PosTag::SYM => "SYM",
            PosTag::TO => "TO",
            PosTag::UH => "UH",
            PosTag::VB => "VB",
            PosTag::VBD => "VBD",
            PosTag::VBG => "VBG",
            PosTag::VBN => "VBN",
            PosTag::VBP => "VBP",
            PosTag::VBZ => "VBZ",
            PosTag::WDT => "WDT",
            PosTag::WP => "WP",
            PosTag::WpPossessive => "WP$",
            PosTag::WRB => "WRB",
            PosTag::Period => ".",
            PosTag::Comma => ",",
            PosTag::Colon => ":",
            PosTag::OpenQuote => "``",
            PosTag::CloseQuote => "''",
            PosTag::OpenParen => "(",
            PosTag::CloseParen => ")",
            PosTag::Dollar => "$",
            PosTag::Hash => "#",
        }
    }

    pub fn is_noun(self) -> bool {
        matches!(self, PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::NNPS)
    }

    pub fn is_verb(self) -> bool {
        matches!(
            self,
            PosTag::VB | PosTag::VBD | PosTag::VBG | PosTag::VBN | PosTag::VBP | PosTag::VBZ
        )
    }

    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            PosTag::Period
                | PosTag::Comma
                | PosTag::Colon
                | PosTag::OpenQuote
                | PosTag::CloseQuote
                | PosTag::OpenParen
                | PosTag::CloseParen
        )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: PosTag,
}

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(?:[.,:]\d+)*$").unwrap());

static LEXICON: Lazy<HashMap<&'static str, PosTag>> = Lazy::new(|| {
    let groups: &[(PosTag, &[&str])] = &[
        (PosTag::DT, &[
            "the", "a", "an", "this", "that", "these", "those", "every", "each", "some",
            "any", "no", "another", "either", "neither",
        ]),
        (PosTag::PDT, &["all", "both", "half"]),
        (PosTag::IN, &[
            "of", "in", "on", "at", "by", "for", "with", "about", "against", "between",
            "into", "through", "during", "before", "after", "above", "below", "from",
            "over", "under", "since", "until", "while", "although", "because", "if",
            "than", "as", "like", "without", "within", "upon", "among", "across",
            "toward", "towards", "behind", "beyond", "near", "per", "via", "whether",
            "though", "unless", "around", "despite", "throughout", "onto",
        ]),
        (PosTag::CC, &["and", "or", "but", "nor", "yet", "plus"]),
        (PosTag::PRP, &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
            "them", "myself", "yourself", "himself", "herself", "itself", "ourselves",
            "themselves",
        ]),
        (PosTag::PrpPossessive, &["my", "your", "his", "its", "our", "their"]),
        (PosTag::WP, &["who", "whom", "what", "whoever"]),
        (PosTag::WpPossessive, &["whose"]),
        (PosTag::WDT, &["which", "whatever", "whichever"]),
        (PosTag::WRB, &["when", "where", "why", "how"]),
        (PosTag::MD, &[
            "can", "could", "may", "might", "must", "shall", "should", "will", "would",
            "ought", "'ll", "'d", "ca", "wo",
        ]),
        (PosTag::TO, &["to"]),
        (PosTag::VB, &["be"]),
        (PosTag::VBZ, &["is", "has", "does"]),
        (PosTag::VBP, &["am", "are", "have", "do", "'re", "'ve", "'m"]),
        (PosTag::VBD, &[
            "was", "were", "had", "did", "went", "came", "saw", "made", "took", "got",
            "gave", "said", "told", "knew", "thought", "found", "felt", "became",
            "began", "ran", "wrote", "brought", "bought", "held", "stood", "met", "sat",
            "kept", "lost", "spoke", "grew", "fell", "drove", "ate", "won",
        ]),
        (PosTag::VBN, &[
            "been", "done", "gone", "seen", "taken", "given", "known", "written",
            "begun", "eaten", "born", "spoken", "grown", "fallen", "driven", "chosen",
        ]),
        (PosTag::VBG, &["being", "having", "doing"]),
        (PosTag::RB, &[
            "not", "n't", "very", "also", "often", "always", "never", "just", "only",
            "really", "too", "quite", "rather", "almost", "already", "still", "even",
            "again", "soon", "now", "then", "here", "there", "ever", "perhaps",
            "however", "sometimes", "usually", "together", "away", "else", "instead",
        ]),
        (PosTag::RBR, &["more", "less"]),
        (PosTag::RBS, &["most", "least"]),
        (PosTag::RP, &["up", "down", "out", "off"]),
        (PosTag::UH, &["oh", "yes", "hello", "hi", "wow", "hey", "ouch", "okay"]),
        (PosTag::JJ, &[
            "good", "new", "first", "last", "long", "great", "little", "own", "other",
            "old", "right", "big", "high", "different", "small", "large", "next",
            "early", "young", "important", "few", "public", "bad", "same", "able",
            "many", "much", "several", "such", "whole", "free", "true", "full", "sure",
            "real", "late", "hard", "strong", "possible", "clear", "recent", "happy",
        ]),
        (PosTag::JJR, &["better", "worse", "larger", "smaller", "greater", "higher", "lower", "older"]),
        (PosTag::JJS, &["best", "worst", "largest", "smallest", "greatest", "highest", "oldest"]),
        (PosTag::NN, &[
            "time", "year", "day", "way", "thing", "man", "woman", "world", "life",
            "hand", "part", "child", "eye", "place", "week", "case", "point", "number",
            "group", "problem", "fact", "today", "tomorrow", "yesterday", "people",
        ]),
        (PosTag::POS, &["'s", "’s"]),
    ];

    let mut lexicon = HashMap::new();
    for (tag, words) in groups {
        for word in words.iter() {
            lexicon.insert(*word, *tag);
        }
    }
    lexicon
});

// Base verb forms that suffix rules would otherwise miss
static BASE_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "go", "get", "make", "take", "see", "know", "think", "come", "give", "find",
        "say", "tell", "become", "leave", "feel", "bring", "begin", "keep", "hold",
        "write", "stand", "hear", "let", "mean", "set", "meet", "run", "pay", "sit",
        "speak", "lead", "read", "grow", "lose", "fall", "send", "build", "understand",
        "draw", "break", "spend", "cut", "rise", "drive", "buy", "wear", "choose",
        "want", "look", "use", "work", "call", "try", "ask", "need", "seem", "help",
        "show", "play", "move", "live", "believe", "happen", "eat", "win", "love",
    ]
    .iter()
    .copied()
    .collect()
});

static NUMBER_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
        "ten", "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred",
        "thousand", "million", "billion",
    ]
    .iter()
    .copied()
    .collect()
});

const NOUN_SUFFIXES: [&str; 11] = [
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ism", "ship", "hood", "ist",
];
const ADJECTIVE_SUFFIXES: [&str; 8] = ["ous", "ful", "able", "ible", "ive", "less", "ish", "ical"];

/// Tag one sentence worth of word tokens.
pub fn tag(words: &[String]) -> Vec<TaggedToken> {
    let mut quote_open = false;
    let mut tags: Vec<PosTag> = Vec::with_capacity(words.len());

    for (i, word) in words.iter().enumerate() {
        let tag = match word.as_str() {
            "\"" => {
                quote_open = !quote_open;
                if quote_open {
                    PosTag::OpenQuote
                } else {
                    PosTag::CloseQuote
                }
            }
            other => initial_tag(other, i == 0),
        };
        tags.push(tag);
    }

    apply_context(words, &mut tags);

    words
        .iter()
        .zip(tags)
        .map(|(word, tag)| TaggedToken {
            word: word.clone(),
            tag,
        })
        .collect()
}

fn initial_tag(word: &str, sentence_start: bool) -> PosTag {
    if let Some(tag) = punctuation_tag(word) {
        return tag;
    }

    let lower = word.to_lowercase();
    if NUMBER_PATTERN.is_match(word) || NUMBER_WORDS.contains(lower.as_str()) {
        return PosTag::CD;
    }

    let capitalized = word.chars().next().is_some_and(char::is_uppercase);
    let known = LEXICON.get(lower.as_str()).copied();

    if capitalized && !sentence_start {
        // "I" and capitalized function words mid-sentence keep their lexicon tag
        if let Some(tag) = known.filter(|t| !t.is_noun() && *t != PosTag::JJ) {
            return tag;
        }
        // "Americans", but not "Texas" or "Jones"
        let plural = suffix_tag(&lower) == Some(PosTag::NNS)
            && !lower.ends_with("as")
            && !lower.ends_with("es");
        return if plural { PosTag::NNPS } else { PosTag::NNP };
    }
    if let Some(tag) = known {
        return tag;
    }
    if BASE_VERBS.contains(lower.as_str()) {
        return PosTag::VB;
    }

    let suffix_tag = suffix_tag(&lower);
    if capitalized && suffix_tag.map_or(true, PosTag::is_noun) {
        return PosTag::NNP;
    }
    suffix_tag.unwrap_or(PosTag::NN)
}

fn punctuation_tag(word: &str) -> Option<PosTag> {
    let tag = match word {
        "." | "!" | "?" => PosTag::Period,
        "," => PosTag::Comma,
        ":" | ";" | "..." | "--" | "-" | "…" => PosTag::Colon,
        "(" | "[" | "{" => PosTag::OpenParen,
        ")" | "]" | "}" => PosTag::CloseParen,
        "“" | "``" | "‘" => PosTag::OpenQuote,
        "”" | "''" | "'" | "’" => PosTag::CloseQuote,
        "$" | "€" | "£" | "¥" => PosTag::Dollar,
        "#" => PosTag::Hash,
        _ if !super::tokenize::is_word(word) => PosTag::SYM,
        _ => return None,
    };
    Some(tag)
}

fn suffix_tag(lower: &str) -> Option<PosTag> {
    let len = lower.chars().count();

    if lower.contains('-') && len > 3 {
        return Some(PosTag::JJ);
    }
    if len > 4 && lower.ends_with("ing") {
        return Some(PosTag::VBG);
    }
    if len > 3 && lower.ends_with("ed") {
        return Some(PosTag::VBD);
    }
    if len > 4 && lower.ends_with("ly") {
        return Some(PosTag::RB);
    }
    if len > 4 && NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some(PosTag::NN);
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some(PosTag::JJ);
    }
    if len > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return Some(PosTag::NNS);
    }
    None
}

fn is_be_or_have(lower: &str) -> bool {
    matches!(
        lower,
        "be" | "is" | "am" | "are" | "was" | "were" | "been" | "being" | "'s" | "'re" | "'m"
            | "have" | "has" | "had" | "having" | "'ve"
    )
}

fn apply_context(words: &[String], tags: &mut [PosTag]) {
    for i in 0..tags.len() {
        let lower = words[i].to_lowercase();
        let prev = if i > 0 { Some(tags[i - 1]) } else { None };
        let prev_word = if i > 0 { words[i - 1].to_lowercase() } else { String::new() };
        let next = tags.get(i + 1).copied();

        let current = tags[i];
        match current {
            // "there is" / "there are"
            PosTag::RB if lower == "there" => {
                if words.get(i + 1).is_some_and(|w| is_be_or_have(&w.to_lowercase())) {
                    tags[i] = PosTag::EX;
                }
            }
            PosTag::VB => {
                tags[i] = match prev {
                    Some(PosTag::TO) | Some(PosTag::MD) => PosTag::VB,
                    Some(PosTag::DT) | Some(PosTag::JJ) | Some(PosTag::PrpPossessive) => PosTag::NN,
                    Some(PosTag::PRP) if !matches!(prev_word.as_str(), "he" | "she" | "it") => PosTag::VBP,
                    Some(PosTag::NNS) => PosTag::VBP,
                    _ => PosTag::VB,
                };
            }
            PosTag::VBD => {
                // "has finished", "was taken"
                if i > 0 && is_be_or_have(&prev_word) {
                    tags[i] = PosTag::VBN;
                } else if matches!(prev, Some(PosTag::DT)) {
                    tags[i] = PosTag::JJ;
                }
            }
            PosTag::NNS => {
                let stem = lower.strip_suffix("es").filter(|s| BASE_VERBS.contains(s));
                let stem = stem.or_else(|| lower.strip_suffix('s').filter(|s| BASE_VERBS.contains(s)));
                let third_person = matches!(prev, Some(PosTag::NN) | Some(PosTag::NNP))
                    || matches!(prev_word.as_str(), "he" | "she" | "it");
                if stem.is_some() && third_person {
                    tags[i] = PosTag::VBZ;
                }
            }
            PosTag::NN if matches!(prev, Some(PosTag::TO) | Some(PosTag::MD)) => {
                if BASE_VERBS.contains(lower.as_str()) {
                    tags[i] = PosTag::VB;
                }
            }
            PosTag::POS => {
                // "it's", "he's" contract "is"
                if matches!(prev, Some(PosTag::PRP) | Some(PosTag::EX) | Some(PosTag::WP)) {
                    tags[i] = PosTag::VBZ;
                }
            }
            PosTag::DT if lower == "that" => {
                if next.is_some_and(|t| matches!(t, PosTag::PRP | PosTag::NNP))
                    && prev.is_some_and(PosTag::is_verb)
                {
                    tags[i] = PosTag::IN;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_of(sentence: &[&str]) -> Vec<&'static str> {
        let words: Vec<String> = sentence.iter().map(|w| w.to_string()).collect();
        tag(&words).into_iter().map(|t| t.tag.as_str()).collect()
    }

    #[test]
    fn test_tag_simple_sentence() {
        assert_eq!(
            tags_of(&["The", "quick", "fox", "jumped", "over", "the", "lazy", "dog", "."]),
            vec!["DT", "NN", "NN", "VBD", "IN", "DT", "NN", "NN", "."]
        );
    }

    #[test]
    fn test_tag_proper_nouns() {
        assert_eq!(
            tags_of(&["John", "lives", "in", "Paris", "."]),
            vec!["NNP", "VBZ", "IN", "NNP", "."]
        );
    }

    #[test]
    fn test_tag_plural_proper_nouns() {
        assert_eq!(
            tags_of(&["We", "met", "the", "Americans", "in", "Texas", "."])[3..6],
            ["NNPS", "IN", "NNP"]
        );
        assert_eq!(tags_of(&["I", "saw", "Jones"])[2], "NNP");
    }

    #[test]
    fn test_tag_sentence_initial_function_word() {
        let tags = tags_of(&["They", "are", "happy"]);
        assert_eq!(tags, vec!["PRP", "VBP", "JJ"]);
    }

    #[test]
    fn test_tag_modal_and_infinitive() {
        assert_eq!(tags_of(&["We", "will", "go"]), vec!["PRP", "MD", "VB"]);
        assert_eq!(tags_of(&["I", "want", "to", "read"]), vec!["PRP", "VBP", "TO", "VB"]);
    }

    #[test]
    fn test_tag_numbers() {
        assert_eq!(tags_of(&["3.14", "and", "three"]), vec!["CD", "CC", "CD"]);
    }

    #[test]
    fn test_tag_contractions() {
        assert_eq!(tags_of(&["I", "do", "n't", "know"]), vec!["PRP", "VBP", "RB", "VB"]);
        assert_eq!(tags_of(&["It", "'s", "raining"]), vec!["PRP", "VBZ", "VBG"]);
    }

    #[test]
    fn test_tag_possessive() {
        assert_eq!(tags_of(&["Mary", "'s", "book"]), vec!["NNP", "POS", "NN"]);
    }

    #[test]
    fn test_tag_existential_there() {
        assert_eq!(tags_of(&["There", "is", "hope"]), vec!["EX", "VBZ", "NN"]);
    }

    #[test]
    fn test_tag_passive_participle() {
        assert_eq!(tags_of(&["it", "was", "finished"]), vec!["PRP", "VBD", "VBN"]);
    }

    #[test]
    fn test_tag_quotes_toggle() {
        assert_eq!(tags_of(&["\"", "hi", "\""]), vec!["``", "UH", "''"]);
    }

    #[test]
    fn test_tag_suffixes() {
        assert_eq!(
            tags_of(&["quickly", "running", "happiness", "dangerous", "cats"]),
            vec!["RB", "VBG", "NN", "JJ", "NNS"]
        );
    }

    #[test]
    fn test_tag_empty() {
        assert!(tag(&[]).is_empty());
    }

    #[test]
    fn test_pos_tag_serializes_as_treebank_label() {
        let json = serde_json::to_string(&PosTag::PrpPossessive).unwrap();
        assert_eq!(json, "\"PRP$\"");
        assert_eq!(PosTag::Period.to_string(), ".");
    }
}
