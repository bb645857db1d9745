// Named Entity Recognition by chunking proper-noun runs in tagged sentences.
// Each maximal run of NNP/NNPS tokens becomes one entity; gazetteers and name suffixes
// decide its label.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::pos::{PosTag, TaggedToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Organization,
    Gpe,
    Location,
    Facility,
}

impl EntityLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Organization => "ORGANIZATION",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Location => "LOCATION",
            EntityLabel::Facility => "FACILITY",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    /// Index of the sentence the entity was found in.
    pub sentence: usize,
    /// Token span within the sentence, end exclusive.
    pub start: usize,
    pub end: usize,
}

// Geo-political entities: countries, states, cities and continents
static GPE_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "United States", "USA", "US", "U.S.", "America", "UK", "U.K.", "United Kingdom",
        "Britain", "England", "Scotland", "Ireland", "France", "Germany", "Spain",
        "Italy", "Portugal", "Russia", "China", "Japan", "India", "Canada", "Mexico",
        "Brazil", "Argentina", "Australia", "Egypt", "Kenya", "Nigeria", "Europe",
        "Asia", "Africa", "New York", "California", "Texas", "Florida", "Hawaii",
        "London", "Paris", "Berlin", "Madrid", "Rome", "Tokyo", "Beijing", "Moscow",
        "Washington", "Chicago", "Los Angeles", "San Francisco", "Boston", "Seattle",
        "Miami", "Austin", "Denver", "Portland", "Atlanta", "Sydney", "Toronto",
    ]
    .iter()
    .copied()
    .collect()
});

static ORGANIZATION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Inc", "Inc.", "LLC", "Corp", "Corp.", "Corporation", "Ltd", "Ltd.", "Limited",
        "Company", "Co", "Co.", "Group", "Institute", "University", "College",
        "Association", "Agency", "Bank", "Foundation", "Department", "Council",
        "Committee", "Party", "Club", "Society", "Ministry", "Press", "Times",
    ]
    .iter()
    .copied()
    .collect()
});

static FACILITY_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Airport", "Bridge", "Station", "Tower", "Stadium", "Hospital", "Museum",
        "Center", "Centre", "Hall", "Palace", "Church", "Cathedral", "Library",
    ]
    .iter()
    .copied()
    .collect()
});

static LOCATION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "River", "Ocean", "Sea", "Lake", "Mountain", "Mountains", "Mount", "Valley",
        "Island", "Islands", "Desert", "Forest", "Bay", "Gulf", "Peninsula", "Park",
        "Street", "Avenue", "Road", "Canyon",
    ]
    .iter()
    .copied()
    .collect()
});

static HONORIFICS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Mr", "Mr.", "Mrs", "Mrs.", "Ms", "Ms.", "Dr", "Dr.", "Prof", "Prof.", "Sir",
        "Lady", "Lord", "President", "King", "Queen", "Senator", "General", "Captain",
    ]
    .iter()
    .copied()
    .collect()
});

static GIVEN_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "John", "Mary", "James", "Robert", "Michael", "William", "David", "Richard",
        "Joseph", "Thomas", "Charles", "Elizabeth", "Jennifer", "Linda", "Barbara",
        "Susan", "Sarah", "Karen", "Alice", "Bob", "Emma", "Olivia", "Peter", "Paul",
        "George", "Anna", "Maria", "Daniel", "Laura", "Barack", "Donald", "Joe",
    ]
    .iter()
    .copied()
    .collect()
});

/// Chunk one tagged sentence into named entities.
pub fn chunk(tagged: &[TaggedToken], sentence: usize) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut i = 0;

    while i < tagged.len() {
        if !is_proper(tagged[i].tag) {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i + 1;
        loop {
            if end < tagged.len() && is_proper(tagged[end].tag) {
                end += 1;
            } else if end + 1 < tagged.len()
                && matches!(tagged[end].word.as_str(), "of" | "&")
                && is_proper(tagged[end + 1].tag)
            {
                // "Bank of America", "Johnson & Johnson"
                end += 2;
            } else {
                break;
            }
        }

        if let Some(entity) = classify(&tagged[start..end], sentence, start) {
            entities.push(entity);
        }
        i = end;
    }

    entities
}

fn classify(run: &[TaggedToken], sentence: usize, offset: usize) -> Option<Entity> {
    let honorific = HONORIFICS.contains(run[0].word.as_str());
    let mut skip = usize::from(honorific);
    while run
        .get(skip)
        .is_some_and(|t| matches!(t.word.as_str(), "of" | "&"))
    {
        skip += 1;
    }
    let tokens = &run[skip..];
    if tokens.is_empty() {
        // A bare honorific ("President") is not a name on its own
        return None;
    }

    let words: Vec<&str> = tokens.iter().map(|t| t.word.as_str()).collect();
    let text = words.join(" ");
    let last = words[words.len() - 1];

    let label = if honorific {
        EntityLabel::Person
    } else if words.iter().any(|w| ORGANIZATION_WORDS.contains(w))
        || (is_acronym(&text) && !GPE_NAMES.contains(text.as_str()))
    {
        EntityLabel::Organization
    } else if FACILITY_WORDS.contains(last) {
        EntityLabel::Facility
    } else if LOCATION_WORDS.contains(last) || (LOCATION_WORDS.contains(words[0]) && words.len() > 1) {
        EntityLabel::Location
    } else if GPE_NAMES.contains(text.as_str()) {
        EntityLabel::Gpe
    } else if words.len() == 1 && tokens[0].tag == PosTag::NNPS && is_demonym(last) {
        EntityLabel::Gpe
    } else if GIVEN_NAMES.contains(words[0]) || words.len() > 1 {
        EntityLabel::Person
    } else if offset == 0 {
        // A lone capitalized word opening a sentence is usually not a name
        return None;
    } else {
        EntityLabel::Person
    };

    Some(Entity {
        text,
        label,
        sentence,
        start: offset + skip,
        end: offset + run.len(),
    })
}

fn is_proper(tag: PosTag) -> bool {
    matches!(tag, PosTag::NNP | PosTag::NNPS)
}

// Plural nationalities such as "Americans" or "Germans"
fn is_demonym(word: &str) -> bool {
    word.len() > 5 && word.ends_with("ans")
}

fn is_acronym(text: &str) -> bool {
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && !text.contains(' ') && letters.iter().all(|c| c.is_uppercase())
}
