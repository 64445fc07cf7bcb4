//! Static word lists and template strings.
//!
//! Everything here is read-only after startup. The generator side is a set of
//! plain slices keyed by the placeholder they fill; the detector side is a set
//! of lazily built hash sets used for exact token membership.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::types::Category;

pub const CONSPIRACY_TITLES: &[&str] = &[
    "BREAKING: {subject} secretly {action} by {organization}",
    "Shocking discovery: {subject} linked to {conspiracy}",
    "Exclusive: {organization} covers up {scandal} involving {subject}",
];

pub const SENSATIONAL_TITLES: &[&str] = &[
    "You won't believe what {subject} just did!",
    "Incredible: {subject} reveals {surprising_fact}",
    "Amazing discovery: {subject} changes everything we know about {topic}",
];

pub const CLICKBAIT_TITLES: &[&str] = &[
    "This {subject} will shock you!",
    "The truth about {subject} that {organization} doesn't want you to know",
    "{number} reasons why {subject} is {adjective}",
];

/// Title templates for a category.
pub fn title_templates(category: Category) -> &'static [&'static str] {
    match category {
        Category::Conspiracy => CONSPIRACY_TITLES,
        Category::Sensational => SENSATIONAL_TITLES,
        Category::Clickbait => CLICKBAIT_TITLES,
    }
}

pub const SUBJECTS: &[&str] = &[
    "scientists",
    "politicians",
    "celebrities",
    "doctors",
    "experts",
    "researchers",
    "officials",
    "authorities",
    "insiders",
    "whistleblowers",
];

pub const ACTIONS: &[&str] = &[
    "discovered",
    "revealed",
    "uncovered",
    "exposed",
    "found",
    "announced",
    "confirmed",
    "admitted",
    "confessed",
    "disclosed",
];

pub const ORGANIZATIONS: &[&str] = &[
    "government",
    "big pharma",
    "mainstream media",
    "tech companies",
    "financial institutions",
    "health organizations",
    "research labs",
];

pub const CONSPIRACIES: &[&str] = &[
    "mind control",
    "population control",
    "secret experiments",
    "hidden technology",
    "suppressed cures",
    "fake news",
    "cover-ups",
];

pub const SCANDALS: &[&str] = &[
    "corruption",
    "fraud",
    "misconduct",
    "scandal",
    "controversy",
    "illegal activities",
    "secret deals",
    "hidden agendas",
];

pub const SURPRISING_FACTS: &[&str] = &[
    "the truth about vaccines",
    "secret government programs",
    "hidden health benefits",
    "suppressed research",
    "real causes of diseases",
];

pub const TOPICS: &[&str] = &[
    "health",
    "politics",
    "science",
    "technology",
    "medicine",
    "economics",
    "education",
    "environment",
    "society",
    "history",
];

pub const ADJECTIVES: &[&str] = &[
    "dangerous",
    "revolutionary",
    "controversial",
    "amazing",
    "shocking",
    "incredible",
    "unbelievable",
    "mind-blowing",
    "life-changing",
];

pub const NUMBERS: &[&str] = &["5", "7", "10", "13", "21", "50", "100"];

// Paragraph templates. `{title_lower}` is bound per article, everything else
// is drawn from the lists below.

pub const INTRO_TEMPLATES: &[&str] = &[
    "In a {adjective} revelation that has {emotion} the {community}, {title_lower}.",
    "Recent developments have {action_past} to light regarding {topic}, specifically {title_lower}.",
    "A {adjective} discovery has {emotion} experts and {community} alike: {title_lower}.",
];

pub const BODY_TEMPLATES: &[&str] = &[
    "According to {expert_type} {expert_name}, this {discovery} could {impact}.",
    "Research conducted by {institution} suggests that {finding}.",
    "Multiple sources have {action} that {claim}.",
    "This {development} has {reaction} among {stakeholders}.",
];

pub const CONCLUSION_TEMPLATES: &[&str] = &[
    "As {topic} continues to {evolve}, this {finding} may {future_impact}.",
    "The implications of this {discovery} are {adjective}, and {next_steps}.",
    "This {revelation} raises important questions about {broader_issue}.",
];

pub const EMOTIONS: &[&str] = &["shocked", "surprised", "amazed", "concerned", "excited"];

pub const COMMUNITIES: &[&str] = &[
    "scientific community",
    "medical world",
    "political sphere",
    "general public",
];

pub const ACTIONS_PAST: &[&str] = &["come", "brought", "revealed", "exposed"];

pub const EXPERT_TYPES: &[&str] = &["leading", "renowned", "distinguished", "prominent"];

pub const EXPERT_NAMES: &[&str] = &["Dr. Johnson", "Prof. Williams", "Dr. Brown", "Prof. Davis"];

pub const DISCOVERIES: &[&str] = &["finding", "discovery", "revelation", "breakthrough"];

pub const IMPACTS: &[&str] = &[
    "change everything",
    "revolutionize the field",
    "alter our understanding",
];

pub const INSTITUTIONS: &[&str] = &["MIT", "Stanford", "Harvard", "Oxford", "Cambridge"];

pub const FINDINGS: &[&str] = &[
    "the implications are significant",
    "further study is needed",
    "this warrants investigation",
];

pub const CORROBORATIONS: &[&str] = &["confirmed", "verified", "validated", "corroborated"];

pub const CLAIMS: &[&str] = &[
    "the evidence is compelling",
    "the data supports this",
    "the results are consistent",
];

pub const DEVELOPMENTS: &[&str] = &["finding", "discovery", "revelation", "announcement"];

pub const REACTIONS: &[&str] = &[
    "caused concern",
    "sparked debate",
    "generated interest",
    "raised questions",
];

pub const STAKEHOLDERS: &[&str] = &["experts", "researchers", "authorities", "the public"];

pub const EVOLUTIONS: &[&str] = &["evolve", "develop", "progress", "advance"];

pub const FUTURE_IMPACTS: &[&str] = &[
    "shape future research",
    "influence policy decisions",
    "change public perception",
];

pub const NEXT_STEPS: &[&str] = &[
    "further investigation is warranted",
    "additional studies are needed",
    "more research is required",
];

pub const BROADER_ISSUES: &[&str] = &[
    "scientific integrity",
    "public trust",
    "research methodology",
    "transparency",
];

// Metadata.

pub const BYLINE_TEMPLATE: &str = "{first_name} {last_name}";

pub const SOURCE_TEMPLATE: &str = "{source}";

pub const FIRST_NAMES: &[&str] = &[
    "Dr.", "Prof.", "John", "Sarah", "Michael", "Emma", "David", "Lisa",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
];

pub const SOURCES: &[&str] = &[
    "TruthSeeker News",
    "Real Facts Daily",
    "Independent Investigators",
    "Alternative Media Network",
    "Conspiracy Chronicles",
    "Hidden Truth Report",
    "Real News Network",
    "Truth Uncovered",
    "Independent Research Institute",
];

// Detector vocabularies. Fake indicators are matched against the uppercased
// token, everything else against the lowercased token.

fn word_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

pub static FAKE_INDICATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "BREAKING",
        "SHOCKING",
        "INCREDIBLE",
        "AMAZING",
        "UNBELIEVABLE",
        "SECRET",
        "HIDDEN",
        "COVER-UP",
        "CONSPIRACY",
        "WHISTLEBLOWER",
        "EXCLUSIVE",
        "REVEALED",
        "EXPOSED",
        "UNCOVERED",
        "CONFIRMED",
        "ADMITTED",
        "CONFESSED",
        "DISCLOSED",
        "LEAKED",
        "INSIDER",
    ])
});

pub static CREDIBILITY_INDICATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "study",
        "research",
        "peer-reviewed",
        "journal",
        "university",
        "scientist",
        "expert",
        "official",
        "government",
        "verified",
        "evidence",
        "data",
        "statistics",
        "analysis",
        "report",
    ])
});

pub static EMOTIONAL_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "outrageous",
        "scandalous",
        "controversial",
        "shocking",
        "amazing",
        "incredible",
        "unbelievable",
        "mind-blowing",
        "life-changing",
        "revolutionary",
        "dangerous",
        "terrifying",
        "wonderful",
    ])
});

// "just in" can never equal a single whitespace-delimited token; it stays for
// parity with the published vocabulary.
pub static URGENCY_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "urgent",
        "immediate",
        "now",
        "today",
        "breaking",
        "live",
        "developing",
        "just in",
        "latest",
        "update",
        "alert",
    ])
});

pub static EXAGGERATION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "everyone",
        "nobody",
        "always",
        "never",
        "completely",
        "totally",
        "absolutely",
        "definitely",
        "certainly",
        "obviously",
        "clearly",
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_titles() {
        for category in Category::ALL {
            assert_eq!(title_templates(category).len(), 3);
        }
    }

    #[test]
    fn test_paragraph_template_counts() {
        assert_eq!(INTRO_TEMPLATES.len(), 3);
        assert_eq!(BODY_TEMPLATES.len(), 4);
        assert_eq!(CONCLUSION_TEMPLATES.len(), 3);
    }

    #[test]
    fn test_detector_vocabularies_are_cased_for_matching() {
        assert!(FAKE_INDICATORS.iter().all(|w| *w == w.to_uppercase()));
        for set in [
            &*CREDIBILITY_INDICATORS,
            &*EMOTIONAL_WORDS,
            &*URGENCY_WORDS,
            &*EXAGGERATION_WORDS,
        ] {
            assert!(set.iter().all(|w| *w == w.to_lowercase()));
        }
    }
}
