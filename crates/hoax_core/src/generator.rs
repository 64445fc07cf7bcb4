use std::collections::HashMap;
use std::fmt;

use chrono::{Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::template::{pick, Grammar, SlotFiller};
use crate::types::{Article, Category, CategoryRequest, GENERATED_CONFIDENCE};
use crate::{Error, Result};

pub const MIN_BODY_PARAGRAPHS: usize = 2;
pub const MAX_BODY_PARAGRAPHS: usize = 4;
pub const MAX_ARTICLE_AGE_DAYS: i64 = 30;

const TITLE_LOWER: &str = "title_lower";

/// Builds synthetic articles from the static lexicon.
///
/// Holds no random state of its own; every call takes the random source it
/// should draw from.
pub struct Generator {
    titles: HashMap<Category, Grammar>,
    intro: Grammar,
    body: Grammar,
    conclusion: Grammar,
    byline: Grammar,
    source: Grammar,
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("categories", &self.titles.len())
            .finish()
    }
}

impl Generator {
    /// Parses every template and checks it against its slot lexicons.
    pub fn new() -> Result<Self> {
        use crate::lexicon::*;

        let title_slots = SlotFiller::new()
            .with("subject", SUBJECTS)
            .with("action", ACTIONS)
            .with("organization", ORGANIZATIONS)
            .with("conspiracy", CONSPIRACIES)
            .with("scandal", SCANDALS)
            .with("surprising_fact", SURPRISING_FACTS)
            .with("topic", TOPICS)
            .with("number", NUMBERS)
            .with("adjective", ADJECTIVES);

        let titles = Category::ALL
            .into_iter()
            .map(|category| -> Result<(Category, Grammar)> {
                let grammar = Grammar::build(title_templates(category), title_slots.clone(), &[])?;
                Ok((category, grammar))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        let intro = Grammar::build(
            INTRO_TEMPLATES,
            SlotFiller::new()
                .with("adjective", ADJECTIVES)
                .with("emotion", EMOTIONS)
                .with("community", COMMUNITIES)
                .with("action_past", ACTIONS_PAST)
                .with("topic", TOPICS),
            &[TITLE_LOWER],
        )?;

        let body = Grammar::build(
            BODY_TEMPLATES,
            SlotFiller::new()
                .with("expert_type", EXPERT_TYPES)
                .with("expert_name", EXPERT_NAMES)
                .with("discovery", DISCOVERIES)
                .with("impact", IMPACTS)
                .with("institution", INSTITUTIONS)
                .with("finding", FINDINGS)
                .with("action", CORROBORATIONS)
                .with("claim", CLAIMS)
                .with("development", DEVELOPMENTS)
                .with("reaction", REACTIONS)
                .with("stakeholders", STAKEHOLDERS),
            &[],
        )?;

        // finding/discovery/revelation all draw discovery nouns here.
        let conclusion = Grammar::build(
            CONCLUSION_TEMPLATES,
            SlotFiller::new()
                .with("topic", TOPICS)
                .with("evolve", EVOLUTIONS)
                .with("finding", DISCOVERIES)
                .with("future_impact", FUTURE_IMPACTS)
                .with("discovery", DISCOVERIES)
                .with("adjective", ADJECTIVES)
                .with("next_steps", NEXT_STEPS)
                .with("revelation", DISCOVERIES)
                .with("broader_issue", BROADER_ISSUES),
            &[],
        )?;

        let byline = Grammar::build(
            &[BYLINE_TEMPLATE],
            SlotFiller::new()
                .with("first_name", FIRST_NAMES)
                .with("last_name", LAST_NAMES),
            &[],
        )?;

        let source = Grammar::build(
            &[SOURCE_TEMPLATE],
            SlotFiller::new().with("source", SOURCES),
            &[],
        )?;

        debug!("Generator initialized with {} categories", titles.len());

        Ok(Self {
            titles,
            intro,
            body,
            conclusion,
            byline,
            source,
        })
    }

    /// Generates an article with a fresh entropy-seeded random source.
    pub fn generate_article(&self, category: &str) -> Result<Article> {
        let mut rng = StdRng::from_entropy();
        self.generate(category, &mut rng)
    }

    /// Generates an article dated relative to today's local date.
    ///
    /// `category` is one of the category names or `"random"`; anything else
    /// is rejected with [`Error::InvalidCategory`].
    pub fn generate<R: Rng>(&self, category: &str, rng: &mut R) -> Result<Article> {
        let request: CategoryRequest = category.parse()?;
        self.generate_on(request, Local::now().date_naive(), rng)
    }

    pub fn generate_on<R: Rng>(
        &self,
        request: CategoryRequest,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Article> {
        let category = match request {
            CategoryRequest::Random => *pick(rng, &Category::ALL)
                .ok_or_else(|| Error::InvalidCategory(CategoryRequest::RANDOM.to_string()))?,
            CategoryRequest::Specific(category) => category,
        };

        let title = self
            .titles
            .get(&category)
            .ok_or_else(|| Error::InvalidCategory(category.to_string()))?
            .render(&[], rng)?;
        let content = self.paragraphs(&title, rng)?.join(" ");

        let author = self.byline.render(&[], rng)?;
        let source = self.source.render(&[], rng)?;
        let age = rng.gen_range(1..=MAX_ARTICLE_AGE_DAYS);
        let publish_date = today - Duration::days(age);

        info!(
            "📰 Generated {} article: {}...",
            category,
            title.chars().take(50).collect::<String>()
        );

        Ok(Article {
            title,
            content,
            author,
            source,
            publish_date,
            category,
            is_fake: true,
            confidence_score: GENERATED_CONFIDENCE,
        })
    }

    /// Intro, 2..=4 body paragraphs, conclusion.
    fn paragraphs<R: Rng>(&self, title: &str, rng: &mut R) -> Result<Vec<String>> {
        let title_lower = title.to_lowercase();
        let body_count = rng.gen_range(MIN_BODY_PARAGRAPHS..=MAX_BODY_PARAGRAPHS);

        let mut paragraphs = Vec::with_capacity(body_count + 2);
        paragraphs.push(self.intro.render(&[(TITLE_LOWER, title_lower.as_str())], rng)?);
        for _ in 0..body_count {
            paragraphs.push(self.body.render(&[], rng)?);
        }
        paragraphs.push(self.conclusion.render(&[], rng)?);

        Ok(paragraphs)
    }
}
