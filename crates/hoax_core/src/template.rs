//! Placeholder templates and the slot filler that instantiates them.
//!
//! A template is parsed once into literal text and `{name}` slots. A
//! [`SlotFiller`] knows which lexicon list feeds each slot name, and a
//! [`Grammar`] pairs a set of alternative templates with the filler that can
//! resolve all of them. Grammars are validated when they are built, so filling
//! one later can only fail if a caller forgets a bound value.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Error, Result};

/// Uniform choice from a slice. Every random selection in the crate goes
/// through here.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(&'static str),
    Slot(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: &'static str,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &'static str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find(['{', '}']) {
            if rest[open..].starts_with('}') {
                return Err(Error::Template(format!("unmatched '}}' in {:?}", source)));
            }
            if open > 0 {
                segments.push(Segment::Text(&rest[..open]));
            }

            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| Error::Template(format!("unclosed '{{' in {:?}", source)))?;
            let name = &after[..close];
            if name.is_empty() || name.contains('{') {
                return Err(Error::Template(format!(
                    "bad placeholder {:?} in {:?}",
                    name, source
                )));
            }
            segments.push(Segment::Slot(name));
            rest = &after[close + 1..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest));
        }

        Ok(Self { source, segments })
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Placeholder names in order of appearance, repeats included.
    pub fn slots(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(name) => Some(*name),
            Segment::Text(_) => None,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlotFiller {
    lexicons: HashMap<&'static str, &'static [&'static str]>,
}

impl SlotFiller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: &'static str, words: &'static [&'static str]) -> Self {
        self.lexicons.insert(slot, words);
        self
    }

    /// Checks that every slot in `template` is either in `bound` or backed by a
    /// non-empty lexicon.
    pub fn validate(&self, template: &Template, bound: &[&str]) -> Result<()> {
        for slot in template.slots() {
            if bound.contains(&slot) {
                continue;
            }
            match self.lexicons.get(slot) {
                None => {
                    return Err(Error::UnknownSlot {
                        template: template.source().to_string(),
                        slot: slot.to_string(),
                    })
                }
                Some(words) if words.is_empty() => {
                    return Err(Error::EmptyLexicon(slot.to_string()))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Instantiates `template`. Bound values win over lexicon draws; every
    /// other slot gets an independent uniform draw.
    pub fn fill<R: Rng>(
        &self,
        template: &Template,
        bindings: &[(&str, &str)],
        rng: &mut R,
    ) -> Result<String> {
        let mut out = String::with_capacity(template.source().len() * 2);

        for segment in &template.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(name) => {
                    if let Some((_, value)) = bindings.iter().find(|(key, _)| key == name) {
                        out.push_str(value);
                        continue;
                    }
                    let words = self.lexicons.get(name).ok_or_else(|| Error::UnknownSlot {
                        template: template.source().to_string(),
                        slot: name.to_string(),
                    })?;
                    let word =
                        pick(rng, *words).ok_or_else(|| Error::EmptyLexicon(name.to_string()))?;
                    out.push_str(word);
                }
            }
        }

        Ok(out)
    }
}

/// A set of interchangeable templates plus the filler that resolves them.
#[derive(Debug, Clone)]
pub struct Grammar {
    templates: Vec<Template>,
    filler: SlotFiller,
}

impl Grammar {
    /// Parses and validates every template. `bound` names the slots the caller
    /// promises to supply at fill time.
    pub fn build(sources: &[&'static str], filler: SlotFiller, bound: &[&str]) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::Template("grammar has no templates".to_string()));
        }

        let templates = sources
            .iter()
            .map(|&source| -> Result<Template> {
                let template = Template::parse(source)?;
                filler.validate(&template, bound)?;
                Ok(template)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { templates, filler })
    }

    /// Picks one template uniformly and fills it.
    pub fn render<R: Rng>(&self, bindings: &[(&str, &str)], rng: &mut R) -> Result<String> {
        let template = pick(rng, &self.templates)
            .ok_or_else(|| Error::Template("grammar has no templates".to_string()))?;
        self.filler.fill(template, bindings, rng)
    }
}
