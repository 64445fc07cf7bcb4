use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Malformed template: {0}")]
    Template(String),

    #[error("Template {template:?} references unknown slot {{{slot}}}")]
    UnknownSlot { template: String, slot: String },

    #[error("Lexicon for slot {{{0}}} is empty")]
    EmptyLexicon(String),
}

pub type Result<T> = std::result::Result<T, Error>;
