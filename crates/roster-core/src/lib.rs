//! Core domain model for roster.
//!
//! This crate defines the output records of the two analysis engines
//! (`ParsedTitle`, `CommentAnalysis`), the fixed label vocabularies they
//! emit, the error type, and the configurable keyword/pattern tables
//! (`TitleVocabulary`, `SentimentLexicon`) the engines are built from.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod vocab;

pub use error::{Error, Result};
pub use model::comment::{Aspect, CommentAnalysis, Intent, Sentiment};
pub use model::title::{ParsedTitle, VersionType};
pub use vocab::{SentimentLexicon, TitleVocabulary, Vocabulary};
