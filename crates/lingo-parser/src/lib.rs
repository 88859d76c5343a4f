//! Lingo Parser - Sentence parser clients
//!
//! Every client implements [`lingo_core::SentenceParser`] and produces a
//! validated [`lingo_core::Document`]:
//! - [`RemoteParser`]: HTTP client for the dependency-parser service
//! - [`FixtureParser`]: canned documents keyed by their input text

pub mod fixture;
pub mod remote;

pub use fixture::FixtureParser;
pub use remote::RemoteParser;
