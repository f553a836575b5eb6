//! Sample API responses and builders for unit tests.

#[cfg(test)]
mod chat_fixtures;
#[cfg(test)]
mod embeddings_fixtures;

#[cfg(test)]
pub use chat_fixtures::*;
#[cfg(test)]
pub use embeddings_fixtures::*;
