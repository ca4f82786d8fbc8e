//! Public exports for building LLM-ready prompts and shaping results.

pub mod builder;
pub mod schema;
pub mod templates;

#[cfg(test)]
mod tests;

pub use builder::*;
pub use schema::*;
pub use templates::*;
