//! Linear generation chains (prompt → model → parser).

pub mod generation;

pub use generation::{GenerationChain, OutputParser, StrOutputParser};
