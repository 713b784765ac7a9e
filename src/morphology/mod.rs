//! Identifier morphology: decomposition into morphemes and classification
//! of naming conventions. Both operations are total over arbitrary strings
//! and run inline during tokenization.

pub mod convention;
pub mod decompose;

pub use convention::{classify, NamingConvention};
pub use decompose::Decomposer;
