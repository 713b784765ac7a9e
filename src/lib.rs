pub mod analyzer;
pub mod config;
pub mod error;
pub mod metrics;
pub mod morphology;
pub mod tokenizer;
pub mod validation;

// Re-exports
pub use analyzer::*;
pub use config::*;
pub use error::*;
pub use metrics::*;
pub use morphology::*;
pub use tokenizer::*;
pub use validation::*;
