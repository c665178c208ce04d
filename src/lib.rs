// scriptsniff: guess which dialect a script is written in.
//
// Library root. The engine is pure computation over n-gram
// distributions; the other modules are the I/O shell around it.

pub mod config;
pub mod engine;
pub mod input;
pub mod output;
pub mod profiles;

pub use engine::{classify, DetectionResult, EngineConfig, NGramDistribution};
pub use profiles::ProfileStore;
