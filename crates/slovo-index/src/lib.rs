pub mod builder;
pub mod complete;
pub mod error;
pub mod fingerprint;
pub mod source;
pub mod store;

pub use builder::{build, rebuild};
pub use complete::{Completion, CompletionEngine, MAX_COMPLETIONS};
pub use error::IndexError;
pub use fingerprint::{Fingerprint, Staleness};
pub use source::{HeadwordProvider, SourceError, SourceId};
