pub mod diagnose;
pub mod outcome;
pub mod suggest;
pub mod summary;
pub mod trend;

pub use diagnose::diagnose;
pub use outcome::{
    DiagnosticReport, Insight, SafetyAssessment, Suggestion, SuggestionLevel, Summary, TypeCount,
};
pub use suggest::suggest;
pub use summary::aggregate;
pub use trend::{classify, Trend};
