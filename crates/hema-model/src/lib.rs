pub mod diagnosis;
pub mod error;
pub mod finding;
pub mod parameter;
pub mod reading;

pub use diagnosis::{AnalysisResult, DiagnosticCandidate, Likelihood, RuleProfile};
pub use error::ParseParameterError;
pub use finding::{AbnormalFinding, NormalRange, Status};
pub use parameter::{Parameter, Sex};
pub use reading::{BloodPanel, Demographics, Measurement, ParameterReading, RawValue};
