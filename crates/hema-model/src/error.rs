use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseParameterError {
    #[error("unknown blood parameter: {name}")]
    UnknownParameter { name: String },
    #[error("unknown sex label: {label}")]
    UnknownSex { label: String },
}
