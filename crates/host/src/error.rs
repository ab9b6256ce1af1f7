use thiserror::Error;

/// Errors raised at the host function boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// No function with the given name has been registered.
    #[error("no scalar function named `{0}`")]
    UnknownFunction(String),
}
