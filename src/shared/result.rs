/// Type alias for Result with anyhow::Error as the error type.
/// Every fallible port and use case in the crate returns this.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
