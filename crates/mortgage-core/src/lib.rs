pub mod error;
pub mod types;

#[cfg(feature = "amortisation")]
pub mod amortisation;

#[cfg(feature = "affordability")]
pub mod affordability;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-core operations
pub type MortgageResult<T> = Result<T, MortgageError>;
