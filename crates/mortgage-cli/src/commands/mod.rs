pub mod affordability;
pub mod payment;
pub mod quote;
pub mod wizard;
