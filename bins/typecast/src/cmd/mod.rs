pub mod convert;
pub mod serve;
pub mod types;
