pub mod accounts;
pub mod common;
pub mod register;

pub use register::RegisterArgs;
