pub mod core;
pub mod helpers;
pub mod implementations;
pub mod structs;
