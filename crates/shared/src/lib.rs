pub mod registration;
pub mod web3;
