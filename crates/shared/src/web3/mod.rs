pub mod contracts;
pub mod wallet;

pub use contracts::implementations::farmer_registration_contract::FarmerRegistrationContract;
pub use wallet::{Wallet, WalletProvider};
