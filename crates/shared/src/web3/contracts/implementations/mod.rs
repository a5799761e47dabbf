pub mod farmer_registration_contract;
