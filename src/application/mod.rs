//! Application layer: the payment authorizer that orchestrates lookup,
//! eligibility and persistence through the account store port.

pub mod authorizer;
