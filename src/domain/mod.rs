//! Domain types and rules: accounts, schemes, payment requests and the
//! account store port.

pub mod account;
pub mod eligibility;
pub mod payment;
pub mod ports;
pub mod scheme;
