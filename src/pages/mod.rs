//! Page components, one per route.

pub mod customers;
pub mod finance;
pub mod login;
pub mod not_found;
pub mod overview;
pub mod profile;
pub mod register;
pub mod stores;
