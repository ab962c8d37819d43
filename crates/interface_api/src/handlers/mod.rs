//! Request handlers

pub mod quotation;
pub mod policy;
pub mod health;
