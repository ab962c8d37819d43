//! Request and response bodies
//!
//! Field names are camelCase on the wire and dates are ISO `YYYY-MM-DD`.

pub mod quotation;
pub mod policy;
