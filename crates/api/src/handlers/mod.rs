//! Request handlers, one module per resource.

pub mod dilemmas;
pub mod env_check;
pub mod export;
pub mod history;
pub mod settings;
