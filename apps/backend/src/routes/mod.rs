//! HTTP route handlers

pub mod session;
pub mod settings;
pub mod stats;
pub mod vocabulary;
