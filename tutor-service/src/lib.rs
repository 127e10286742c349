//! Study tutor backend.
//!
//! Accepts student-provided text and turns it into a concise summary or a
//! short multiple-choice quiz by calling an external chat-completion API.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::AppState;
