//! Rubricgen Core Library
//!
//! Domain logic for turning a markdown policy document into an
//! architecture score rubric.

pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod rubric;
pub mod rules;
