//! # boda-core
//!
//! Locales, locale-prefixed routing, translation catalogs, configuration,
//! and error handling for the boda wedding site.

pub mod config;
pub mod error;
pub mod locale;
pub mod messages;
pub mod phrases;
pub mod route;
