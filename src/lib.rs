//! Connector selection guide.
//!
//! A five-step wizard that narrows a read-only connector catalog down to the
//! sockets, tabs and headers matching an application. The wizard core
//! ([`wizard`]) is UI-agnostic; [`cli`] drives it from flags or, with the
//! `tui` feature, from an interactive terminal screen.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod render;
pub mod routes;
pub mod wizard;

pub use error::{GuideError, Result};
