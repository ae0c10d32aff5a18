//! figmd - Figure shortcode converter
//!
//! Rewrites `{{<figure src="..." alt="..." width="...">}}` shortcodes in
//! documentation sources into markdown image syntax, one file at a time or
//! across a whole directory tree.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FigmdError;
