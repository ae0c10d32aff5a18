//! Domain layer - Shortcode translation and file filtering

pub mod extensions;
pub mod figure;
pub mod request;

pub use extensions::{ExtensionSet, DEFAULT_EXTENSIONS};
pub use figure::{translate, translate_figures, TranslateResult};
pub use request::{RewriteRequest, Target};
