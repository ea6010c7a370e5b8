//! Reference renderers for parsed reports.
//!
//! The dashboard owns real presentation; these cover the CLI and tests.

pub mod group;
pub mod html;
pub mod text;

pub use group::{ContentGroup, group_blocks};
pub use html::to_html;
pub use text::{BULLET, to_plain_text};
