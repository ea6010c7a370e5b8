//! # Block Parsing
//!
//! Two-phase block parsing for generated meeting reports.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    holding only local facts (blank, underline, heading marker, bullet marker, text)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` carries the context
//!    (pending list, last emitted kind, active section) and emits `BlockNode`s
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockNode`, `HeadingLevel`)
//! - **`kinds`**: Block-specific types with owned delimiters (AtxHeading, SetextUnderline, Bullet, Paragraph)
//! - **`classify`**: `ReportLineClassifier` produces `LineClass` for each line
//! - **`sections`**: `ListSections`, the titles whose bodies are read as lists
//! - **`sink`**: `BlockSink`, the output buffer with its single-step retraction
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Output is flat; no block contains another
//! - Pending list items are flushed before any heading, paragraph or blank line, and at EOF
//! - A Setext underline rewrites at most the one block emitted just before it

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod sections;
pub mod sink;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, ReportLineClassifier};
pub use sections::{DEFAULT_LIST_SECTIONS, ListSections};
pub use sink::BlockSink;
pub use types::{Block, BlockNode, HeadingLevel};
