//! rstoc: rebuild hierarchical help tables of contents from indented
//! wiki outlines.
//!
//! Help topics are maintained as a flat wiki page where nesting is encoded
//! purely by indentation:
//!
//! ```text
//! lang:en
//!   * 001 - Home
//!     * 100 - [[en:manual|Using the manual]]
//!       * 101 - Playback
//!     * 200 - Export
//! ```
//!
//! The pipeline has three stages: [`parser::LineParser`] classifies raw
//! lines, [`builder::OutlineBuilder`] reattaches the flat records into an
//! arena-backed tree in one forward pass, and [`markup::to_markup`]
//! serializes the tree as nested XML for the help viewer.

pub mod arena;
pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod markup;
pub mod parser;
pub mod util;

pub use arena::{Outline, OutlineNode, DEFAULT_LANG};
pub use builder::OutlineBuilder;
pub use errors::{OutlineError, OutlineResult};
pub use markup::to_markup;
pub use parser::{LineEvent, LineParser, TopicRecord};
