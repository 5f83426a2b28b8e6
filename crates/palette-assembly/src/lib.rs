//! Palette document assembly.
//!
//! [`DocumentAssembler`] resolves a fixed ordering of section ids against a
//! caller's override list and the [`SectionLibrary`](palette_sections::SectionLibrary),
//! interleaves separators and wraps the result in the document envelope.
//!
//! ```text
//! <xml style="display: none">
//! <category id="motion" ...>...</category>
//! <sep gap="36"/>
//! <category id="looks" ...>...</category>
//! ...
//! </xml>
//! ```
//!
//! [`render_compact_palette`] renders the flat palette used by the
//! horizontal layout.

mod assembler;
mod compact;
mod document;
mod error;
mod order;
pub mod xml;

pub use assembler::{AssemblyOptions, DocumentAssembler};
pub use compact::{render_compact_palette, young_learner_table};
pub use document::{Document, ENVELOPE_CLOSE, ENVELOPE_OPEN, Origin, Part};
pub use error::{AssemblyError, Result};
pub use order::SectionOrder;
