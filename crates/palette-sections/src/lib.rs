//! Section template library.
//!
//! Each palette section (one operation category) has a novice and a standard
//! template. Templates are pure functions of a [`SectionContext`] returning a
//! structured [`Element`](palette_model::Element).
//!
//! - [`SectionLibrary::builtin`]: motion, looks, sound, event, control,
//!   sensing, operators, data and procedures
//! - [`SectionLibrary::with_catalog`]: sections generated from a configured
//!   category table
//! - [`SectionLibrary::with_section`]: arbitrary templates

pub mod blocks;
mod context;
mod library;
mod template;
pub mod templates;

pub use blocks::{GAP, gap, ids};
pub use context::SectionContext;
pub use library::{SectionEntry, SectionLibrary};
pub use template::SectionTemplate;
pub use templates::catalog::CatalogSection;
