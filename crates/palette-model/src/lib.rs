//! Shared data model for adaptive palette assembly.
//!
//! - [`Tier`] and [`TierProfile`]: the persisted experience preference
//! - [`Element`]: structured fragments produced by section templates
//! - [`OverrideEntry`]: caller-supplied pre-rendered sections
//! - [`CategoryTable`]: deployment-specific operation catalogs

pub mod catalog;
pub mod context;
pub mod error;
pub mod fragment;
pub mod section;
pub mod tier;

pub use catalog::{CategorySpec, CategoryTable, OperationSpec};
pub use context::{DeviceDescriptor, ExampleDefaults, ExecutionMode, Messages};
pub use error::{ModelError, Result};
pub use fragment::{Element, Node};
pub use section::{OverrideEntry, SectionId};
pub use tier::{BlockStyle, Layout, TemplateSet, Tier, TierProfile};
