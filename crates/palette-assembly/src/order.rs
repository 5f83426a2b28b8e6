//! Fixed section orderings.

use serde::{Deserialize, Serialize};

use palette_model::SectionId;
use palette_sections::{SectionContext, SectionLibrary, ids};

/// The two palette orderings: one for a device running uploaded programs,
/// one for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionOrder {
    pub default: Vec<SectionId>,
    pub device_upload: Vec<SectionId>,
}

impl Default for SectionOrder {
    fn default() -> Self {
        Self {
            default: ids::ALL.iter().map(|id| SectionId::from(*id)).collect(),
            device_upload: [
                ids::EVENT,
                ids::CONTROL,
                ids::OPERATORS,
                ids::DATA,
                ids::PROCEDURES,
            ]
            .iter()
            .map(|id| SectionId::from(*id))
            .collect(),
        }
    }
}

impl SectionOrder {
    /// Ordering for the given context.
    pub fn select(&self, ctx: &SectionContext) -> &[SectionId] {
        if ctx.is_device_upload() {
            &self.device_upload
        } else {
            &self.default
        }
    }

    /// Ids named by either ordering that `library` cannot render.
    ///
    /// Such ids only resolve when the caller overrides them.
    pub fn unresolved(&self, library: &SectionLibrary) -> Vec<SectionId> {
        let mut missing: Vec<SectionId> = self
            .default
            .iter()
            .chain(&self.device_upload)
            .filter(|id| !library.contains(id.as_str()))
            .cloned()
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_model::{DeviceDescriptor, ExecutionMode};

    #[test]
    fn device_upload_ordering_needs_upload_mode() {
        let order = SectionOrder::default();
        let device = Some(DeviceDescriptor::new("uno", "arduino"));
        let realtime = SectionContext::new("t").device(device.clone());
        assert_eq!(order.select(&realtime).len(), 9);
        let upload = realtime.mode(ExecutionMode::Upload);
        let selected: Vec<&str> = order.select(&upload).iter().map(SectionId::as_str).collect();
        assert_eq!(
            selected,
            vec!["event", "control", "operators", "data", "procedures"]
        );
    }

    #[test]
    fn builtin_library_covers_default_orderings() {
        assert!(
            SectionOrder::default()
                .unresolved(&SectionLibrary::builtin())
                .is_empty()
        );
    }

    #[test]
    fn unresolved_lists_unknown_ids_once() {
        let order = SectionOrder {
            default: vec!["motion".into(), "pins".into()],
            device_upload: vec!["pins".into()],
        };
        assert_eq!(
            order.unresolved(&SectionLibrary::builtin()),
            vec![SectionId::from("pins")]
        );
    }
}
