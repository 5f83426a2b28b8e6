//! Parameters passed to every section template.

use palette_model::{DeviceDescriptor, ExampleDefaults, ExecutionMode, Messages};

/// Everything a template may look at.
///
/// Built once per assembly request and shared by reference with every
/// template; templates never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContext {
    /// The palette is being built before any project is loaded.
    pub initial_setup: bool,
    /// The editing target is the stage rather than a sprite.
    pub stage: bool,
    /// Id of the editing target; used to scope reporter ids.
    pub target_id: String,
    pub device: Option<DeviceDescriptor>,
    pub mode: ExecutionMode,
    pub defaults: ExampleDefaults,
    pub messages: Messages,
}

impl SectionContext {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            initial_setup: false,
            stage: false,
            target_id: target_id.into(),
            device: None,
            mode: ExecutionMode::default(),
            defaults: ExampleDefaults::default(),
            messages: Messages::default(),
        }
    }

    #[must_use]
    pub fn initial_setup(mut self, initial_setup: bool) -> Self {
        self.initial_setup = initial_setup;
        self
    }

    #[must_use]
    pub fn stage(mut self, stage: bool) -> Self {
        self.stage = stage;
        self
    }

    #[must_use]
    pub fn device(mut self, device: Option<DeviceDescriptor>) -> Self {
        self.device = device;
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn defaults(mut self, defaults: ExampleDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Whether templates should render the stage variant.
    ///
    /// During initial setup there is no sprite yet, so the stage variant is
    /// used regardless of `stage`.
    pub fn is_stage(&self) -> bool {
        self.initial_setup || self.stage
    }

    /// A device is connected and programs are uploaded to it.
    pub fn is_device_upload(&self) -> bool {
        self.device.is_some() && !self.mode.is_realtime()
    }

    /// Reporter id scoped to the current target, e.g. `sprite1_xposition`.
    pub fn scoped_id(&self, suffix: &str) -> String {
        format!("{}_{}", self.target_id, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_setup_forces_stage_variant() {
        let ctx = SectionContext::new("sprite1").initial_setup(true);
        assert!(!ctx.stage);
        assert!(ctx.is_stage());
    }

    #[test]
    fn device_upload_needs_both_device_and_upload_mode() {
        let device = DeviceDescriptor::new("uno", "arduino");
        let ctx = SectionContext::new("t").device(Some(device.clone()));
        assert!(!ctx.is_device_upload());
        let ctx = ctx.mode(ExecutionMode::Upload);
        assert!(ctx.is_device_upload());
        let ctx = SectionContext::new("t").mode(ExecutionMode::Upload);
        assert!(!ctx.is_device_upload());
    }
}
