use palette_model::Element;

use crate::context::SectionContext;

/// Renders one section.
///
/// Implementations must be pure: the same context always yields the same
/// element, and rendering has no side effects.
pub trait SectionTemplate: Send + Sync {
    fn render(&self, ctx: &SectionContext) -> Element;
}

impl<F> SectionTemplate for F
where
    F: Fn(&SectionContext) -> Element + Send + Sync,
{
    fn render(&self, ctx: &SectionContext) -> Element {
        self(ctx)
    }
}
