//! Resolution of required sections against caller overrides.

use tracing::{debug, trace};

use palette_model::{Element, OverrideEntry, SectionId, TemplateSet, Tier};
use palette_prefs::PreferenceStore;
use palette_sections::{SectionContext, SectionLibrary};

use crate::document::{Document, Origin, Part};
use crate::error::{AssemblyError, Result};
use crate::order::SectionOrder;
use crate::xml;

/// Serializer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Value of the separator's `gap` attribute.
    pub separator_gap: u32,
    /// Spaces per nesting level inside sections.
    pub indent: usize,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            separator_gap: 36,
            indent: 2,
        }
    }
}

/// Builds palette documents from a section library.
///
/// The assembler holds no mutable state. Every call works on a private copy
/// of the override list, so identical inputs give byte-identical documents.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    library: SectionLibrary,
    order: SectionOrder,
    options: AssemblyOptions,
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(SectionLibrary::builtin())
    }
}

impl DocumentAssembler {
    pub fn new(library: SectionLibrary) -> Self {
        Self {
            library,
            order: SectionOrder::default(),
            options: AssemblyOptions::default(),
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: SectionOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: AssemblyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn library(&self) -> &SectionLibrary {
        &self.library
    }

    pub fn order(&self) -> &SectionOrder {
        &self.order
    }

    pub fn options(&self) -> &AssemblyOptions {
        &self.options
    }

    /// Assemble the palette for `ctx` using the ordering it selects.
    pub fn assemble(
        &self,
        tier: Option<Tier>,
        ctx: &SectionContext,
        overrides: &[OverrideEntry],
    ) -> Result<Document> {
        let required = self.order.select(ctx);
        self.assemble_sections(tier, required, ctx, overrides)
    }

    /// Assemble using the tier currently held by `store`.
    pub fn assemble_for(
        &self,
        store: &PreferenceStore,
        ctx: &SectionContext,
        overrides: &[OverrideEntry],
    ) -> Result<Document> {
        self.assemble(store.current(), ctx, overrides)
    }

    /// Assemble an explicit list of required sections.
    ///
    /// Each required id takes the first override with the same id, or else
    /// the library template for the tier's template set. Overrides left over
    /// are appended after the required sections in their input order, each
    /// preceded by one separator.
    pub fn assemble_sections(
        &self,
        tier: Option<Tier>,
        required: &[SectionId],
        ctx: &SectionContext,
        overrides: &[OverrideEntry],
    ) -> Result<Document> {
        let set = TemplateSet::for_tier(tier);
        let mut pending: Vec<&OverrideEntry> = overrides.iter().collect();
        let mut parts = Vec::with_capacity(required.len() * 2 + overrides.len() * 2);

        for (index, id) in required.iter().enumerate() {
            if index > 0 {
                parts.push(Part::Separator);
            }
            let part = match pending.iter().position(|entry| &entry.id == id) {
                Some(position) => {
                    let entry = pending.remove(position);
                    trace!(section = %id, "using override");
                    Part::Section {
                        id: id.clone(),
                        origin: Origin::Override,
                        markup: entry.xml.clone(),
                    }
                }
                None => {
                    let element = self
                        .library
                        .render(id.as_str(), set, ctx)
                        .ok_or_else(|| AssemblyError::UnresolvedSection { id: id.clone() })?;
                    Part::Section {
                        id: id.clone(),
                        origin: Origin::Library(set),
                        markup: xml::element_to_string(&element, self.options.indent)?,
                    }
                }
            };
            parts.push(part);
        }

        for entry in pending {
            trace!(section = %entry.id, "appending extension section");
            parts.push(Part::Separator);
            parts.push(Part::Section {
                id: entry.id.clone(),
                origin: Origin::Extension,
                markup: entry.xml.clone(),
            });
        }

        let separator = self.separator()?;
        let document = Document::new(parts, separator);
        debug!(
            template_set = set.as_str(),
            sections = document.section_ids().len(),
            separators = document.separator_count(),
            target = %ctx.target_id,
            "assembled palette"
        );
        Ok(document)
    }

    fn separator(&self) -> Result<String> {
        let sep = Element::new("sep").attr("gap", self.options.separator_gap.to_string());
        xml::element_to_string(&sep, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(name: &'static str) -> impl Fn(&SectionContext) -> Element + Send + Sync {
        move |_: &SectionContext| Element::new("category").attr("id", name)
    }

    fn assembler() -> DocumentAssembler {
        DocumentAssembler::new(
            SectionLibrary::empty()
                .with_section("a", simple("a-novice"), simple("a-standard"))
                .with_section("b", simple("b-novice"), simple("b-standard")),
        )
    }

    fn required(ids: &[&str]) -> Vec<SectionId> {
        ids.iter().map(|id| SectionId::from(*id)).collect()
    }

    #[test]
    fn separators_sit_between_sections() {
        let document = assembler()
            .assemble_sections(None, &required(&["a", "b"]), &SectionContext::new("t"), &[])
            .unwrap();
        assert_eq!(
            document.render(),
            "<xml style=\"display: none\">\n\
             <category id=\"a-standard\"/>\n\
             <sep gap=\"36\"/>\n\
             <category id=\"b-standard\"/>\n\
             </xml>"
        );
    }

    #[test]
    fn duplicate_overrides_are_consumed_one_at_a_time() {
        let overrides = [
            OverrideEntry::new("a", "<first/>"),
            OverrideEntry::new("a", "<second/>"),
        ];
        let document = assembler()
            .assemble_sections(
                Some(Tier::Novice),
                &required(&["a", "b"]),
                &SectionContext::new("t"),
                &overrides,
            )
            .unwrap();
        assert_eq!(document.section("a"), Some("<first/>"));
        assert_eq!(document.origin("b"), Some(Origin::Library(TemplateSet::Novice)));
        let ids: Vec<&str> = document.section_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "a"]);
        assert_eq!(document.separator_count(), 2);
    }

    #[test]
    fn gap_is_configurable() {
        let document = assembler()
            .with_options(AssemblyOptions {
                separator_gap: 8,
                ..AssemblyOptions::default()
            })
            .assemble_sections(None, &required(&["a", "b"]), &SectionContext::new("t"), &[])
            .unwrap();
        assert_eq!(document.separator(), r#"<sep gap="8"/>"#);
    }

    #[test]
    fn unknown_required_section_is_an_error() {
        let err = assembler()
            .assemble_sections(None, &required(&["a", "zzz"]), &SectionContext::new("t"), &[])
            .unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::UnresolvedSection { ref id } if id.as_str() == "zzz"
        ));
    }
}
