//! Mapping from section id to its novice and standard templates.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use palette_model::{CategoryTable, Element, SectionId, TemplateSet};

use crate::blocks::ids;
use crate::context::SectionContext;
use crate::template::SectionTemplate;
use crate::templates::catalog::CatalogSection;
use crate::templates::{novice, standard};

/// Both template variants of one section.
///
/// A section can only be registered with both variants, so every id is
/// available in every tier.
#[derive(Clone)]
pub struct SectionEntry {
    novice: Arc<dyn SectionTemplate>,
    standard: Arc<dyn SectionTemplate>,
}

impl SectionEntry {
    pub fn new<N, S>(novice: N, standard: S) -> Self
    where
        N: SectionTemplate + 'static,
        S: SectionTemplate + 'static,
    {
        Self {
            novice: Arc::new(novice),
            standard: Arc::new(standard),
        }
    }

    pub fn template(&self, set: TemplateSet) -> &dyn SectionTemplate {
        match set {
            TemplateSet::Novice => self.novice.as_ref(),
            TemplateSet::Standard => self.standard.as_ref(),
        }
    }
}

/// Immutable set of section templates.
#[derive(Clone, Default)]
pub struct SectionLibrary {
    entries: BTreeMap<SectionId, SectionEntry>,
}

impl SectionLibrary {
    /// A library with no sections.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The nine built-in categories.
    pub fn builtin() -> Self {
        Self::empty()
            .with_section(ids::MOTION, novice::motion, standard::motion)
            .with_section(ids::LOOKS, novice::looks, standard::looks)
            .with_section(ids::SOUND, novice::sound, standard::sound)
            .with_section(ids::EVENT, novice::event, standard::event)
            .with_section(ids::CONTROL, novice::control, standard::control)
            .with_section(ids::SENSING, novice::sensing, standard::sensing)
            .with_section(ids::OPERATORS, novice::operators, standard::operators)
            .with_section(ids::DATA, novice::data, standard::data)
            .with_section(ids::PROCEDURES, novice::procedures, standard::procedures)
    }

    /// Register a section, replacing any existing one with the same id.
    #[must_use]
    pub fn with_section<N, S>(mut self, id: impl Into<SectionId>, novice: N, standard: S) -> Self
    where
        N: SectionTemplate + 'static,
        S: SectionTemplate + 'static,
    {
        let id = id.into();
        if self
            .entries
            .insert(id.clone(), SectionEntry::new(novice, standard))
            .is_some()
        {
            debug!(section = %id, "replaced section template");
        }
        self
    }

    /// Register one table-driven section per category in `table`.
    #[must_use]
    pub fn with_catalog(self, table: &CategoryTable) -> Self {
        table.iter().fold(self, |library, category| {
            library.with_section(
                category.id.as_str(),
                CatalogSection::new(category.clone(), TemplateSet::Novice),
                CatalogSection::new(category.clone(), TemplateSet::Standard),
            )
        })
    }

    pub fn get(&self, id: &str, set: TemplateSet) -> Option<&dyn SectionTemplate> {
        self.entries.get(id).map(|entry| entry.template(set))
    }

    /// Render `id` with the given template set, if the library knows it.
    pub fn render(&self, id: &str, set: TemplateSet, ctx: &SectionContext) -> Option<Element> {
        self.get(id, set).map(|template| template.render(ctx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for SectionLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionLibrary")
            .field("ids", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_category() {
        let library = SectionLibrary::builtin();
        assert_eq!(library.len(), ids::ALL.len());
        for id in ids::ALL {
            assert!(library.contains(id), "missing {id}");
            assert!(library.get(id, TemplateSet::Novice).is_some());
            assert!(library.get(id, TemplateSet::Standard).is_some());
        }
    }

    #[test]
    fn with_section_replaces_existing_id() {
        let library = SectionLibrary::builtin().with_section(
            ids::MOTION,
            |_: &SectionContext| Element::new("novice"),
            |_: &SectionContext| Element::new("standard"),
        );
        let ctx = SectionContext::new("t");
        assert_eq!(library.len(), ids::ALL.len());
        assert_eq!(
            library
                .render(ids::MOTION, TemplateSet::Novice, &ctx)
                .unwrap()
                .name(),
            "novice"
        );
        assert_eq!(
            library
                .render(ids::MOTION, TemplateSet::Standard, &ctx)
                .unwrap()
                .name(),
            "standard"
        );
    }

    #[test]
    fn unknown_id_renders_nothing() {
        let library = SectionLibrary::builtin();
        assert!(
            library
                .render("pins", TemplateSet::Standard, &SectionContext::new("t"))
                .is_none()
        );
    }
}
