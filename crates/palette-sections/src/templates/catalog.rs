//! Sections generated from a configured [`CategoryTable`] entry.
//!
//! [`CategoryTable`]: palette_model::CategoryTable

use palette_model::{CategorySpec, Element, OperationSpec, TemplateSet};

use crate::blocks::{block, category_element, close_category};
use crate::context::SectionContext;
use crate::template::SectionTemplate;

/// Renders one configured category for one template set.
#[derive(Debug, Clone)]
pub struct CatalogSection {
    category: CategorySpec,
    set: TemplateSet,
}

impl CatalogSection {
    pub fn new(category: CategorySpec, set: TemplateSet) -> Self {
        Self { category, set }
    }

    fn operations(&self) -> Vec<&OperationSpec> {
        match self.set {
            TemplateSet::Novice => self.category.novice_operations(),
            TemplateSet::Standard => self.category.operations.iter().collect(),
        }
    }
}

impl SectionTemplate for CatalogSection {
    fn render(&self, _ctx: &SectionContext) -> Element {
        let mut element = category_element(
            &self.category.name,
            &self.category.id,
            &self.category.colour,
            &self.category.secondary_colour,
            None,
        );
        element.extend(self.operations().into_iter().map(|op| block(&op.opcode)));
        close_category(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins() -> CategorySpec {
        CategorySpec {
            id: "pins".to_string(),
            name: "Pins".to_string(),
            colour: "#00A0A0".to_string(),
            secondary_colour: "#008080".to_string(),
            operations: vec![
                OperationSpec::novice("pin_setdigital"),
                OperationSpec::new("pin_setpwm"),
            ],
        }
    }

    fn opcodes(element: &Element) -> Vec<String> {
        element
            .child_elements()
            .filter(|e| e.name() == "block")
            .filter_map(|e| e.attribute("type").map(str::to_string))
            .collect()
    }

    #[test]
    fn standard_set_renders_every_operation() {
        let section = CatalogSection::new(pins(), TemplateSet::Standard);
        let element = section.render(&SectionContext::new("t"));
        assert_eq!(element.attribute("name"), Some("Pins"));
        assert_eq!(opcodes(&element), vec!["pin_setdigital", "pin_setpwm"]);
    }

    #[test]
    fn novice_set_renders_flagged_operations() {
        let section = CatalogSection::new(pins(), TemplateSet::Novice);
        let element = section.render(&SectionContext::new("t"));
        assert_eq!(opcodes(&element), vec!["pin_setdigital"]);
    }
}
