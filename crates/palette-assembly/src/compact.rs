//! Flat palette for the horizontal layout.
//!
//! Unlike the full palette this has no separators and no per-context
//! variants: one category per table entry, one block per operation.

use palette_model::{CategorySpec, CategoryTable, Element, Messages, OperationSpec};

use crate::error::Result;
use crate::xml;

const YOUNG_LEARNER: [(&str, &str, &str, &[&str]); 5] = [
    (
        "motion",
        "#FF8C42",
        "#E67E3A",
        &[
            "motion_movesteps",
            "motion_turnright",
            "motion_turnleft",
            "motion_goto",
            "motion_gotoxy",
        ],
    ),
    (
        "looks",
        "#9966FF",
        "#774DCB",
        &[
            "looks_say",
            "looks_think",
            "looks_show",
            "looks_hide",
            "looks_switchcostumeto",
        ],
    ),
    (
        "sounds",
        "#CF63CF",
        "#BD42BD",
        &["sound_play", "sound_playuntildone", "sound_stopallsounds"],
    ),
    (
        "events",
        "#FFBF00",
        "#CC9900",
        &[
            "event_whenflagclicked",
            "event_whenthisspriteclicked",
            "event_whenkeypressed",
        ],
    ),
    (
        "control",
        "#FFAB19",
        "#CF8B17",
        &[
            "control_wait",
            "control_repeat",
            "control_forever",
            "control_if",
            "control_wait_until",
        ],
    ),
];

/// The built-in five-category table, named with `messages`.
pub fn young_learner_table(messages: &Messages) -> CategoryTable {
    CategoryTable::new(
        YOUNG_LEARNER
            .iter()
            .map(|(id, colour, secondary, opcodes)| CategorySpec {
                id: (*id).to_string(),
                name: messages.category_name(id).to_string(),
                colour: (*colour).to_string(),
                secondary_colour: (*secondary).to_string(),
                operations: opcodes.iter().map(|op| OperationSpec::novice(*op)).collect(),
            })
            .collect(),
    )
}

/// Render the compact palette.
///
/// A non-empty `table` replaces the built-in young-learner categories.
pub fn render_compact_palette(table: Option<&CategoryTable>, messages: &Messages) -> Result<String> {
    let builtin;
    let table = match table {
        Some(table) if !table.is_empty() => table,
        _ => {
            builtin = young_learner_table(messages);
            &builtin
        }
    };

    let root = Element::new("xml")
        .attr("id", "toolbox")
        .attr("style", "display: none")
        .children(table.iter().map(category));
    xml::element_to_string(&root, 2)
}

fn category(spec: &CategorySpec) -> Element {
    Element::new("category")
        .attr("name", spec.name.as_str())
        .attr("id", spec.id.as_str())
        .attr("colour", spec.colour.as_str())
        .attr("secondaryColour", spec.secondary_colour.as_str())
        .children(
            spec.operations
                .iter()
                .map(|op| Element::new("block").attr("type", op.opcode.as_str())),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_five_categories() {
        let table = young_learner_table(&Messages::default());
        let ids: Vec<&str> = table.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["motion", "looks", "sounds", "events", "control"]);
        assert_eq!(table.get("sounds").map(|c| c.name.as_str()), Some("Sound"));
    }

    #[test]
    fn empty_table_falls_back_to_builtin() {
        let messages = Messages::default();
        let empty = CategoryTable::default();
        assert_eq!(
            render_compact_palette(Some(&empty), &messages).unwrap(),
            render_compact_palette(None, &messages).unwrap()
        );
    }

    #[test]
    fn custom_table_replaces_builtin() {
        let table = CategoryTable::new(vec![CategorySpec {
            id: "pins".to_string(),
            name: "Pins & Wires".to_string(),
            colour: "#00A0A0".to_string(),
            secondary_colour: "#008080".to_string(),
            operations: vec![OperationSpec::new("pin_setdigital")],
        }]);
        let xml = render_compact_palette(Some(&table), &Messages::default()).unwrap();
        assert_eq!(
            xml,
            "<xml id=\"toolbox\" style=\"display: none\">\n  \
             <category name=\"Pins &amp; Wires\" id=\"pins\" colour=\"#00A0A0\" secondaryColour=\"#008080\">\n    \
             <block type=\"pin_setdigital\"/>\n  \
             </category>\n\
             </xml>"
        );
    }
}
