//! Builders for the element shapes templates are made of.

use palette_model::Element;

/// Gap, in pixels, between operation groups and after each category.
pub const GAP: &str = "36";

/// Built-in category ids.
pub mod ids {
    pub const MOTION: &str = "motion";
    pub const LOOKS: &str = "looks";
    pub const SOUND: &str = "sound";
    pub const EVENT: &str = "event";
    pub const CONTROL: &str = "control";
    pub const SENSING: &str = "sensing";
    pub const OPERATORS: &str = "operators";
    pub const DATA: &str = "data";
    pub const PROCEDURES: &str = "procedures";

    /// All built-in ids in default palette order.
    pub const ALL: [&str; 9] = [
        MOTION, LOOKS, SOUND, EVENT, CONTROL, SENSING, OPERATORS, DATA, PROCEDURES,
    ];
}

/// Display attributes of a built-in category.
pub(crate) struct CategoryStyle {
    pub id: &'static str,
    /// Message key resolved by the consumer, e.g. `%{BKY_CATEGORY_MOTION}`.
    pub name: &'static str,
    pub colour: &'static str,
    pub secondary_colour: &'static str,
    pub custom: Option<&'static str>,
}

pub(crate) const MOTION: CategoryStyle = CategoryStyle {
    id: ids::MOTION,
    name: "%{BKY_CATEGORY_MOTION}",
    colour: "#4C97FF",
    secondary_colour: "#3373CC",
    custom: None,
};

pub(crate) const LOOKS: CategoryStyle = CategoryStyle {
    id: ids::LOOKS,
    name: "%{BKY_CATEGORY_LOOKS}",
    colour: "#9966FF",
    secondary_colour: "#774DCB",
    custom: None,
};

pub(crate) const SOUND: CategoryStyle = CategoryStyle {
    id: ids::SOUND,
    name: "%{BKY_CATEGORY_SOUND}",
    colour: "#D65CD6",
    secondary_colour: "#BD42BD",
    custom: None,
};

pub(crate) const EVENT: CategoryStyle = CategoryStyle {
    id: ids::EVENT,
    name: "%{BKY_CATEGORY_EVENTS}",
    colour: "#FFD500",
    secondary_colour: "#CC9900",
    custom: None,
};

pub(crate) const CONTROL: CategoryStyle = CategoryStyle {
    id: ids::CONTROL,
    name: "%{BKY_CATEGORY_CONTROL}",
    colour: "#FFAB19",
    secondary_colour: "#CF8B17",
    custom: None,
};

pub(crate) const SENSING: CategoryStyle = CategoryStyle {
    id: ids::SENSING,
    name: "%{BKY_CATEGORY_SENSING}",
    colour: "#4CBFE6",
    secondary_colour: "#2E8EB8",
    custom: None,
};

pub(crate) const OPERATORS: CategoryStyle = CategoryStyle {
    id: ids::OPERATORS,
    name: "%{BKY_CATEGORY_OPERATORS}",
    colour: "#40BF4A",
    secondary_colour: "#389438",
    custom: None,
};

pub(crate) const DATA: CategoryStyle = CategoryStyle {
    id: ids::DATA,
    name: "%{BKY_CATEGORY_VARIABLES}",
    colour: "#FF8C1A",
    secondary_colour: "#DB6E00",
    custom: Some("VARIABLE"),
};

pub(crate) const PROCEDURES: CategoryStyle = CategoryStyle {
    id: ids::PROCEDURES,
    name: "%{BKY_CATEGORY_MYBLOCKS}",
    colour: "#FF6680",
    secondary_colour: "#FF4D6A",
    custom: Some("PROCEDURE"),
};

/// Open a category element. The caller appends operations and finishes with
/// [`close_category`].
pub(crate) fn category(style: &CategoryStyle) -> Element {
    category_element(style.name, style.id, style.colour, style.secondary_colour, style.custom)
}

pub(crate) fn category_element(
    name: &str,
    id: &str,
    colour: &str,
    secondary_colour: &str,
    custom: Option<&str>,
) -> Element {
    let mut element = Element::new("category")
        .attr("name", name)
        .attr("id", id)
        .attr("colour", colour)
        .attr("secondaryColour", secondary_colour);
    if let Some(custom) = custom {
        element.set_attr("custom", custom);
    }
    element
}

/// Every category ends with a trailing gap.
pub(crate) fn close_category(mut category: Element) -> Element {
    category.push(gap());
    category
}

pub fn gap() -> Element {
    Element::new("sep").attr("gap", GAP)
}

pub(crate) fn label(text: &str) -> Element {
    Element::new("label").attr("text", text)
}

pub(crate) fn block(opcode: &str) -> Element {
    Element::new("block").attr("type", opcode)
}

/// Block with an explicit id, used for reporters whose checkbox state is
/// tracked per target.
pub(crate) fn block_with_id(id: &str, opcode: &str) -> Element {
    Element::new("block").attr("id", id).attr("type", opcode)
}

fn field(name: &str, value: Option<&str>) -> Element {
    let field = Element::new("field").attr("name", name);
    match value {
        Some(value) => field.text(value),
        None => field,
    }
}

/// `<value name><shadow type><field name>value</field></shadow></value>`
pub(crate) fn shadow_input(
    input: &str,
    shadow_type: &str,
    field_name: &str,
    value: Option<&str>,
) -> Element {
    Element::new("value").attr("name", input).child(
        Element::new("shadow")
            .attr("type", shadow_type)
            .child(field(field_name, value)),
    )
}

pub(crate) fn number(input: &str, value: &str) -> Element {
    shadow_input(input, "math_number", "NUM", Some(value))
}

pub(crate) fn empty_number(input: &str) -> Element {
    shadow_input(input, "math_number", "NUM", None)
}

pub(crate) fn positive_number(input: &str, value: &str) -> Element {
    shadow_input(input, "math_positive_number", "NUM", Some(value))
}

pub(crate) fn whole_number(input: &str, value: &str) -> Element {
    shadow_input(input, "math_whole_number", "NUM", Some(value))
}

pub(crate) fn angle(input: &str, value: &str) -> Element {
    shadow_input(input, "math_angle", "NUM", Some(value))
}

pub(crate) fn text(input: &str, value: &str) -> Element {
    shadow_input(input, "text", "TEXT", Some(value))
}

pub(crate) fn empty_text(input: &str) -> Element {
    shadow_input(input, "text", "TEXT", None)
}

/// Input whose shadow is a menu with no pre-selected field.
pub(crate) fn menu(input: &str, shadow_type: &str) -> Element {
    Element::new("value")
        .attr("name", input)
        .child(Element::new("shadow").attr("type", shadow_type))
}
