//! Novice template set.
//!
//! Fewer operations per category, no effects or layering, and only the most
//! common inputs.

use palette_model::Element;

use crate::blocks::{
    self, block, block_with_id, close_category, empty_number, empty_text, gap, label, menu,
    number, positive_number, shadow_input, text, whole_number,
};
use crate::context::SectionContext;
use crate::templates::device_events;

pub fn motion(ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::MOTION);
    if ctx.is_stage() {
        category.push(label(&ctx.messages.stage_selected));
    } else {
        category.extend([
            block("motion_movesteps").child(number("STEPS", "10")),
            block("motion_turnright").child(number("DEGREES", "15")),
            block("motion_turnleft").child(number("DEGREES", "15")),
            gap(),
            block("motion_goto").child(menu("TO", "motion_goto_menu")),
            gap(),
            block_with_id(&ctx.scoped_id("xposition"), "motion_xposition"),
            block_with_id(&ctx.scoped_id("yposition"), "motion_yposition"),
        ]);
    }
    close_category(category)
}

pub fn looks(ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::LOOKS);
    if ctx.is_stage() {
        category.extend([
            block("looks_switchbackdropto").child(shadow_input(
                "BACKDROP",
                "looks_backdrops",
                "BACKDROP",
                Some(&ctx.defaults.backdrop),
            )),
            block("looks_nextbackdrop"),
        ]);
    } else {
        category.extend([
            block("looks_say").child(text("MESSAGE", &ctx.messages.hello)),
            block("looks_think").child(text("MESSAGE", &ctx.messages.hmm)),
            gap(),
            block("looks_switchcostumeto").child(shadow_input(
                "COSTUME",
                "looks_costume",
                "COSTUME",
                Some(&ctx.defaults.costume),
            )),
            block("looks_nextcostume"),
            gap(),
            block("looks_show"),
            block("looks_hide"),
            gap(),
            block("looks_setsizeto").child(number("SIZE", "100")),
            block("looks_changesizeby").child(number("CHANGE", "10")),
        ]);
    }
    close_category(category)
}

pub fn sound(ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::SOUND);
    category.extend([
        block_with_id(&ctx.scoped_id("sound_play"), "sound_play").child(shadow_input(
            "SOUND_MENU",
            "sound_sounds_menu",
            "SOUND_MENU",
            Some(&ctx.defaults.sound),
        )),
        block("sound_stopallsounds"),
        gap(),
        block("sound_setvolumeto").child(number("VOLUME", "100")),
        block_with_id(&ctx.scoped_id("volume"), "sound_volume"),
    ]);
    close_category(category)
}

pub fn event(ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::EVENT);
    if let Some(device) = ctx.device.as_ref().filter(|_| ctx.is_device_upload()) {
        category.extend(device_events(device));
    } else {
        category.extend([
            block("event_whenflagclicked"),
            block("event_whenkeypressed"),
            block("event_whenthisspriteclicked"),
            gap(),
        ]);
    }
    close_category(category)
}

pub fn control(_ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::CONTROL);
    category.extend([
        block("control_wait").child(positive_number("DURATION", "1")),
        gap(),
        block("control_repeat").child(whole_number("TIMES", "10")),
        block_with_id("forever", "control_forever"),
        gap(),
        block("control_if"),
    ]);
    close_category(category)
}

pub fn sensing(_ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::SENSING);
    category.extend([
        block("sensing_touchingobject")
            .child(menu("TOUCHINGOBJECTMENU", "sensing_touchingobjectmenu")),
        block("sensing_touchingcolor").child(menu("COLOR", "colour_picker")),
        gap(),
        block("sensing_mousedown"),
        block("sensing_mousex"),
        block("sensing_mousey"),
    ]);
    close_category(category)
}

pub fn operators(_ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::OPERATORS);
    category.extend([
        block("operator_add")
            .child(empty_number("NUM1"))
            .child(empty_number("NUM2")),
        block("operator_subtract")
            .child(empty_number("NUM1"))
            .child(empty_number("NUM2")),
        gap(),
        block("operator_gt")
            .child(empty_text("OPERAND1"))
            .child(text("OPERAND2", "50")),
        block("operator_equals")
            .child(empty_text("OPERAND1"))
            .child(text("OPERAND2", "50")),
    ]);
    close_category(category)
}

pub fn data(_ctx: &SectionContext) -> Element {
    close_category(blocks::category(&blocks::DATA))
}

pub fn procedures(_ctx: &SectionContext) -> Element {
    close_category(blocks::category(&blocks::PROCEDURES))
}
