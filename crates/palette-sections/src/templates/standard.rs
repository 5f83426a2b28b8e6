//! Standard (full-feature) template set.

use palette_model::Element;

use crate::blocks::{
    self, angle, block, block_with_id, close_category, empty_number, empty_text, gap, label,
    menu, number, positive_number, shadow_input, text, whole_number,
};
use crate::context::SectionContext;
use crate::templates::device_events;

pub fn motion(ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::MOTION);
    if ctx.is_stage() {
        category.push(label(&ctx.messages.stage_selected));
        return close_category(category);
    }
    category.extend([
        block("motion_movesteps").child(number("STEPS", "10")),
        block("motion_turnright").child(number("DEGREES", "15")),
        block("motion_turnleft").child(number("DEGREES", "15")),
        gap(),
        block("motion_goto").child(menu("TO", "motion_goto_menu")),
        block("motion_gotoxy")
            .child(number("X", "0"))
            .child(number("Y", "0")),
        block("motion_glideto")
            .child(number("SECS", "1"))
            .child(menu("TO", "motion_glideto_menu")),
        block("motion_glidesecstoxy")
            .child(number("SECS", "1"))
            .child(number("X", "0"))
            .child(number("Y", "0")),
        gap(),
        block("motion_pointindirection").child(angle("DIRECTION", "90")),
        block("motion_pointtowards").child(menu("TOWARDS", "motion_pointtowards_menu")),
        gap(),
        block("motion_changexby").child(number("DX", "10")),
        block("motion_setx").child(number("X", "0")),
        block("motion_changeyby").child(number("DY", "10")),
        block("motion_sety").child(number("Y", "0")),
        gap(),
        block("motion_ifonedgebounce"),
        gap(),
        block("motion_setrotationstyle"),
        gap(),
        block_with_id(&ctx.scoped_id("xposition"), "motion_xposition"),
        block_with_id(&ctx.scoped_id("yposition"), "motion_yposition"),
        block_with_id(&ctx.scoped_id("direction"), "motion_direction"),
    ]);
    close_category(category)
}

pub fn looks(ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::LOOKS);
    let backdrop = || {
        shadow_input(
            "BACKDROP",
            "looks_backdrops",
            "BACKDROP",
            Some(&ctx.defaults.backdrop),
        )
    };
    if ctx.is_stage() {
        category.extend([
            block("looks_switchbackdropto").child(backdrop()),
            block("looks_switchbackdroptoandwait").child(backdrop()),
            block("looks_nextbackdrop"),
            gap(),
        ]);
    } else {
        category.extend([
            block("looks_sayforsecs")
                .child(text("MESSAGE", &ctx.messages.hello))
                .child(number("SECS", "2")),
            block("looks_say").child(text("MESSAGE", &ctx.messages.hello)),
            block("looks_thinkforsecs")
                .child(text("MESSAGE", &ctx.messages.hmm))
                .child(number("SECS", "2")),
            block("looks_think").child(text("MESSAGE", &ctx.messages.hmm)),
            gap(),
            block("looks_switchcostumeto").child(shadow_input(
                "COSTUME",
                "looks_costume",
                "COSTUME",
                Some(&ctx.defaults.costume),
            )),
            block("looks_nextcostume"),
            block("looks_switchbackdropto").child(backdrop()),
            block("looks_nextbackdrop"),
            gap(),
            block("looks_changesizeby").child(number("CHANGE", "10")),
            block("looks_setsizeto").child(number("SIZE", "100")),
            gap(),
        ]);
    }
    category.extend([
        block("looks_changeeffectby").child(number("CHANGE", "25")),
        block("looks_seteffectto").child(number("VALUE", "0")),
        block("looks_cleargraphiceffects"),
        gap(),
    ]);
    if !ctx.is_stage() {
        category.extend([
            block("looks_show"),
            block("looks_hide"),
            gap(),
            block("looks_gotofrontback"),
            block("looks_goforwardbackwardlayers").child(whole_number("NUM", "1")),
            block_with_id(&ctx.scoped_id("costumenumbername"), "looks_costumenumbername"),
        ]);
    }
    category.push(block_with_id(
        &ctx.scoped_id("backdropnumbername"),
        "looks_backdropnumbername",
    ));
    if !ctx.is_stage() {
        category.push(block_with_id(&ctx.scoped_id("size"), "looks_size"));
    }
    close_category(category)
}

pub fn sound(ctx: &SectionContext) -> Element {
    let sound_menu = || {
        shadow_input(
            "SOUND_MENU",
            "sound_sounds_menu",
            "SOUND_MENU",
            Some(&ctx.defaults.sound),
        )
    };
    let mut category = blocks::category(&blocks::SOUND);
    category.extend([
        block("sound_playuntildone").child(sound_menu()),
        block_with_id(&ctx.scoped_id("sound_play"), "sound_play").child(sound_menu()),
        block("sound_stopallsounds"),
        gap(),
        block("sound_changeeffectby").child(number("VALUE", "10")),
        block("sound_seteffectto").child(number("VALUE", "100")),
        block("sound_cleareffects"),
        gap(),
        block("sound_changevolumeby").child(number("VOLUME", "-10")),
        block("sound_setvolumeto").child(number("VOLUME", "100")),
        block_with_id(&ctx.scoped_id("volume"), "sound_volume"),
    ]);
    close_category(category)
}

pub fn event(ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::EVENT);
    if let Some(device) = ctx.device.as_ref().filter(|_| ctx.is_device_upload()) {
        category.extend(device_events(device));
        return close_category(category);
    }
    category.extend([
        block("event_whenflagclicked"),
        block("event_whenkeypressed"),
        if ctx.is_stage() {
            block("event_whenstageclicked")
        } else {
            block("event_whenthisspriteclicked")
        },
        block("event_whenbackdropswitchesto"),
        gap(),
        block("event_whengreaterthan").child(number("VALUE", "10")),
        gap(),
        block("event_whenbroadcastreceived"),
        block("event_broadcast").child(menu("BROADCAST_INPUT", "event_broadcast_menu")),
        block("event_broadcastandwait").child(menu("BROADCAST_INPUT", "event_broadcast_menu")),
    ]);
    close_category(category)
}

pub fn control(ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::CONTROL);
    category.extend([
        block("control_wait").child(positive_number("DURATION", "1")),
        gap(),
        block("control_repeat").child(whole_number("TIMES", "10")),
        block_with_id("forever", "control_forever"),
        gap(),
        block("control_if"),
        block("control_if_else"),
        block_with_id("wait_until", "control_wait_until"),
        block_with_id("repeat_until", "control_repeat_until"),
        gap(),
        block("control_stop"),
    ]);
    if ctx.mode.is_realtime() {
        category.push(gap());
        if ctx.is_stage() {
            category.push(
                block("control_create_clone_of")
                    .child(menu("CLONE_OPTION", "control_create_clone_of_menu")),
            );
        } else {
            category.extend([
                block("control_start_as_clone"),
                block("control_create_clone_of")
                    .child(menu("CLONE_OPTION", "control_create_clone_of_menu")),
                block("control_delete_this_clone"),
            ]);
        }
    }
    close_category(category)
}

pub fn sensing(ctx: &SectionContext) -> Element {
    let mut category = blocks::category(&blocks::SENSING);
    if !ctx.is_stage() {
        category.extend([
            block("sensing_touchingobject")
                .child(menu("TOUCHINGOBJECTMENU", "sensing_touchingobjectmenu")),
            block("sensing_touchingcolor").child(menu("COLOR", "colour_picker")),
            block("sensing_coloristouchingcolor")
                .child(menu("COLOR", "colour_picker"))
                .child(menu("COLOR2", "colour_picker")),
            block("sensing_distanceto").child(menu("DISTANCETOMENU", "sensing_distancetomenu")),
            gap(),
        ]);
    }
    category.extend([
        block_with_id("askandwait", "sensing_askandwait")
            .child(text("QUESTION", &ctx.messages.question)),
        block_with_id("answer", "sensing_answer"),
        gap(),
        block("sensing_keypressed").child(menu("KEY_OPTION", "sensing_keyoptions")),
        block("sensing_mousedown"),
        block("sensing_mousex"),
        block("sensing_mousey"),
    ]);
    if !ctx.is_stage() {
        category.extend([gap(), block_with_id("setdragmode", "sensing_setdragmode")]);
    }
    category.extend([
        gap(),
        block_with_id("loudness", "sensing_loudness"),
        gap(),
        block_with_id("timer", "sensing_timer"),
        block("sensing_resettimer"),
        gap(),
        block_with_id("of", "sensing_of").child(menu("OBJECT", "sensing_of_object_menu")),
        gap(),
        block_with_id("current", "sensing_current"),
        block("sensing_dayssince2000"),
        gap(),
        block("sensing_username"),
    ]);
    close_category(category)
}

pub fn operators(ctx: &SectionContext) -> Element {
    let apple = ctx.messages.apple.as_str();
    let banana = ctx.messages.banana.as_str();
    let binary = |opcode: &str| {
        block(opcode)
            .child(empty_number("NUM1"))
            .child(empty_number("NUM2"))
    };
    let compare = |opcode: &str| {
        block(opcode)
            .child(empty_text("OPERAND1"))
            .child(text("OPERAND2", "50"))
    };
    let mut category = blocks::category(&blocks::OPERATORS);
    category.extend([
        binary("operator_add"),
        binary("operator_subtract"),
        binary("operator_multiply"),
        binary("operator_divide"),
        gap(),
        block("operator_random")
            .child(number("FROM", "1"))
            .child(number("TO", "10")),
        gap(),
        compare("operator_gt"),
        compare("operator_lt"),
        compare("operator_equals"),
        gap(),
        block("operator_and"),
        block("operator_or"),
        block("operator_not"),
        gap(),
        block("operator_join")
            .child(text("STRING1", &format!("{apple} ")))
            .child(text("STRING2", banana)),
        block("operator_letter_of")
            .child(whole_number("LETTER", "1"))
            .child(text("STRING", apple)),
        block("operator_length").child(text("STRING", apple)),
        block("operator_contains")
            .child(text("STRING1", apple))
            .child(text("STRING2", "a")),
        gap(),
        binary("operator_mod"),
        block("operator_round").child(empty_number("NUM")),
        gap(),
        block("operator_mathop").child(empty_number("NUM")),
    ]);
    close_category(category)
}

pub fn data(_ctx: &SectionContext) -> Element {
    close_category(blocks::category(&blocks::DATA))
}

pub fn procedures(_ctx: &SectionContext) -> Element {
    close_category(blocks::category(&blocks::PROCEDURES))
}
