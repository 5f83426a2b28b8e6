use anyhow::{Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::{info, info_span, warn};

use palette_cli::engine::{Engine, RenderRequest, load_overrides};
use palette_model::{ExampleDefaults, ExecutionMode, SectionId};

use crate::cli::{RenderArgs, TierAction};

pub fn run_render(engine: &Engine, args: &RenderArgs) -> Result<()> {
    let span = info_span!("render", target = %args.target_id);
    let _guard = span.enter();

    let device = args.device.as_deref().map(|kind| engine.config().device(kind));
    if args.mode == ExecutionMode::Upload && device.is_none() {
        bail!("--mode upload needs a connected --device");
    }
    let context = engine
        .context(&args.target_id)
        .initial_setup(args.initial_setup)
        .stage(args.stage)
        .device(device)
        .mode(args.mode)
        .defaults(ExampleDefaults {
            costume: args.costume.clone(),
            backdrop: args.backdrop.clone(),
            sound: args.sound.clone(),
        });
    let request = RenderRequest {
        tier: args.tier.map(Into::into),
        context,
        overrides: load_overrides(&args.overrides)?,
    };

    let document = engine.render(&request)?;
    if args.digest {
        println!("{}", document.digest());
    } else {
        println!("{document}");
    }
    Ok(())
}

pub fn run_compact(engine: &Engine) -> Result<()> {
    println!("{}", engine.compact()?);
    Ok(())
}

pub fn run_tier(engine: &Engine, action: &TierAction) -> Result<()> {
    let store = engine.store();
    match action {
        TierAction::Get => {}
        TierAction::Set { value } => {
            if store.select(value) {
                info!(tier = value.as_str(), "tier saved");
            } else {
                warn!(value = value.as_str(), "tier left unchanged");
            }
        }
        TierAction::Reset => {
            store.reset();
            info!(path = %engine.storage_path().display(), "tier cleared");
        }
    }
    let tier = store
        .current()
        .map_or("unset", |tier| tier.as_str());
    let profile = store.profile();
    println!(
        "{tier} (layout: {:?}, blocks: {:?}, templates: {})",
        profile.layout,
        profile.block_style,
        profile.template_set.as_str()
    );
    Ok(())
}

pub fn run_sections(engine: &Engine) -> Result<()> {
    let order = engine.assembler().order();
    let library = engine.assembler().library();
    let mut ids: Vec<&SectionId> = library.ids().collect();
    for id in order.default.iter().chain(&order.device_upload) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    let mut table = Table::new();
    table.set_header(vec!["Section", "Default", "Device upload", "Source"]);
    apply_table_style(&mut table);
    let position = |list: &[SectionId], id: &SectionId| {
        list.iter()
            .position(|entry| entry == id)
            .map_or_else(|| "-".to_string(), |index| (index + 1).to_string())
    };
    for id in ids {
        let source = if engine.config().categories.get(id.as_str()).is_some() {
            "catalog"
        } else if library.contains(id.as_str()) {
            "builtin"
        } else {
            "override only"
        };
        table.add_row(vec![
            id.to_string(),
            position(&order.default, id),
            position(&order.device_upload, id),
            source.to_string(),
        ]);
    }
    println!("{table}");

    let unresolved = order.unresolved(library);
    if !unresolved.is_empty() {
        let names: Vec<&str> = unresolved.iter().map(SectionId::as_str).collect();
        warn!(sections = %names.join(", "), "sections without templates need overrides");
    }
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}
