//! Integration tests for configuration loading and the engine wiring.

use std::fs;

use tempfile::TempDir;

use palette_assembly::Origin;
use palette_cli::config::EngineConfig;
use palette_cli::engine::{Engine, RenderRequest, load_overrides, parse_override_arg};
use palette_model::{ExecutionMode, TemplateSet, Tier};
use palette_prefs::PreferenceStore;

const CONFIG: &str = r##"
storage_key = "learner_tier"
separator_gap = 24

[messages]
hello = "Hallo!"

[[categories]]
id = "pins"
name = "Pins"
colour = "#00A0A0"
secondary_colour = "#008080"
operations = [
    { opcode = "pin_setdigital", novice = true },
    { opcode = "pin_setpwm" },
]

[device_events]
arduino = ["event_whenarduinobegin", "event_whenarduinoloop"]
"##;

fn config_in(dir: &TempDir) -> EngineConfig {
    let mut config = EngineConfig::parse(CONFIG).expect("valid config");
    config.storage_path = Some(dir.path().join("prefs").join("palette-prefs.toml"));
    config
}

fn request(engine: &Engine, tier: Option<Tier>) -> RenderRequest {
    RenderRequest {
        tier,
        context: engine.context("sprite1"),
        overrides: Vec::new(),
    }
}

#[test]
fn parses_full_config() {
    let config = EngineConfig::parse(CONFIG).expect("valid config");
    assert_eq!(config.storage_key.as_deref(), Some("learner_tier"));
    assert_eq!(config.assembly_options().separator_gap, 24);
    assert_eq!(config.messages.hello, "Hallo!");
    assert_eq!(config.messages.apple, "apple");
    assert_eq!(config.categories.len(), 1);
    assert_eq!(
        config.device("arduino").event_blocks,
        vec!["event_whenarduinobegin", "event_whenarduinoloop"]
    );
    assert_eq!(
        config.order().default.last().map(|id| id.as_str()),
        Some("pins")
    );
}

#[test]
fn malformed_config_reports_context() {
    let err = EngineConfig::parse("separator_gap = \"wide\"").unwrap_err();
    assert!(format!("{err:#}").contains("parse config"));

    let duplicate = r##"
[[categories]]
id = "pins"
name = "Pins"
colour = "#000000"
secondary_colour = "#000000"

[[categories]]
id = "pins"
name = "Pins again"
colour = "#000000"
secondary_colour = "#000000"
"##;
    let err = EngineConfig::parse(duplicate).unwrap_err();
    assert!(format!("{err:#}").contains("validate categories"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = EngineConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("read config"));
}

#[test]
fn tier_survives_reopening_the_engine() {
    let dir = TempDir::new().unwrap();

    let engine = Engine::open(config_in(&dir)).unwrap();
    assert_eq!(engine.store().current(), None);
    assert!(engine.store().select("novice"));
    drop(engine);

    let stored = fs::read_to_string(config_in(&dir).storage_path()).unwrap();
    assert!(stored.contains("learner_tier = \"novice\""));

    let engine = Engine::open(config_in(&dir)).unwrap();
    assert_eq!(engine.store().current(), Some(Tier::Novice));
    let document = engine.render(&request(&engine, None)).unwrap();
    assert_eq!(
        document.origin("motion"),
        Some(Origin::Library(TemplateSet::Novice))
    );

    let explicit = engine
        .render(&request(&engine, Some(Tier::Standard)))
        .unwrap();
    assert_eq!(
        explicit.origin("motion"),
        Some(Origin::Library(TemplateSet::Standard))
    );
}

#[test]
fn configured_categories_and_gap_reach_the_document() {
    let engine = Engine::with_store(
        EngineConfig::parse(CONFIG).unwrap(),
        PreferenceStore::in_memory(),
    );
    let document = engine.render(&request(&engine, Some(Tier::Novice))).unwrap();

    let pins = document.section("pins").expect("catalog section");
    assert!(pins.contains("pin_setdigital"));
    assert!(!pins.contains("pin_setpwm"));
    assert_eq!(document.separator(), r#"<sep gap="24"/>"#);
    assert!(document.section("looks").is_some_and(|looks| looks.contains("Hallo!")));
}

#[test]
fn device_events_come_from_config() {
    let engine = Engine::with_store(
        EngineConfig::parse(CONFIG).unwrap(),
        PreferenceStore::in_memory(),
    );
    let context = engine
        .context("sprite1")
        .device(Some(engine.config().device("arduino")))
        .mode(ExecutionMode::Upload);
    let document = engine
        .render(&RenderRequest {
            tier: None,
            context,
            overrides: Vec::new(),
        })
        .unwrap();

    let event = document.section("event").expect("event section");
    assert!(event.contains("event_whenarduinoloop"));
    assert!(document.section("pins").is_none());
}

#[test]
fn override_files_replace_and_extend_sections() {
    let dir = TempDir::new().unwrap();
    let motion = dir.path().join("motion.xml");
    let pen = dir.path().join("pen.xml");
    fs::write(&motion, "<category id=\"motion\"/>\n").unwrap();
    fs::write(&pen, "<category id=\"pen\"/>\n").unwrap();

    let args = vec![
        parse_override_arg(&format!("pen={}", pen.display())).unwrap(),
        parse_override_arg(&format!("motion={}", motion.display())).unwrap(),
    ];
    let overrides = load_overrides(&args).unwrap();
    assert_eq!(overrides[0].xml, "<category id=\"pen\"/>");

    let engine = Engine::with_store(EngineConfig::default(), PreferenceStore::in_memory());
    let document = engine
        .render(&RenderRequest {
            tier: None,
            context: engine.context("sprite1"),
            overrides,
        })
        .unwrap();
    assert_eq!(document.origin("motion"), Some(Origin::Override));
    assert_eq!(document.origin("pen"), Some(Origin::Extension));
    assert_eq!(
        document.section_ids().last().map(|id| id.as_str()),
        Some("pen")
    );
}

#[test]
fn missing_override_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let args = vec![parse_override_arg(&format!("pen={}", dir.path().join("nope.xml").display())).unwrap()];
    let err = load_overrides(&args).unwrap_err();
    assert!(format!("{err:#}").contains("read override pen"));
}

#[test]
fn test_compact_palette_from_config() {
    let engine = Engine::with_store(
        EngineConfig::parse(CONFIG).unwrap(),
        PreferenceStore::in_memory(),
    );
    insta::assert_snapshot!(engine.compact().unwrap());
}

#[test]
fn partial_category_names_keep_default_labels() {
    let config = EngineConfig::parse(
        r#"
[messages.category_names]
motion = "Bewegung"
"#,
    )
    .unwrap();
    let engine = Engine::with_store(config, PreferenceStore::in_memory());
    let xml = engine.compact().unwrap();
    assert!(xml.contains("name=\"Bewegung\""), "{xml}");
    assert!(xml.contains("name=\"Sound\""), "{xml}");
    assert!(xml.contains("name=\"Control\""), "{xml}");
}

#[test]
fn compact_palette_defaults_to_young_learner_table() {
    let engine = Engine::with_store(EngineConfig::default(), PreferenceStore::in_memory());
    let xml = engine.compact().unwrap();
    assert!(xml.starts_with("<xml id=\"toolbox\" style=\"display: none\">"));
    for id in ["motion", "looks", "sounds", "events", "control"] {
        assert!(xml.contains(&format!("id=\"{id}\"")), "{id}");
    }
    assert!(xml.contains("<block type=\"control_wait_until\"/>"));
}
