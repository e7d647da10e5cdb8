//! Script replay through the public API

use crate::common::site;
use std::fs;
use tempfile::TempDir;
use vitrine::config::Config;
use vitrine::replay::{self, Script, Step};
use vitrine::{Intent, ViewError};

#[test]
fn test_replay_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let script_path = temp_dir.path().join("session.json");
    fs::write(
        &script_path,
        r#"{"steps": [
            {"intent": "menu_open"},
            {"event": {"click": {"nav_link": "about"}}},
            {"intent": {"navigate": "blog"}}
        ]}"#,
    )?;

    let site = site()?;
    let mut store = site.store();
    let script = Script::load_from(&script_path)?;
    let transcript = replay::run(&script, &mut store, &mut site.translator());

    assert_eq!(transcript.entries.len(), 3);
    assert_eq!(
        transcript.entries[2].error.as_deref(),
        Some(ViewError::SectionNotFound("blog".to_string()).to_string().as_str())
    );
    let last = transcript.final_snapshot().ok_or("no entries")?;
    assert!(!last.menu.is_open);
    assert_eq!(last.active_section.as_ref().map(|s| s.as_str()), Some("about"));
    Ok(())
}

#[test]
fn test_replay_with_custom_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("site.json");
    let config = Config {
        scroll_threshold: 400.0,
        ..Config::default()
    };
    config.save_to(&config_path)?;

    let site = Config::load_from(&config_path)?.build()?;
    let mut store = site.store();
    let script = Script {
        steps: vec![
            Step::Intent(Intent::ScrollSampled(120.0)),
            Step::Intent(Intent::ScrollSampled(401.0)),
        ],
    };

    let transcript = replay::run(&script, &mut store, &mut site.translator());

    assert!(!transcript.entries[0].snapshot.scroll.is_past_threshold);
    assert!(transcript.entries[1].snapshot.scroll.is_past_threshold);
    assert_eq!(transcript.notifications, 1);
    Ok(())
}

#[test]
fn test_missing_script_file() {
    let result = Script::load_from(std::path::Path::new("/nonexistent/vitrine/script.json"));
    assert!(result.is_err());
}
