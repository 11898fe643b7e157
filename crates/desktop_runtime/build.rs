use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Timings {
    click_intent_ms: u32,
    tooltip_arm_ms: u32,
    billing_tick_ms: u32,
    billing_popup_ms: u32,
    icon_flash_ms: u32,
    cheat_phase_two_ms: u32,
    cheat_end_ms: u32,
    clock_refresh_ms: u32,
}

#[derive(Debug, Deserialize)]
struct Billing {
    hourly_rate: u32,
    closing_remarks: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Cheat {
    sequence: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct Link {
    url: String,
}

#[derive(Debug, Deserialize)]
struct Activatable {
    id: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct Group {
    id: String,
    icons: Vec<Activatable>,
}

#[derive(Debug, Default, Deserialize)]
struct Session {
    #[serde(default)]
    account_links: Vec<Link>,
}

#[derive(Debug, Deserialize)]
struct CatalogSchema {
    schema_version: u32,
    timings: Timings,
    billing: Billing,
    cheat: Cheat,
    assistant: Activatable,
    upgrade_link: Link,
    #[serde(default)]
    session: Session,
    #[serde(default)]
    taskbar_links: Vec<Link>,
    start_menu: Vec<Link>,
    footer_links: Vec<Link>,
    groups: Vec<Group>,
}

fn validate(catalog: &CatalogSchema) -> Result<(), String> {
    if catalog.schema_version != 1 {
        return Err(format!(
            "schema mismatch: expected 1 found {}",
            catalog.schema_version
        ));
    }

    let t = &catalog.timings;
    let timings = [
        ("click_intent_ms", t.click_intent_ms),
        ("tooltip_arm_ms", t.tooltip_arm_ms),
        ("billing_tick_ms", t.billing_tick_ms),
        ("billing_popup_ms", t.billing_popup_ms),
        ("icon_flash_ms", t.icon_flash_ms),
        ("cheat_phase_two_ms", t.cheat_phase_two_ms),
        ("cheat_end_ms", t.cheat_end_ms),
        ("clock_refresh_ms", t.clock_refresh_ms),
    ];
    for (name, value) in timings {
        if value == 0 {
            return Err(format!("timing `{name}` must be positive"));
        }
    }
    if t.cheat_end_ms <= t.cheat_phase_two_ms {
        return Err("cheat_end_ms must come after cheat_phase_two_ms".to_string());
    }

    if catalog.billing.hourly_rate == 0 {
        return Err("billing.hourly_rate must be positive".to_string());
    }
    if catalog.billing.closing_remarks.is_empty() {
        return Err("billing.closing_remarks must not be empty".to_string());
    }
    if catalog.cheat.sequence.is_empty() {
        return Err("cheat.sequence must not be empty".to_string());
    }

    let mut ids = BTreeSet::new();
    let mut group_ids = BTreeSet::new();
    let activatables = catalog
        .groups
        .iter()
        .flat_map(|group| group.icons.iter())
        .chain(std::iter::once(&catalog.assistant));
    for entry in activatables {
        if !ids.insert(entry.id.as_str()) {
            return Err(format!("duplicate activatable id `{}`", entry.id));
        }
        if entry.url.trim().is_empty() {
            return Err(format!("activatable `{}` has an empty url", entry.id));
        }
    }
    for group in &catalog.groups {
        if !group_ids.insert(group.id.as_str()) {
            return Err(format!("duplicate group id `{}`", group.id));
        }
    }

    let links = catalog
        .start_menu
        .iter()
        .chain(catalog.footer_links.iter())
        .chain(catalog.taskbar_links.iter())
        .chain(catalog.session.account_links.iter())
        .chain(std::iter::once(&catalog.upgrade_link));
    for link in links {
        if link.url.trim().is_empty() {
            return Err("chrome link with an empty url".to_string());
        }
    }

    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog").join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let value: toml::Value = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    let schema: CatalogSchema = value
        .clone()
        .try_into()
        .unwrap_or_else(|err| panic!("invalid catalog shape in {}: {err}", path.display()));
    if let Err(reason) = validate(&schema) {
        panic!("invalid catalog {}: {reason}", path.display());
    }

    let json = serde_json::to_string_pretty(&value).expect("serialize desktop catalog");
    let generated = format!(
        "/// Build-time generated desktop catalog JSON.\n\
pub const DESKTOP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
