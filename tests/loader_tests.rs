use buildforge::error::BuildForgeError;
use buildforge::loader::{canonical_stat, load_catalog, load_roster, strip_markup};
use buildforge::scorer::SynergyTable;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn shipped(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = File::create(&path).unwrap();
    write!(f, "{}", content).unwrap();
    path
}

#[test]
fn shipped_roster_loads_and_resolves() {
    let roster = load_roster(shipped("champions.json")).unwrap();
    assert_eq!(roster.len(), 5);

    let lux = roster.resolve("99").unwrap();
    assert_eq!(lux.id, "Lux");
    assert_eq!(lux.spells.len(), 4);
    assert!(lux.passive.is_some());
    assert!(lux.has_tag("Mage"));
    assert_eq!(roster.resolve("sora").unwrap().id, "Soraka");
}

#[test]
fn shipped_catalog_is_sorted_and_mapped() {
    let items = load_catalog(shipped("items.json")).unwrap();
    assert!(items.windows(2).all(|w| w[0].id < w[1].id));

    let cap = items.iter().find(|i| i.id == "3089").unwrap();
    assert_eq!(cap.stat("ap"), 130.0);
    assert_eq!(cap.total_cost, 3600.0);
    assert!(cap.purchasable && cap.available_on_primary_map);

    let blade = items.iter().find(|i| i.id == "3177").unwrap();
    assert!(!blade.available_on_primary_map);

    let lich = items.iter().find(|i| i.id == "3100").unwrap();
    assert!(lich.stat("moveSpeed") > 0.0);
}

#[test]
fn shipped_synergy_table_loads() {
    let table = SynergyTable::load_from_file(shipped("synergy.csv")).unwrap();
    assert!(!table.is_empty());
    assert!(table.entries_for("Sylas").len() >= 4);
}

#[test]
fn missing_gold_means_not_purchasable() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "items.json",
        r#"{"9999": {"name": "Mystery", "description": "???", "maps": {"11": true}}}"#,
    );
    let items = load_catalog(&path).unwrap();
    assert_eq!(items.len(), 1);
    assert!(!items[0].purchasable);
    assert_eq!(items[0].total_cost, 0.0);
    assert!(items[0].stats.is_empty());
}

#[test]
fn both_movement_keys_merge() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "items.json",
        r#"{"data": {"1": {"stats": {"FlatMovementSpeedMod": 25, "PercentMovementSpeedMod": 0.05}}}}"#,
    );
    let items = load_catalog(&path).unwrap();
    assert!((items[0].stat("moveSpeed") - 25.05).abs() < 1e-4);
}

#[test]
fn champion_without_spells_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "champions.json",
        r#"{"type": "champion", "data": {"Nobody": {"name": "Nobody"}}}"#,
    );
    let roster = load_roster(&path).unwrap();
    let c = roster.resolve("nobody").unwrap();
    assert_eq!(c.id, "Nobody");
    assert!(c.passive.is_none());
    assert!(c.tags.is_empty());
}

#[test]
fn malformed_json_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "items.json", "{ not json");
    assert!(matches!(load_catalog(&path), Err(BuildForgeError::Json(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_roster(dir.path().join("absent.json")),
        Err(BuildForgeError::Io(_))
    ));
    assert!(matches!(
        load_catalog(dir.path().join("absent.json")),
        Err(BuildForgeError::Io(_))
    ));
    assert!(matches!(
        SynergyTable::load_from_file(dir.path().join("absent.csv")),
        Err(BuildForgeError::Io(_))
    ));
}

#[test]
fn stat_names() {
    assert_eq!(canonical_stat("FlatHPPoolMod"), "health");
    assert_eq!(canonical_stat("PercentAttackSpeedMod"), "attackSpeed");
    assert_eq!(canonical_stat("ap"), "ap");
}

#[test]
fn markup_helpers() {
    assert_eq!(strip_markup("<mainText>Hi<br>there</mainText>"), "Hi there");
    assert_eq!(strip_markup("plain"), "plain");
}
