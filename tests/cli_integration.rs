use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn stockpile(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockpile").unwrap();
    cmd.current_dir(dir)
        .env("STOCKPILE_CONFIG_DIR", dir.join("config"))
        .env_remove("STOCKPILE_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn read_inventory(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_add_list_delete_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    stockpile(dir)
        .args(["add", "Widget", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added: Widget (Stock: 12)"));
    stockpile(dir).args(["add", "Gadget", "0"]).assert().success();

    stockpile(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Widget (Stock: 12)"))
        .stdout(predicate::str::contains("[2] Gadget (Stock: 0)"));

    stockpile(dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item [1] deleted: Widget"));

    let on_disk = read_inventory(&dir.join("inventory.json"));
    assert_eq!(on_disk, serde_json::json!([{"name": "Gadget", "stock": 0}]));
}

#[test]
fn test_list_empty_inventory() {
    let temp_dir = TempDir::new().unwrap();

    stockpile(temp_dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items in inventory."));

    // Listing never creates the file
    assert!(!temp_dir.path().join("inventory.json").exists());
}

#[test]
fn test_invalid_stock_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();

    stockpile(temp_dir.path())
        .args(["add", "Widget", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));

    stockpile(temp_dir.path())
        .args(["add", "Widget", "-4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));

    assert!(!temp_dir.path().join("inventory.json").exists());
}

#[test]
fn test_delete_out_of_range_leaves_file_alone() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    stockpile(dir).args(["add", "Widget", "12"]).assert().success();
    let before = fs::read_to_string(dir.join("inventory.json")).unwrap();

    stockpile(dir)
        .args(["rm", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    let after = fs::read_to_string(dir.join("inventory.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_file_flag_and_env_select_inventory() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    stockpile(dir)
        .args(["--file", "shop.json", "add", "Widget", "1"])
        .assert()
        .success();
    assert!(dir.join("shop.json").exists());
    assert!(!dir.join("inventory.json").exists());

    stockpile(dir)
        .env("STOCKPILE_FILE", dir.join("shop.json"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Widget (Stock: 1)"));
}

#[test]
fn test_corrupt_file_is_fatal_unless_configured() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("inventory.json"), "not json at all").unwrap();

    stockpile(dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load inventory"));

    stockpile(dir)
        .args(["config", "on-load-error", "empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on-load-error = empty"));

    stockpile(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items in inventory."));

    // The broken file is only replaced by the next save
    assert_eq!(
        fs::read_to_string(dir.join("inventory.json")).unwrap(),
        "not json at all"
    );
    stockpile(dir).args(["add", "Widget", "3"]).assert().success();
    assert_eq!(
        read_inventory(&dir.join("inventory.json")),
        serde_json::json!([{"name": "Widget", "stock": 3}])
    );
}

#[test]
fn test_config_inventory_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    stockpile(dir)
        .args(["config", "inventory-file", "data/stock.json"])
        .assert()
        .success();

    stockpile(dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("inventory-file = data/stock.json"))
        .stdout(predicate::str::contains("on-load-error = fail"));

    stockpile(dir).args(["add", "Widget", "2"]).assert().success();
    assert!(dir.join("data").join("stock.json").exists());
}

#[test]
fn test_hand_written_config_with_empty_policy() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::create_dir_all(dir.join("config")).unwrap();
    fs::write(
        dir.join("config").join("config.json"),
        r#"{"on-load-error": "empty"}"#,
    )
    .unwrap();
    fs::write(dir.join("inventory.json"), "not json at all").unwrap();

    stockpile(dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("on-load-error = empty"));

    stockpile(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items in inventory."));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    stockpile(dir)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot set colour"));
    assert!(!dir.join("config").join("config.json").exists());
}
