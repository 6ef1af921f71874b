//! CLI-level tests: in-place rewrite, dry runs, re-runs, I/O failures.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const CSS: &str = r#"        :root {
            --orange-primary: #E65100;
            --purple-lighter: #F3E5F5;
            --yellow-primary: #F9A825;
        }
"#;

const JS: &str = "const slideDuration = 5000;\n";

fn write_fixture(root: &Path) {
    let assets = root.join("assets");
    fs::create_dir_all(&assets).unwrap();
    fs::write(assets.join("shared-styles.css"), CSS).unwrap();
    fs::write(assets.join("shared-scripts.js"), JS).unwrap();
}

fn restyle() -> Command {
    Command::cargo_bin("restyle").unwrap()
}

#[test]
fn rewrites_both_assets_in_place() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());

    restyle()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("root-tokens"))
        .stdout(predicate::str::contains(":root blocks found"));

    let css = fs::read_to_string(tmp.path().join("assets/shared-styles.css")).unwrap();
    assert!(css.contains("--orange-primary: #EC6303;"));
    assert!(css.contains("--purple-dark: #081E52;"));
    assert!(!css.contains("#E65100"));

    let js = fs::read_to_string(tmp.path().join("assets/shared-scripts.js")).unwrap();
    assert_eq!(js, "const slideDuration = 6000;\n");
}

#[test]
fn dry_run_reports_but_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());

    restyle()
        .current_dir(tmp.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run: no files were written"))
        .stdout(predicate::str::contains("+ "));

    assert_eq!(
        fs::read_to_string(tmp.path().join("assets/shared-styles.css")).unwrap(),
        CSS
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("assets/shared-scripts.js")).unwrap(),
        JS
    );
}

#[test]
fn second_run_changes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());

    restyle().current_dir(tmp.path()).assert().success();
    let css_once = fs::read_to_string(tmp.path().join("assets/shared-styles.css")).unwrap();
    let js_once = fs::read_to_string(tmp.path().join("assets/shared-scripts.js")).unwrap();

    restyle().current_dir(tmp.path()).assert().success();
    let css_twice = fs::read_to_string(tmp.path().join("assets/shared-styles.css")).unwrap();
    let js_twice = fs::read_to_string(tmp.path().join("assets/shared-scripts.js")).unwrap();

    assert_eq!(css_once, css_twice);
    assert_eq!(js_once, js_twice);
}

#[test]
fn quiet_mode_still_surfaces_warnings() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = tmp.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    // A banished value with no matching declaration pattern survives the
    // pipeline; only the verification warning reports it.
    fs::write(assets.join("shared-styles.css"), ".x { color: #757575; }\n").unwrap();
    fs::write(assets.join("shared-scripts.js"), JS).unwrap();

    restyle()
        .current_dir(tmp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: #757575 (--gray-600)"))
        .stdout(predicate::str::contains("root-tokens").not());
}

#[test]
fn missing_stylesheet_fails_but_script_is_still_processed() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = tmp.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    fs::write(assets.join("shared-scripts.js"), JS).unwrap();

    restyle()
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("shared-styles.css"));

    // The script's own read/transform/write cycle completed regardless.
    let js = fs::read_to_string(assets.join("shared-scripts.js")).unwrap();
    assert_eq!(js, "const slideDuration = 6000;\n");
}

#[test]
fn custom_asset_locations_are_honored() {
    let tmp = tempfile::tempdir().unwrap();
    let theme = tmp.path().join("theme");
    fs::create_dir_all(&theme).unwrap();
    fs::write(theme.join("site.css"), CSS).unwrap();
    fs::write(theme.join("site.js"), JS).unwrap();

    restyle()
        .current_dir(tmp.path())
        .args([
            "--assets-dir",
            "theme",
            "--stylesheet",
            "site.css",
            "--script",
            "site.js",
        ])
        .assert()
        .success();

    let css = fs::read_to_string(theme.join("site.css")).unwrap();
    assert!(css.contains("#EC6303"));
}
