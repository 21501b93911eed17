use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const HOME_SWIFT: &str = r#"import UIKit

class HomeViewController: UIViewController {
    override func viewDidLoad() {
        title = NSLocalizedString("Home", comment: "ホーム")
        label1.text = NSLocalizedString("English Label 1", comment: "日本語のラベル1")NSLocalizedString("English Label 2", comment: "日本語のラベル2")
    }
}
"#;

const ALERT_SWIFT: &str = r#"let ok = NSLocalizedString("OK", comment: "了解")
let home = NSLocalizedString("Home", comment: "ホーム画面")
"#;

#[test]
fn test_writes_base_and_translation_files() -> Result<()> {
    let test = CliTest::seeded()?;
    test.write_file("Sources/Home.swift", HOME_SWIFT)?;

    let (code, _, _) = run(test.command())?;

    assert_eq!(code, 0);
    assert_snapshot!(test.read_file("Base.lproj/Localizable.strings")?, @r#"
    "English Label 1" = "English Label 1";
    "English Label 2" = "English Label 2";
    "Home" = "Home";
    "#);
    assert_snapshot!(test.read_file("ja.lproj/Localizable.strings")?, @r#"
    "English Label 1" = "日本語のラベル1";
    "English Label 2" = "日本語のラベル2";
    "Home" = "ホーム";
    "#);
    Ok(())
}

#[test]
fn test_progress_lists_every_file() -> Result<()> {
    let test = CliTest::seeded()?;
    test.write_file("Sources/Home.swift", HOME_SWIFT)?;
    test.write_file("Sources/Empty.swift", "import Foundation\n")?;

    let (_, stdout, _) = run(test.command())?;

    assert!(stdout.contains("retrieve 0 strings"), "{stdout}");
    assert!(stdout.contains("retrieve 3 strings"), "{stdout}");
    assert!(stdout.contains("Home.swift:6: English Label 2 日本語のラベル2"), "{stdout}");
    assert!(stdout.contains("Scanned 2 files, found 3 strings"), "{stdout}");
    Ok(())
}

#[test]
fn test_duplicates_are_reported_but_not_fatal() -> Result<()> {
    let test = CliTest::seeded()?;
    test.write_file("Sources/Alert.swift", ALERT_SWIFT)?;
    test.write_file("Sources/Home.swift", HOME_SWIFT)?;

    let (code, stdout, _) = run(test.command())?;

    assert_eq!(code, 0);
    assert!(
        stdout.contains("Home ホーム画面 Alert.swift:2 <=> Home ホーム Home.swift:5"),
        "{stdout}"
    );
    Ok(())
}

#[test]
fn test_missing_resource_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Base.lproj/Localizable.strings", "")?;
    test.write_file("Sources/Alert.swift", ALERT_SWIFT)?;

    let (code, _, stderr) = run(test.command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("ja.lproj/Localizable.strings doesn't exist"), "{stderr}");
    assert!(!test.root().join("ja.lproj").exists());
    Ok(())
}

#[test]
fn test_dry_run_does_not_write() -> Result<()> {
    let test = CliTest::seeded()?;
    test.write_file("ja.lproj/Localizable.strings", "\"Old\" = \"古い\";\n")?;
    test.write_file("Sources/Alert.swift", ALERT_SWIFT)?;

    let mut cmd = test.command();
    cmd.arg("--dry-run");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("(2 entries, 2 added, 1 removed, 0 changed)"), "{stdout}");
    assert_eq!(test.read_file("ja.lproj/Localizable.strings")?, "\"Old\" = \"古い\";\n");
    assert_eq!(test.read_file("Base.lproj/Localizable.strings")?, "");
    Ok(())
}

#[test]
fn test_positional_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("App/Base.lproj/Localizable.strings", "")?;
    test.write_file("App/ja.lproj/Localizable.strings", "")?;
    test.write_file("App/Sources/Alert.swift", ALERT_SWIFT)?;

    let mut cmd = test.command();
    cmd.arg("App");
    let (code, _, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        test.read_file("App/ja.lproj/Localizable.strings")?,
        "\"Home\" = \"ホーム画面\";\n\"OK\" = \"了解\";\n"
    );
    Ok(())
}

#[test]
fn test_config_locales_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".swiftlocrc.json",
        r#"{
            "ignores": ["Pods"],
            "locales": [
                { "name": "Base", "field": "base" },
                { "name": "zh-Hans", "field": "translation" }
            ]
        }"#,
    )?;
    test.write_file("Base.lproj/Localizable.strings", "")?;
    test.write_file("zh-Hans.lproj/Localizable.strings", "")?;
    test.write_file("Sources/Alert.swift", ALERT_SWIFT)?;
    test.write_file(
        "Pods/Vendor/Vendor.swift",
        r#"let v = NSLocalizedString("Vendor", comment: "ベンダー")"#,
    )?;

    let (code, _, _) = run(test.command())?;

    assert_eq!(code, 0);
    assert_eq!(
        test.read_file("zh-Hans.lproj/Localizable.strings")?,
        "\"Home\" = \"ホーム画面\";\n\"OK\" = \"了解\";\n"
    );
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::seeded()?;
    test.write_file(".swiftlocrc.json", r#"{ "sourceExtensions": [] }"#)?;

    let (code, _, stderr) = run(test.command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("'sourceExtensions' must not be empty"), "{stderr}");
    Ok(())
}
