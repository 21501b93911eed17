use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_reports_unlocalized_multibyte_literals() -> Result<()> {
    let test = CliTest::seeded()?;
    test.write_file(
        "Sources/Settings.swift",
        r#"let identifier = "SettingsCell"
titleLabel.text = "設定"
detail.text = NSLocalizedString("Detail", comment: "詳細")
print("デバッグ")
// footer.text = "フッター"
hint.text = "ヒント" + "!" // "無視"
"#,
    )?;

    let mut cmd = test.command();
    cmd.arg("--check");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("retrieve 1 literal\n"), "{stdout}");
    assert!(stdout.contains("Settings.swift:2: 設定"), "{stdout}");
    for skipped in ["詳細", "デバッグ", "フッター", "ヒント", "無視", "SettingsCell"] {
        assert!(!stdout.contains(skipped), "{skipped} should be skipped:\n{stdout}");
    }
    Ok(())
}

#[test]
fn test_check_never_writes() -> Result<()> {
    let test = CliTest::seeded()?;
    test.write_file(
        "Sources/Home.swift",
        r#"title = NSLocalizedString("Home", comment: "ホーム")"#,
    )?;

    let mut cmd = test.command();
    cmd.arg("-c");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Scanned 1 file, found 0 literals"), "{stdout}");
    assert_eq!(test.read_file("ja.lproj/Localizable.strings")?, "");
    Ok(())
}

#[test]
fn test_check_does_not_need_resource_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Main.swift", "let greeting = \"こんにちは\"\n")?;

    let mut cmd = test.command();
    cmd.arg("--check");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Main.swift:1: こんにちは"), "{stdout}");
    Ok(())
}
