use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created"));

    let content = test.read_file(".transcovrc.json")?;
    let config: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(config["includes"], json!(["src"]));
    assert_eq!(config["translationFiles"], json!(["locales/**/*.json"]));
    assert_eq!(config["defaultNamespace"], json!("translation"));
    assert_eq!(config["reportPath"], json!(".transcov/translations-report.json"));
    assert_eq!(config["failOnMissing"], json!(false));
    assert_eq!(config["unusedMatching"], json!("normalized"));
    assert!(config.get("languages").is_none());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transcovrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("already exists"));
    assert_eq!(test.read_file(".transcovrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file("src/app.tsx", r#"export const App = () => <p>{t("home.title")}</p>;"#)?;
    test.write_file("locales/en/home.json", r#"{ "title": "Home" }"#)?;

    let output = test.check_command().output()?;

    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout(&output).contains("All 1 key translated in 1 language"));

    Ok(())
}
