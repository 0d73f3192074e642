use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const APP: &str = r#"import { Trans, useTranslation } from "react-i18next";

export function App({ name }: { name: string }) {
  const { t } = useTranslation();
  return (
    <div>
      <h1>{t("common.hello")}</h1>
      <p>{t("common.bye", { defaultValue: "Bye" })}</p>
      <Trans i18nKey="common.welcome" />
      <span>{t(name)}</span>
    </div>
  );
}
"#;

const EN_COMMON: &str = r#"{
  "hello": "Hello",
  "bye": "Bye",
  "welcome": "Welcome",
  "stale": "Old text"
}"#;

const FR_COMMON: &str = r#"{ "hello": "Bonjour" }"#;

const REPORT_PATH: &str = ".transcov/translations-report.json";

fn sample_project() -> Result<CliTest> {
    CliTest::with_files(&[
        ("src/App.tsx", APP),
        ("locales/en/common.json", EN_COMMON),
        ("locales/fr/common.json", FR_COMMON),
    ])
}

#[test]
fn test_check_reports_missing_translations() -> Result<()> {
    let test = sample_project()?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(out.contains("warning: \"common.bye\"  missing-translation"));
    assert!(out.contains("warning: \"common.welcome\"  missing-translation"));
    assert!(out.contains("src/App.tsx:8:11"));
    assert!(out.contains("= note: missing in 'fr' (namespace 'common'), default value \"Bye\""));
    assert!(out.contains("  en  100%  0 missing, 1 unused"));
    assert!(out.contains("  fr   33%  2 missing, 0 unused"));
    assert!(out.contains(
        "2 missing translations across 1 language (3 keys, 1 source file, 2 translation files checked)"
    ));
    assert!(out.contains("1 unused, 1 dynamic usage (use -v for details)"));
    assert!(!out.contains("unused-translation"));
    assert!(!out.contains("dynamic-key"));

    Ok(())
}

#[test]
fn test_check_writes_report() -> Result<()> {
    let test = sample_project()?;

    let output = test.check_command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Report written to"));

    let report = test.read_json(REPORT_PATH)?;
    assert_eq!(report["totalKeys"], json!(3));
    assert_eq!(report["languages"], json!(["en", "fr"]));
    assert_eq!(report["unused"]["en"], json!(["common.stale"]));
    assert_eq!(report["unused"]["fr"], json!([]));
    assert_eq!(report["summary"]["totalMissing"], json!(2));
    assert_eq!(report["summary"]["coveragePercent"], json!({"en": 100, "fr": 33}));
    assert_eq!(report["dynamicKeys"].as_array().map(Vec::len), Some(1));
    assert_eq!(report["extractedKeys"].as_array().map(Vec::len), Some(3));

    let missing = report["missing"]["fr"].as_array().unwrap();
    assert_eq!(missing[0]["key"], json!("common.bye"));
    assert_eq!(missing[0]["defaultValue"], json!("Bye"));
    assert_eq!(missing[0]["usedIn"][0]["line"], json!(8));
    assert_eq!(missing[0]["usedIn"][0]["column"], json!(10));
    assert_eq!(missing[1]["key"], json!("common.welcome"));
    assert!(missing[1].get("defaultValue").is_none());

    let timestamp = report["timestamp"].as_str().unwrap();
    assert!(timestamp.ends_with('Z'));
    assert_eq!(timestamp.len(), "2024-01-01T00:00:00.000Z".len());

    Ok(())
}

#[test]
fn test_check_verbose_lists_unused_and_dynamic() -> Result<()> {
    let test = sample_project()?;

    let output = test.check_command().arg("-v").output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("warning: \"common.stale\"  unused-translation"));
    assert!(out.contains("--> language 'en'"));
    assert!(out.contains("warning: \"<dynamic>\"  dynamic-key"));
    assert!(out.contains("src/App.tsx:10:14"));
    assert!(!out.contains("use -v for details"));

    Ok(())
}

#[test]
fn test_fail_on_missing_flag() -> Result<()> {
    let test = sample_project()?;

    let output = test.check_command().arg("--fail-on-missing").output()?;

    assert_eq!(output.status.code(), Some(1));
    // The report is still written before the gate applies
    assert!(test.root().join(REPORT_PATH).exists());

    Ok(())
}

#[test]
fn test_fail_on_missing_from_config() -> Result<()> {
    let test = sample_project()?;
    test.write_file(".transcovrc.json", r#"{ "failOnMissing": true }"#)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    // Restricting to a fully translated language passes the gate
    let output = test.check_command().args(["--language", "en"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_language_flag_restricts_report() -> Result<()> {
    let test = sample_project()?;

    let output = test
        .check_command()
        .args(["-l", "en", "-l", "de"])
        .output()?;
    assert!(output.status.success());

    let report = test.read_json(REPORT_PATH)?;
    assert_eq!(report["languages"], json!(["en", "de"]));
    assert_eq!(report["summary"]["coveragePercent"]["de"], json!(0));
    assert_eq!(report["missing"]["de"].as_array().map(Vec::len), Some(3));
    assert!(report["missing"].get("fr").is_none());

    Ok(())
}

#[test]
fn test_no_report_and_custom_report_path() -> Result<()> {
    let test = sample_project()?;

    let output = test.check_command().arg("--no-report").output()?;
    assert!(output.status.success());
    assert!(!test.root().join(REPORT_PATH).exists());
    assert!(!stdout(&output).contains("Report written"));

    let output = test
        .check_command()
        .args(["--report-path", "out/coverage.json"])
        .output()?;
    assert!(output.status.success());
    assert!(test.root().join("out/coverage.json").exists());

    Ok(())
}

#[test]
fn test_namespaced_keys_and_flat_layout() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "src/login.tsx",
            r#"export const Login = () => <h1>{t("auth:login.title")}{t("greeting")}</h1>;"#,
        ),
        ("locales/en.json", r#"{ "greeting": "Hi" }"#),
        ("locales/en/auth.json", r#"{ "login": { "title": "Log in" } }"#),
    ])?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("All 2 keys translated in 1 language (1 source file, 2 translation files checked)"));

    let report = test.read_json(REPORT_PATH)?;
    assert_eq!(report["unused"]["en"], json!([]));

    Ok(())
}

#[test]
fn test_emit_warnings_disabled() -> Result<()> {
    let test = sample_project()?;
    test.write_file(".transcovrc.json", r#"{ "emitWarnings": false }"#)?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(!out.contains("missing-translation"));
    assert!(out.contains("2 missing translations across 1 language"));

    Ok(())
}

#[test]
fn test_parse_and_resource_errors_are_reported() -> Result<()> {
    let test = sample_project()?;
    test.write_file("src/broken.tsx", "export const = ;")?;
    test.write_file("locales/de/common.json", r#"{ "hello": "#)?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("parse-error"));
    assert!(out.contains("src/broken.tsx"));
    assert!(out.contains("resource-error"));
    assert!(out.contains("locales/de/common.json"));
    // The broken language is skipped, the rest still loads
    let report = test.read_json(REPORT_PATH)?;
    assert_eq!(report["languages"], json!(["en", "fr"]));

    Ok(())
}

#[test]
fn test_config_includes_and_ignores() -> Result<()> {
    let test = sample_project()?;
    test.write_file(
        ".transcovrc.json",
        r#"{ "includes": ["src", "lib"], "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file("lib/extra.ts", r#"export const x = i18n.t("common.extra");"#)?;
    test.write_file("src/generated/keys.ts", r#"t("common.generated");"#)?;
    test.write_file("src/App.test.tsx", r#"t("common.from_test");"#)?;

    let output = test.check_command().output()?;
    assert!(output.status.success());

    let report = test.read_json(REPORT_PATH)?;
    assert_eq!(report["totalKeys"], json!(4));
    let keys: Vec<&str> = report["missing"]["en"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["key"].as_str())
        .collect();
    assert_eq!(keys, vec!["common.extra"]);

    Ok(())
}

#[test]
fn test_source_root_flag() -> Result<()> {
    let test = CliTest::with_files(&[
        ("web/src/App.tsx", r#"t("common.hello");"#),
        ("web/locales/en/common.json", r#"{ "hello": "Hello" }"#),
    ])?;

    let output = test
        .check_command()
        .args(["--source-root", "web"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("web").join(REPORT_PATH).exists());

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = sample_project()?;
    test.write_file(".transcovrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error:"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("check"));
    assert!(out.contains("init"));

    Ok(())
}
