use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::error::Error;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

// RUST_BACKTRACE=1 cargo test --test cli_tests -- --nocapture

fn mimekind() -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("mimekind")?;
    cmd.env_remove("MIMEKIND_CONTENT_DEFAULT_CHARSET")
        .env_remove("MIMEKIND_CONTENT_HANDLERS_MAP");
    Ok(cmd)
}

#[test]
fn test_help_lists_subcommands() -> Result<(), Box<dyn Error>> {
    mimekind()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("header"))
        .stdout(predicate::str::contains("list"));
    Ok(())
}

#[test]
fn test_missing_subcommand_fails() -> Result<(), Box<dyn Error>> {
    mimekind()?
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn test_resolve_builtin_and_vendor_types() -> Result<(), Box<dyn Error>> {
    mimekind()?
        .args(["resolve", "application/json"])
        .assert()
        .success()
        .stdout("JSON\n");
    mimekind()?
        .args(["resolve", "application/atom+xml"])
        .assert()
        .success()
        .stdout("XML\n");
    Ok(())
}

#[test]
fn test_resolve_unknown_suffix_fails() -> Result<(), Box<dyn Error>> {
    mimekind()?
        .args(["resolve", "application/vnd.acme+yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown content category"));
    Ok(())
}

#[test]
fn test_map_flag_adds_mapping() -> Result<(), Box<dyn Error>> {
    mimekind()?
        .args(["--map", "custom/type=text", "resolve", "custom/type"])
        .assert()
        .success()
        .stdout("TEXT\n");
    Ok(())
}

#[test]
fn test_map_flag_with_bad_category_fails() -> Result<(), Box<dyn Error>> {
    mimekind()?
        .args(["resolve", "custom/type", "--map", "custom/type=bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));
    mimekind()?
        .args(["resolve", "custom/type", "--map", "no-separator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MIME=CATEGORY"));
    Ok(())
}

#[test]
fn test_header_prints_category_and_charset() -> Result<(), Box<dyn Error>> {
    mimekind()?
        .args(["header", "text/plain; charset=utf-8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category: TEXT"))
        .stdout(predicate::str::contains("charset: UTF-8"));
    mimekind()?
        .args(["--charset", "Shift_JIS", "header", "application/json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category: JSON"))
        .stdout(predicate::str::contains("charset: Shift_JIS"));
    Ok(())
}

#[test]
fn test_list_category() -> Result<(), Box<dyn Error>> {
    mimekind()?
        .args(["list", "xml"])
        .assert()
        .success()
        .stdout("application/xml\ndefault\n");
    Ok(())
}

#[test]
fn test_config_file_and_flags_combine() -> Result<(), Box<dyn Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(br#"{"content.handlers.map": "text/csv=text"}"#)?;
    let path = file.path().to_str().ok_or("temp path is not UTF-8")?;

    mimekind()?
        .args(["--config", path, "--map", "text/tab-separated-values=text"])
        .args(["list", "text"])
        .assert()
        .success()
        .stdout("text/csv\ntext/plain\ntext/tab-separated-values\n");
    Ok(())
}

#[test]
fn test_missing_config_file_fails() -> Result<(), Box<dyn Error>> {
    mimekind()?
        .args(["--config", "/nonexistent/mimekind.json", "resolve", "text/plain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}
