mod common;

use cartograph::render_map;
use common::fixtures::*;
use common::{TestResult, request_from};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str]) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_cartograph"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
}

fn write_request(dir: &Path) -> TestResult<std::path::PathBuf> {
    let path = dir.join("request.json");
    fs::write(&path, serde_json::to_vec(&sochi_request())?)?;
    Ok(path)
}

#[test]
fn test_svg_to_stdout() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = write_request(dir.path())?;

    let output = run(&[input.to_str().unwrap()])?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        render_map(&request_from(sochi_request()))?
    );
    Ok(())
}

#[test]
fn test_json_to_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = write_request(dir.path())?;
    let target = dir.path().join("response.json");

    let output = run(&[
        input.to_str().unwrap(),
        "--format",
        "json",
        "-o",
        target.to_str().unwrap(),
    ])?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let response: serde_json::Value = serde_json::from_str(&fs::read_to_string(&target)?)?;
    assert_eq!(response[0]["request_id"], 1218663236);
    assert_eq!(
        response[0]["map"].as_str(),
        Some(render_map(&request_from(sochi_request()))?.as_str())
    );
    Ok(())
}

#[test]
fn test_missing_input_fails() -> TestResult {
    let dir = tempfile::tempdir()?;
    let output = run(&[dir.path().join("absent.json").to_str().unwrap()])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_invalid_layer_fails() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("request.json");
    let mut request = sochi_request();
    request["render_settings"]["layers"] = serde_json::json!(["rivers"]);
    fs::write(&input, serde_json::to_vec(&request)?)?;

    let output = run(&[input.to_str().unwrap()])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown map layer: rivers"));
    Ok(())
}
