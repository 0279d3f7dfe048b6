use std::fs;
use std::io::Cursor;

use assert_cmd::Command;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn assess_prints_risk_summary() {
    let mut cmd = Command::cargo_bin("lung-triage").unwrap();
    cmd.args([
        "assess",
        "--symptom",
        "Persistent Cough",
        "--symptom",
        "chest-pain",
        "--symptom",
        "Coughing up Blood",
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Risk: High (score 3)"));
    assert!(text.contains("High Risk: Consult a doctor immediately."));
}

#[test]
fn assess_reports_unavailable_model_without_failing() {
    let tmp = TempDir::new().unwrap();
    let image = tmp.path().join("xray.png");
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([1, 2, 3])))
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    fs::write(&image, buf).unwrap();
    let out = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("lung-triage").unwrap();
    cmd.arg("assess")
        .arg("--symptom")
        .arg("Fatigue")
        .arg("--image")
        .arg(&image)
        .arg("--predict")
        .arg("--json")
        .arg("--out")
        .arg(&out)
        .arg("--model-path")
        .arg(tmp.path().join("missing.onnx"));
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Risk: Moderate (score 1)"));
    assert!(text.contains("Prediction: Prediction unavailable"));

    let v: Value = serde_json::from_slice(&fs::read(out.join("triage.json")).unwrap()).unwrap();
    assert_eq!(v["prediction"]["status"], "unavailable");
    assert_eq!(v["prediction"]["enabled"], false);
    assert_eq!(v["risk"]["score"], 1);
}

#[test]
fn assess_warns_on_unknown_symptom() {
    let mut cmd = Command::cargo_bin("lung-triage").unwrap();
    cmd.args(["assess", "--symptom", "Headache"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Risk: Low (score 0)"));
    assert!(text.contains("unknown symptom 'Headache' ignored"));
}

#[test]
fn model_fetch_fails_when_unavailable() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("lung-triage").unwrap();
    cmd.args(["model", "fetch", "--model-path"])
        .arg(tmp.path().join("missing.onnx"));
    cmd.assert().failure();
}

#[test]
fn risk_only_run_skips_model_stage() {
    let mut cmd = Command::cargo_bin("lung-triage").unwrap();
    cmd.env("RUST_LOG", "info")
        .args(["assess", "--symptom", "Fatigue", "--model-url", "http://127.0.0.1:9/model.onnx"]);
    let assert = cmd.assert().success();
    let out = assert.get_output();
    let stdout = String::from_utf8(out.stdout.clone()).unwrap();
    let stderr = String::from_utf8(out.stderr.clone()).unwrap();
    assert!(stdout.contains("Risk: Moderate (score 1)"));
    assert!(!stdout.contains("Prediction:"));
    assert!(stderr.contains("stage3_upload"));
    assert!(!stderr.contains("stage4_predict"));
}
