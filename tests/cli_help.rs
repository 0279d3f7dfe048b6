use assert_cmd::Command;

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("lung-triage").unwrap();
    cmd.arg("--help");
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Score symptoms and optionally classify an X-ray"));
    assert!(text.contains("List the symptom checklist"));
    assert!(text.contains("Manage the model artifact"));
}

#[test]
fn symptoms_command_lists_checklist() {
    let mut cmd = Command::cargo_bin("lung-triage").unwrap();
    cmd.arg("symptoms");
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("symptoms (10):"));
    assert!(text.contains("coughing-up-blood\tCoughing up Blood\t"));
    assert_eq!(text.lines().count(), 11);
}
