//! Integration tests for CLI commands.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_cadastro"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

fn run_cli_with_stdin(args: &[&str], stdin: &str) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cadastro"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

fn create_document_list() -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("documents.txt");
    std::fs::write(
        &path,
        "111.444.777-35\n\n11222333000181\n12345678900\n1234\n",
    )
    .unwrap();
    (temp_dir, path.to_string_lossy().to_string())
}

#[test]
fn test_normalize_command() {
    let (success, stdout, _) = run_cli(&["normalize", "11.222.333/0001-81"]);
    assert!(success);
    assert_eq!(stdout.trim(), "11222333000181");
}

#[test]
fn test_validate_valid_cpf() {
    let (success, stdout, _) = run_cli(&["validate", "11144477735"]);
    assert!(success);
    assert_eq!(stdout.trim(), "VALID CPF 111.444.777-35");
}

#[test]
fn test_validate_invalid_is_reported_but_not_fatal() {
    let (success, stdout, _) = run_cli(&["validate", "11222333000180"]);
    assert!(success);
    assert!(stdout.starts_with("INVALID"));
    assert!(stdout.contains("expected 81"));
}

#[test]
fn test_validate_strict_fails_on_invalid() {
    let (success, _, _) = run_cli(&["validate", "111.111.111-11", "--strict"]);
    assert!(!success);

    let (success, _, _) = run_cli(&["validate", "111.444.777-35", "--strict"]);
    assert!(success);
}

#[test]
fn test_validate_json_output() {
    let (success, stdout, _) = run_cli(&["validate", "11.222.333/0001-81", "--json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["kind"], "cnpj");
    assert_eq!(parsed["status"], "Valid");
    assert_eq!(parsed["masked_input"], true);
}

#[test]
fn test_validate_forced_kind() {
    let (success, stdout, _) = run_cli(&["validate", "11144477735", "--kind", "cnpj", "--json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["status"], "Invalid");
    assert!(parsed["reason"].as_str().unwrap().contains("14 digits"));
}

#[test]
fn test_format_command() {
    let (success, stdout, _) = run_cli(&["format", "1234"]);
    assert!(success);
    assert_eq!(stdout.trim(), "123.4");

    let (success, stdout, _) = run_cli(&["format", "112", "--kind", "cnpj"]);
    assert!(success);
    assert_eq!(stdout.trim(), "11.2");

    let (success, stdout, _) = run_cli(&["format", "11222333000181"]);
    assert!(success);
    assert_eq!(stdout.trim(), "11.222.333/0001-81");
}

#[test]
fn test_check_command_table() {
    let (_temp_dir, path) = create_document_list();

    let (success, stdout, _) = run_cli(&["check", &path]);
    assert!(success);
    assert!(stdout.contains("STATUS"));
    assert!(stdout.contains("111.444.777-35"));
    assert!(stdout.contains("4 checked, 2 valid, 2 invalid"));
}

#[test]
fn test_check_command_json_lines() {
    let (_temp_dir, path) = create_document_list();

    let (success, stdout, _) = run_cli(&["check", &path, "--json"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 4);
    for line in lines {
        serde_json::from_str::<serde_json::Value>(line).expect("Invalid JSON");
    }
}

#[test]
fn test_check_command_strict_and_limit() {
    let (_temp_dir, path) = create_document_list();

    let (success, _, _) = run_cli(&["check", &path, "--strict"]);
    assert!(!success);

    let (success, stdout, _) = run_cli(&["check", &path, "--strict", "--max-lines", "2"]);
    assert!(success);
    assert!(stdout.contains("2 checked, 2 valid, 0 invalid"));
}

#[test]
fn test_check_reads_stdin() {
    let (success, stdout, _) = run_cli_with_stdin(&["check", "--json"], "11144477735\n");
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["digits"], "11144477735");
}

#[test]
fn test_check_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let (success, _, stderr) = run_cli(&["check", &missing.to_string_lossy()]);
    assert!(!success);
    assert!(stderr.contains("Error"));
}

#[test]
fn test_scan_command() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    std::fs::write(&path, "Joao 111.444.777-35 / Fazenda 11.222.333/0001-80").unwrap();
    let path = path.to_string_lossy().to_string();

    let (success, stdout, _) = run_cli(&["scan", &path, "--json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[1]["kind"], "cnpj");
    assert_eq!(parsed[1]["valid"], false);

    let (success, stdout, _) = run_cli(&["scan", &path, "--valid-only"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("111.444.777-35"));
}

#[test]
fn test_gen_command_creates_valid_documents() {
    let (success, stdout, _) = run_cli(&["gen", "--kind", "cnpj", "--count", "5", "--seed", "7"]);
    assert!(success);
    let documents: Vec<&str> = stdout.lines().collect();
    assert_eq!(documents.len(), 5);
    for document in &documents {
        assert!(cadastro_documents::validate_cnpj(document));
    }

    let (_, again, _) = run_cli(&["gen", "--kind", "cnpj", "--count", "5", "--seed", "7"]);
    assert_eq!(stdout, again);
}

#[test]
fn test_gen_formatted_cpf() {
    let (success, stdout, _) = run_cli(&["gen", "--kind", "cpf", "--formatted"]);
    assert!(success);
    let document = stdout.trim();
    assert_eq!(document.len(), 14);
    assert!(cadastro_documents::validate_cpf(document));
}

#[test]
fn test_id_command() {
    let (success, stdout, _) = run_cli(&["id", "--count", "3"]);
    assert!(success);
    let ids: Vec<&str> = stdout.lines().collect();
    assert_eq!(ids.len(), 3);
    assert_ne!(ids[0], ids[1]);
    assert!(ids
        .iter()
        .all(|id| id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())));
}
