use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

fn cargo_bin() -> PathBuf {
    if let Ok(path) = env::var("CARGO_BIN_EXE_x12") {
        return PathBuf::from(path);
    }

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| repo_root().join("target"));
    let executable_name = format!("x12{}", std::env::consts::EXE_SUFFIX);
    let fallback = target_dir.join("debug").join(executable_name);

    if fallback.exists() {
        return fallback;
    }

    panic!(
        "CARGO_BIN_EXE_x12 is not set and fallback binary was not found at {}",
        fallback.display()
    );
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn unique_temp_path(name: &str, extension: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time after epoch")
        .as_nanos();
    let counter = TEMP_FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let filename = format!(
        "x12-cli-{name}-{}-{nanos}-{counter}.{extension}",
        std::process::id()
    );
    env::temp_dir().join(filename)
}

fn write_temp_file(name: &str, extension: &str, content: &str) -> PathBuf {
    let path = unique_temp_path(name, extension);
    fs::write(&path, content).expect("temporary file should be writable");
    path
}

fn run_x12(args: &[&str]) -> Output {
    Command::new(cargo_bin())
        .args(args)
        .output()
        .expect("run x12")
}

const LOAD_TENDER: &str =
    "ST*204*0001~B2**SCAC**PRO123**PP~B2A*00*LT~C3*USD*1.25~S5*1*LD~SE*6*0001~";

#[test]
fn encode_command_inverts_decode() {
    let wire_input = write_temp_file("encode-roundtrip", "edi", LOAD_TENDER);
    let json_path = unique_temp_path("encode-roundtrip", "json");
    let wire_output = unique_temp_path("encode-roundtrip-out", "edi");

    let decode = run_x12(&[
        "decode",
        wire_input.to_string_lossy().as_ref(),
        "--set",
        "204",
        "--version",
        "4010",
        "--output",
        json_path.to_string_lossy().as_ref(),
    ]);
    assert!(
        decode.status.success(),
        "decode stderr: {}",
        String::from_utf8_lossy(&decode.stderr)
    );

    let encode = run_x12(&[
        "encode",
        json_path.to_string_lossy().as_ref(),
        "--output",
        wire_output.to_string_lossy().as_ref(),
    ]);
    assert!(
        encode.status.success(),
        "encode stderr: {}",
        String::from_utf8_lossy(&encode.stderr)
    );

    let wire = fs::read_to_string(&wire_output).expect("encoded wire should exist");
    assert_eq!(wire, LOAD_TENDER);

    fs::remove_file(wire_input).ok();
    fs::remove_file(json_path).ok();
    fs::remove_file(wire_output).ok();
}

#[test]
fn encode_command_rejects_malformed_json() {
    let input = write_temp_file("encode-bad-json", "json", "{ not json");
    let output = run_x12(&["encode", input.to_string_lossy().as_ref()]);
    assert!(!output.status.success());

    fs::remove_file(input).ok();
}

#[test]
fn encode_command_rejects_incomplete_document() {
    // A 204 without its mandatory stop loop must not encode.
    let document = serde_json::json!({
        "key": { "format": "X12", "version": 4010, "set_id": "204" },
        "members": [],
        "warnings": []
    });
    let input = write_temp_file("encode-incomplete", "json", &document.to_string());

    let output = run_x12(&["encode", input.to_string_lossy().as_ref()]);
    assert!(!output.status.success());

    fs::remove_file(input).ok();
}
