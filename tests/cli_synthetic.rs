//! Fixture-driven CLI synthetic tests.
//!
//! Each case under `tests/fixtures/synthetic/<case>/` provides:
//! - `input/`    initial document tree copied to a temp directory
//! - `scenario.toml` command list, optional stdin and command-level assertions
//! - `expected/` expected final tree after executing scenario

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(rename = "command")]
    commands: Vec<CommandSpec>,
}

#[derive(Debug, Deserialize)]
struct CommandSpec {
    #[serde(default)]
    args: Vec<String>,
    #[serde(default)]
    stdin: Option<String>,
    #[serde(default)]
    expect_exit: i32,
    #[serde(default)]
    stdout_contains: Vec<String>,
    #[serde(default)]
    stdout_not_contains: Vec<String>,
    #[serde(default)]
    stderr_contains: Vec<String>,
}

#[test]
fn test_synthetic_fixtures() {
    let root = Path::new("tests").join("fixtures").join("synthetic");
    assert!(
        root.is_dir(),
        "Synthetic fixture root missing: {}",
        root.display()
    );

    let mut case_dirs: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    case_dirs.sort();
    assert!(!case_dirs.is_empty(), "No synthetic test cases found");

    for case_dir in case_dirs {
        run_case(&case_dir);
    }
}

fn run_case(case_dir: &Path) {
    let case = case_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown-case>");

    let scenario_path = case_dir.join("scenario.toml");
    let scenario_content = fs::read_to_string(&scenario_path)
        .unwrap_or_else(|e| panic!("Case '{}': cannot read scenario.toml: {}", case, e));
    let scenario: Scenario = toml::from_str(&scenario_content)
        .unwrap_or_else(|e| panic!("Case '{}': invalid scenario.toml: {}", case, e));

    let temp = tempfile::TempDir::new().unwrap();
    copy_tree(&case_dir.join("input"), temp.path());

    for (idx, command) in scenario.commands.iter().enumerate() {
        let label = format!("Case '{}', command #{} ({:?})", case, idx + 1, command.args);
        let output = run_figmd(temp.path(), command);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert_eq!(
            output.status.code().unwrap_or(-1),
            command.expect_exit,
            "{} exit code mismatch.\nstdout:\n{}\nstderr:\n{}",
            label,
            stdout,
            stderr
        );

        check_needles(&label, "stdout", &stdout, &command.stdout_contains, true);
        check_needles(&label, "stdout", &stdout, &command.stdout_not_contains, false);
        check_needles(&label, "stderr", &stderr, &command.stderr_contains, true);
    }

    assert_trees_match(case, &case_dir.join("expected"), temp.path());
}

fn check_needles(label: &str, stream: &str, haystack: &str, needles: &[String], present: bool) {
    for needle in needles {
        assert_eq!(
            haystack.contains(needle.as_str()),
            present,
            "{} expected {} {} {:?}.\n{}:\n{}",
            label,
            stream,
            if present { "to contain" } else { "to NOT contain" },
            needle,
            stream,
            haystack
        );
    }
}

fn run_figmd(cwd: &Path, command: &CommandSpec) -> Output {
    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_figmd"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to execute figmd in {}: {}", cwd.display(), e));

    {
        let mut stdin = child.stdin.take().unwrap();
        if let Some(input) = &command.stdin {
            stdin.write_all(input.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from).min_depth(1).into_iter().filter_map(|e| e.ok()) {
        let dest = to.join(entry.path().strip_prefix(from).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).unwrap();
        } else {
            fs::copy(entry.path(), &dest).unwrap();
        }
    }
}

fn relative_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

fn assert_trees_match(case: &str, expected_root: &Path, actual_root: &Path) {
    let expected = relative_files(expected_root);
    let actual = relative_files(actual_root);
    assert_eq!(expected, actual, "Case '{}' file set mismatch", case);

    for rel in expected {
        let want = fs::read_to_string(expected_root.join(&rel)).unwrap();
        let got = fs::read_to_string(actual_root.join(&rel)).unwrap();
        assert_eq!(
            want.replace("\r\n", "\n"),
            got.replace("\r\n", "\n"),
            "Case '{}' content mismatch at {}",
            case,
            rel.display()
        );
    }
}
