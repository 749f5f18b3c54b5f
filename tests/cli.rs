use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

const REPORT: &str = "Distance matrix\nDist | A B\n-------\nA | 0 1\nB | 1 0\nDist | C\n-------\nA | 2\nB | 3\n";

fn popdist_merge(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_popdist-merge"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary started");
    // The binary may exit before reading stdin, e.g. on usage errors.
    let _ = child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes());
    child.wait_with_output().expect("binary finished")
}

#[test]
fn dashes_read_stdin_and_write_stdout() {
    let output = popdist_merge(&["-", "-"], REPORT);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Dist\tA\tB\nA\t0\t1\t2\nB\t1\t0\t3"
    );
}

#[test]
fn formatting_flags_are_applied() {
    let output = popdist_merge(&["-q", "-s", ",", "-w", "-", "-"], REPORT);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\"Dist\",\"A\",\"B\"\n\r\"A\",\"0\",\"1\",\"2\"\n\r\"B\",\"1\",\"0\",\"3\""
    );
}

#[test]
fn last_line_ending_flag_wins() {
    let output = popdist_merge(&["--windows", "--unix", "-", "-"], REPORT);

    assert_eq!(output.status.code(), Some(0));
    assert!(!String::from_utf8_lossy(&output.stdout).contains('\r'));
}

#[test]
fn files_are_read_and_written() {
    let temp_dir = tempdir().expect("temporary directory");
    let input = temp_dir.path().join("report.txt");
    let output = temp_dir.path().join("table.tsv");
    fs::write(&input, REPORT).expect("report written");

    let result = popdist_merge(
        &[
            "--separator=;",
            input.to_str().expect("utf-8 path"),
            output.to_str().expect("utf-8 path"),
        ],
        "",
    );

    assert_eq!(result.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(&output).expect("table read"),
        "Dist;A;B\nA;0;1;2\nB;1;0;3"
    );
}

#[test]
fn help_exits_successfully() {
    let output = popdist_merge(&["--help"], "");

    assert_eq!(output.status.code(), Some(0));
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("INPUTFILE OUTPUTFILE"));
    assert!(help.contains("standard input or standard output"));
}

#[test]
fn unknown_option_exits_with_one() {
    let output = popdist_merge(&["--frobnicate", "-", "-"], "");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn wrong_file_count_exits_with_two() {
    let output = popdist_merge(&["-"], REPORT);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("INPUTFILE OUTPUTFILE"));
}

#[test]
fn unparseable_report_exits_with_one() {
    let output = popdist_merge(&["-", "-"], "nothing to see here");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn repeated_options_take_the_last_value() {
    let output = popdist_merge(&["-s", ",", "-s", ";", "-", "-"], REPORT);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Dist;A;B\nA;0;1;2\nB;1;0;3"
    );
}

#[test]
fn repeated_flags_are_accepted() {
    let output = popdist_merge(&["-q", "-q", "-w", "-w", "-", "-"], REPORT);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\"Dist\"\t\"A\"\t\"B\"\n\r\"A\"\t\"0\"\t\"1\"\t\"2\"\n\r\"B\"\t\"1\"\t\"0\"\t\"3\""
    );
}

#[test]
fn failed_merge_leaves_output_file_untouched() {
    let temp_dir = tempdir().expect("temporary directory");
    let input = temp_dir.path().join("report.txt");
    let output = temp_dir.path().join("table.tsv");
    fs::write(&input, "no divider here\nDist | A\nA | 0").expect("report written");
    fs::write(&output, "previous table").expect("old output written");

    let result = popdist_merge(
        &[
            input.to_str().expect("utf-8 path"),
            output.to_str().expect("utf-8 path"),
        ],
        "",
    );

    assert_eq!(result.status.code(), Some(1));
    assert_eq!(
        fs::read_to_string(&output).expect("output read"),
        "previous table"
    );
}
