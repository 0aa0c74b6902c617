use {
    nanoserde::DeJson,
    slime_fusion::{engine::Strategy, errors::ErrorKind, naive, run, serialization::Report, Options},
    std::{
        io::Write,
        process::{Command, Output, Stdio},
    },
};

fn slime_fusion(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_slime-fusion"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn test_run_nothing_to_solve() {
    assert_eq!(run("", Options::default()).unwrap(), None);
    assert_eq!(run("0\n", Options::default()).unwrap(), None);
}

#[test]
fn test_run_answers() {
    let report = run("3\n1 1 1\n", Options::default()).unwrap().unwrap();
    assert_eq!(
        report,
        Report {
            n: 3,
            answer: 2,
            offset: Some(1)
        }
    );

    let parallel = Options {
        strategy: Strategy::Parallel,
        ..Options::default()
    };
    assert_eq!(run("3\n1 2 3\n", parallel).unwrap().unwrap().answer, 24);
}

#[test]
fn test_run_naive() {
    let options = Options {
        naive: true,
        ..Options::default()
    };

    assert_eq!(
        run("3 1 2 3", options).unwrap(),
        Some(Report {
            n: 3,
            answer: 24,
            offset: None
        })
    );

    let too_many = format!("{} {}", naive::MAX_N + 1, "1 ".repeat(naive::MAX_N + 1));
    assert!(matches!(
        run(&too_many, options).unwrap_err().kind(),
        ErrorKind::TooLargeForNaive(..)
    ));
}

#[test]
fn test_empty_input_prints_nothing() {
    let output = slime_fusion(&[], "");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_prints_answer_line() {
    let output = slime_fusion(&[], "3\n1 1 1\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2\n");

    let output = slime_fusion(&["--threads", "2"], "2\n3 2\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "18\n");
}

#[test]
fn test_malformed_sizes_fail() {
    for input in ["2 5 x", "2 5 0", "4 1 2", "18446744073709551615 1"] {
        let output = slime_fusion(&[], input);
        assert!(!output.status.success(), "input: {input:?}");
        assert!(output.stdout.is_empty(), "input: {input:?}");
    }
}

#[test]
fn test_json_report() {
    let output = slime_fusion(&["--json"], "3 1 2 3");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let report = Report::deserialize_json(stdout.trim()).unwrap();
    assert_eq!(report.n, 3);
    assert_eq!(report.answer, 24);
}

#[test]
fn test_naive_flag() {
    let output = slime_fusion(&["--naive"], "2 3 2");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "18\n");

    let too_many = format!("{} {}", naive::MAX_N + 1, "1 ".repeat(naive::MAX_N + 1));
    let output = slime_fusion(&["--naive"], &too_many);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
