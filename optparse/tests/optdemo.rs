#![cfg(feature = "demo")]

use std::ffi::OsStr;
use std::io::Write;
use std::process::{Command, Output};

fn optdemo<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_optdemo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run optdemo")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_resolved_values() {
    let output = optdemo(&["-ij=100", "--ls=some other value", "prog", "--", "-x", "y"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "is=true (present)",
            "js=100 (present)",
            "ks=2200 (absent)",
            "ls=some other value (present)",
            "verbose=false (absent)",
            "args-file= (absent)",
            "program=prog",
            "residual[0]=-x",
            "residual[1]=y",
        ]
    );
}

#[test]
fn unknown_option_exits_nonzero() {
    let output = optdemo(&["-x=4"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("optdemo: no such option x"), "stderr: {}", stderr);
}

#[test]
fn terminator_before_program_name_fails() {
    let output = optdemo(&["--", "prog"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("program filename must be specified before arguments"));
}

#[test]
fn verbose_logs_resolution_to_stderr() {
    let output = optdemo(&["-v", "--ks=5"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("resolved option"), "stderr: {}", stderr);
    assert!(stdout_lines(&output).contains(&"ks=5 (present)".to_string()));
}

#[test]
fn args_file_is_overridden_by_command_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# defaults").unwrap();
    writeln!(file, "js = 42").unwrap();
    writeln!(file, "ls = from file").unwrap();
    writeln!(file, "is").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let arg = format!("--args-file={}", path);
    let output = optdemo(&[arg.as_str(), "--ls=cli"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.contains(&"js=42 (present)".to_string()));
    assert!(lines.contains(&"ls=cli (present)".to_string()));
    assert!(lines.contains(&"is=true (present)".to_string()));
}

#[test]
fn missing_args_file_is_reported() {
    let output = optdemo(&["--args-file=/nonexistent/optdemo-args"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open /nonexistent/optdemo-args"));
}

#[test]
fn empty_argument_does_not_take_program_name_slot() {
    let output = optdemo(&["", "prog", "-i"]);
    assert!(output.status.success());
    assert!(stdout_lines(&output).contains(&"program=prog".to_string()));
}

#[test]
fn unknown_key_in_args_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "js = 1").unwrap();
    writeln!(file, "nope").unwrap();
    let arg = format!("--args-file={}", file.path().display());

    let output = optdemo(&[arg.as_str()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("optdemo: line 2: no such option nope"), "stderr: {}", stderr);
}

#[cfg(unix)]
#[test]
fn non_unicode_argument_is_an_error_not_a_panic() {
    use std::os::unix::ffi::OsStrExt;

    let output = optdemo(&[OsStr::from_bytes(b"prog\xff")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("optdemo: argument is not valid unicode: prog\u{fffd}"),
        "stderr: {}",
        stderr
    );
}
