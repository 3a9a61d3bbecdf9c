use std::io::{Read as _, Write as _};
use std::process::{Child, Command, Output, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pl0_rt_contracts::PL0_RT_ABI_MAJOR;

fn spawn_smoke(scenario: &str, envs: &[(&str, &str)]) -> Child {
    let exe = env!("CARGO_BIN_EXE_pl0-rt-smoke");
    let mut cmd = Command::new(exe);
    cmd.arg(scenario)
        .env_remove("PL0_RT_LOG")
        .env_remove("PL0_RT_LOG_ANSI")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (k, v) in envs {
        cmd.env(k, v);
    }
    cmd.spawn().expect("spawn pl0-rt-smoke")
}

fn run_smoke(scenario: &str, stdin: &[u8], envs: &[(&str, &str)]) -> Output {
    let mut child = spawn_smoke(scenario, envs);
    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(stdin)
        .expect("write child stdin");
    child.wait_with_output().expect("wait pl0-rt-smoke")
}

fn stdout_of(out: &Output) -> String {
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn newline_flag_composes_one_output_line() {
    let out = run_smoke("mixed-line", b"", &[]);
    assert_eq!(stdout_of(&out), "-7\nTrue3\n");
    assert!(out.stderr.is_empty(), "unexpected stderr output");
}

#[test]
fn every_width_prints_its_extremes() {
    let out = run_smoke("widths", b"", &[]);
    assert_eq!(
        stdout_of(&out),
        "-2147483648\n\
         2147483647\n\
         -32768\n\
         -128\n\
         65535\n\
         255\n\
         False\n\
         True\n\
         hello, world\n\
         (null)\n"
    );
}

#[test]
fn read_returns_token_then_sentinel_on_exhausted_input() {
    let out = run_smoke("read-twice", b"42\n", &[]);
    assert_eq!(stdout_of(&out), "42\n0\n");
}

#[test]
fn read_skips_whitespace_between_tokens() {
    let out = run_smoke("read-twice", b"  -5\n\n\t 19 trailing", &[]);
    assert_eq!(stdout_of(&out), "-5\n19\n");
}

#[test]
fn malformed_input_does_not_abort() {
    let out = run_smoke("read-twice", b"abc\n", &[]);
    assert_eq!(stdout_of(&out), "0\n0\n");
}

#[test]
fn prompt_is_visible_while_read_blocks() {
    let mut child = spawn_smoke("prompt", &[]);
    let mut stdout = child.stdout.take().expect("child stdout");

    let (tx, rx) = mpsc::channel();
    let reader = thread::spawn(move || {
        let mut prompt = [0u8; 3];
        let got = stdout.read_exact(&mut prompt).map(|()| prompt.to_vec());
        let _ = tx.send(got);
        let mut rest = Vec::new();
        stdout.read_to_end(&mut rest).expect("read rest of stdout");
        rest
    });

    // Nothing has been written to stdin yet, so the child is blocked in read.
    let prompt = match rx.recv_timeout(Duration::from_secs(10)) {
        Ok(got) => got.expect("read prompt"),
        Err(_) => {
            let _ = child.kill();
            let _ = child.wait();
            panic!("prompt was not flushed before the read blocked");
        }
    };
    assert_eq!(prompt, b"n? ");

    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(b"21\n")
        .expect("write child stdin");
    let rest = reader.join().expect("stdout reader thread");
    let status = child.wait().expect("wait pl0-rt-smoke");
    assert_eq!(status.code(), Some(0));
    assert_eq!(rest, b"42\n");
}

#[test]
fn closed_stdout_is_ignored_silently() {
    let mut child = spawn_smoke("widths", &[]);
    drop(child.stdout.take());
    drop(child.stdin.take());
    let out = child.wait_with_output().expect("wait pl0-rt-smoke");
    assert_eq!(out.status.code(), Some(0));
    assert!(
        out.stderr.is_empty(),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn unterminated_output_is_flushed_at_exit() {
    let out = run_smoke("unterminated", b"", &[]);
    assert_eq!(stdout_of(&out), "no newline");
}

#[test]
fn abi_version_is_exported() {
    let out = run_smoke("abi", b"", &[]);
    assert_eq!(stdout_of(&out), format!("{PL0_RT_ABI_MAJOR}\n"));
}

#[test]
fn logging_goes_to_stderr_only() {
    let out = run_smoke("mixed-line", b"", &[("PL0_RT_LOG", "pl0_rt=trace")]);
    assert_eq!(stdout_of(&out), "-7\nTrue3\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("entering compiled program"), "stderr:\n{stderr}");
    assert!(stderr.contains("pl0_rt::print"), "stderr:\n{stderr}");
    assert!(stderr.contains("TRACE"), "stderr:\n{stderr}");
}

#[test]
fn invalid_log_filter_is_reported_and_ignored() {
    let out = run_smoke("mixed-line", b"", &[("PL0_RT_LOG", "pl0_rt=loudest")]);
    assert_eq!(stdout_of(&out), "-7\nTrue3\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ignoring invalid log filter"), "stderr:\n{stderr}");
}
