//! Shared test harness for objid-cli integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Run `objid` with `args` in `dir`, feeding `stdin` to the process.
pub fn objid_with_stdin(dir: &Path, args: &[&str], stdin: &[u8]) -> CommandResult {
    let mut child = Command::new(env!("CARGO_BIN_EXE_objid"))
        .args(args)
        .current_dir(dir)
        .env_remove("OBJID_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn objid");

    {
        let mut pipe = child.stdin.take().unwrap();
        pipe.write_all(stdin).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

/// Run `objid` with `args` in `dir` and empty stdin.
pub fn objid(dir: &Path, args: &[&str]) -> CommandResult {
    objid_with_stdin(dir, args, b"")
}
