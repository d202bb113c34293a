// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::ffi::OsStr;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use symg_core::SourceError;
use tracing::{trace, warn};

/// Runs `program` with `args` and returns its stdout on success.
pub(crate) fn run_tool<I, S>(program: &str, args: I) -> Result<String, SourceError>
where
	I: IntoIterator<Item = S>,
	S: AsRef<OsStr>,
{
	let args: Vec<_> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
	trace!(program, args = ?args, "running tool");

	let output = Command::new(program)
		.args(&args)
		.output()
		.map_err(|e| spawn_error(program, e))?;

	check_output(program, &args, output)
}

/// Runs `program`, feeding `input` on stdin, and returns its stdout on success.
pub(crate) fn run_tool_with_input(
	program: &str,
	args: &[&str],
	input: String,
) -> Result<String, SourceError> {
	trace!(program, args = ?args, bytes = input.len(), "running tool with stdin");

	let mut child = Command::new(program)
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.map_err(|e| spawn_error(program, e))?;

	// Feed stdin from another thread so a full stdout pipe cannot stall us.
	let writer = child.stdin.take().map(|mut stdin| {
		std::thread::spawn(move || stdin.write_all(input.as_bytes()))
	});

	let output = child.wait_with_output()?;
	if let Some(writer) = writer {
		match writer.join() {
			Ok(result) => result?,
			Err(_) => {
				return Err(SourceError::InvalidOutput(format!(
					"{program}: stdin writer panicked"
				)))
			}
		}
	}

	let args: Vec<_> = args.iter().map(|a| OsStr::new(a).to_os_string()).collect();
	check_output(program, &args, output)
}

fn spawn_error(program: &str, e: std::io::Error) -> SourceError {
	if e.kind() == std::io::ErrorKind::NotFound {
		warn!(program, "tool not found in PATH");
		SourceError::NotInstalled {
			tool: program.to_string(),
		}
	} else {
		SourceError::Io(e)
	}
}

fn check_output(
	program: &str,
	args: &[std::ffi::OsString],
	output: Output,
) -> Result<String, SourceError> {
	if output.status.success() {
		Ok(String::from_utf8_lossy(&output.stdout).into_owned())
	} else {
		let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
		Err(SourceError::CommandFailed {
			cmd: program.to_string(),
			args: args.iter().map(|a| a.to_string_lossy().into_owned()).collect(),
			stderr,
		})
	}
}
