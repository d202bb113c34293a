// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Declaration records produced by an external header extractor.
//!
//! The extractor emits JSON in one of two shapes: a flat array of
//! declarations, or an object keyed by header path whose values are arrays.
//! The keyed form is flattened in the order the headers were requested.

use std::ffi::OsStr;
use std::path::PathBuf;

use serde_json::Value;
use symg_core::{Declaration, DeclarationSource, SourceError};
use tracing::{debug, warn};

use crate::command::run_tool;

/// Parse extractor output into declarations ordered by `headers`.
pub fn parse_declarations(json: &str, headers: &[PathBuf]) -> Result<Vec<Declaration>, SourceError> {
	let value: Value = serde_json::from_str(json)?;

	match value {
		Value::Array(_) => Ok(serde_json::from_value(value)?),
		Value::Object(mut by_header) => {
			let mut declarations = Vec::new();
			for header in headers {
				let key = header.to_string_lossy();
				match by_header.remove(&*key) {
					Some(items) => {
						let items: Vec<Declaration> = serde_json::from_value(items)?;
						declarations.extend(items);
					}
					None => debug!(header = %key, "no declarations for header"),
				}
			}
			for (key, items) in by_header {
				warn!(header = %key, "declarations for unrequested header");
				let items: Vec<Declaration> = serde_json::from_value(items)?;
				declarations.extend(items);
			}
			Ok(declarations)
		}
		_ => Err(SourceError::InvalidOutput(
			"expected an array or an object of declaration arrays".to_string(),
		)),
	}
}

/// Runs an extractor command with the header paths appended to its arguments
/// and reads declarations from its stdout.
#[derive(Debug, Clone)]
pub struct CommandDeclarationSource {
	program: String,
	args: Vec<String>,
}

impl CommandDeclarationSource {
	pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
		Self {
			program: program.into(),
			args,
		}
	}

	/// Split a shell-style command line on whitespace. Returns `None` for a
	/// blank command.
	pub fn from_command_line(command: &str) -> Option<Self> {
		let mut parts = command.split_whitespace().map(str::to_string);
		let program = parts.next()?;
		Some(Self::new(program, parts.collect()))
	}
}

impl DeclarationSource for CommandDeclarationSource {
	fn extract(&self, headers: &[PathBuf]) -> Result<Vec<Declaration>, SourceError> {
		let args = self
			.args
			.iter()
			.map(|a| OsStr::new(a.as_str()))
			.chain(headers.iter().map(|h| h.as_os_str()));
		let output = run_tool(&self.program, args)?;

		let declarations = parse_declarations(&output, headers)?;
		debug!(
				program = %self.program,
				declarations = declarations.len(),
				"extracted declarations"
		);
		Ok(declarations)
	}
}

/// Reads previously extracted declarations from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonDeclarationSource {
	path: PathBuf,
}

impl JsonDeclarationSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl DeclarationSource for JsonDeclarationSource {
	fn extract(&self, headers: &[PathBuf]) -> Result<Vec<Declaration>, SourceError> {
		let contents = std::fs::read_to_string(&self.path)?;
		parse_declarations(&contents, headers)
	}
}
