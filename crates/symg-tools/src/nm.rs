// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Library symbol listing via `nm`.

use std::ffi::OsStr;
use std::path::Path;

use symg_core::{SourceError, SymbolSource};
use tracing::debug;

use crate::command::run_tool;

/// Lists the external symbols a library defines using the `nm` tool.
#[derive(Debug, Clone)]
pub struct NmSymbolSource {
	program: String,
}

impl NmSymbolSource {
	pub fn new(program: impl Into<String>) -> Self {
		Self {
			program: program.into(),
		}
	}
}

impl Default for NmSymbolSource {
	fn default() -> Self {
		Self::new("nm")
	}
}

impl SymbolSource for NmSymbolSource {
	fn list_symbols(&self, library: &Path) -> Result<Vec<String>, SourceError> {
		if !library.exists() {
			return Err(SourceError::UnresolvedLibrary(format!(
				"{} does not exist",
				library.display()
			)));
		}

		let output = run_tool(&self.program, [OsStr::new("-g"), library.as_os_str()])?;
		let symbols = parse_nm_output(&output);

		debug!(
				library = %library.display(),
				symbols = symbols.len(),
				"listed defined symbols"
		);
		Ok(symbols)
	}
}

/// Parses `nm` output into defined symbol names, in listing order.
///
/// Lines look like `<address> <type> <name>` for defined symbols and
/// `<type> <name>` for undefined ones; archive member headers
/// (`foo.o:`) and blank lines are skipped.
pub fn parse_nm_output(output: &str) -> Vec<String> {
	output
		.lines()
		.filter_map(|line| {
			let fields: Vec<&str> = line.split_whitespace().collect();
			let (kind, name) = match fields.as_slice() {
				[_, kind, name] => (*kind, *name),
				[kind, name] => (*kind, *name),
				_ => return None,
			};
			if kind.eq_ignore_ascii_case("u") {
				return None;
			}
			Some(name.to_string())
		})
		.collect()
}
