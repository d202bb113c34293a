// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Reading and writing the persisted symbol table.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TableError;
use crate::model::BindingEntry;

/// Default file name of the symbol table.
pub const DEFAULT_TABLE_FILE: &str = "llcppg.symb.json";

/// Parse table JSON. Every entry must carry all three fields.
pub fn parse_table(path: &Path, contents: &str) -> Result<Vec<BindingEntry>, TableError> {
	serde_json::from_str(contents).map_err(|source| TableError::Parse {
		path: path.to_path_buf(),
		source,
	})
}

/// Read the table at `path`, returning `None` when no table exists yet.
pub fn read_table(path: &Path) -> Result<Option<Vec<BindingEntry>>, TableError> {
	let contents = match std::fs::read_to_string(path) {
		Ok(contents) => contents,
		Err(e) if e.kind() == ErrorKind::NotFound => {
			debug!(path = %path.display(), "no existing symbol table");
			return Ok(None);
		}
		Err(source) => {
			return Err(TableError::Read {
				path: path.to_path_buf(),
				source,
			})
		}
	};

	let entries = parse_table(path, &contents)?;
	debug!(path = %path.display(), entries = entries.len(), "loaded existing symbol table");
	Ok(Some(entries))
}

/// Render the table as pretty-printed JSON with a trailing newline.
pub fn render_table(entries: &[BindingEntry]) -> Result<String, TableError> {
	let mut json = serde_json::to_string_pretty(entries).map_err(TableError::Serialize)?;
	json.push('\n');
	Ok(json)
}

/// Replace the table at `path` with `entries`.
///
/// The table is written to a sibling `.tmp` file and renamed over the target,
/// so a failed run leaves the previous table in place.
pub fn write_table(path: &Path, entries: &[BindingEntry]) -> Result<(), TableError> {
	let json = render_table(entries)?;
	let tmp_path = tmp_path_for(path);

	let write_err = |source| TableError::Write {
		path: path.to_path_buf(),
		source,
	};

	if let Err(e) = std::fs::write(&tmp_path, &json) {
		let _ = std::fs::remove_file(&tmp_path);
		return Err(write_err(e));
	}
	if let Err(e) = std::fs::rename(&tmp_path, path) {
		let _ = std::fs::remove_file(&tmp_path);
		return Err(write_err(e));
	}

	debug!(path = %path.display(), entries = entries.len(), "wrote symbol table");
	Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
	let mut name = path
		.file_name()
		.map(|n| n.to_os_string())
		.unwrap_or_else(|| OsString::from(DEFAULT_TABLE_FILE));
	name.push(".tmp");
	path.with_file_name(name)
}
