// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolution of compiler and linker flags into concrete file paths.

use std::path::PathBuf;

use crate::ConfigError;

/// File extension of shared libraries on the default platform.
pub const DEFAULT_LIBRARY_EXTENSION: &str = "dylib";

/// Resolve linker flags such as `-L/opt/foo/lib -lfoo` to the library file.
///
/// The last `-L` and the last `-l` flag win; other flags are ignored.
pub fn resolve_dylib_path(libs: &str, extension: &str) -> Result<PathBuf, ConfigError> {
	let mut dir = None;
	let mut name = None;

	for flag in libs.split_whitespace() {
		if let Some(value) = flag.strip_prefix("-L") {
			dir = Some(value);
		} else if let Some(value) = flag.strip_prefix("-l") {
			name = Some(value);
		}
	}

	match (dir, name) {
		(Some(dir), Some(name)) if !dir.is_empty() && !name.is_empty() => {
			let path = PathBuf::from(dir).join(format!("lib{name}.{extension}"));
			tracing::debug!(libs, path = %path.display(), "resolved library path");
			Ok(path)
		}
		_ => Err(ConfigError::UnresolvedLibrary(libs.to_string())),
	}
}

/// Join each include entry under the directory named by `cflags`
/// (one leading `-I` is removed), preserving order.
pub fn resolve_header_paths(cflags: &str, include: &[String]) -> Vec<PathBuf> {
	let root = cflags.trim();
	let root = root.strip_prefix("-I").unwrap_or(root);

	include
		.iter()
		.map(|file| PathBuf::from(root).join(file.trim_start_matches('/')))
		.collect()
}
