// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the symbol table generator.
//!
//! This crate provides:
//! - JSON (and TOML) configuration parsing
//! - Reading configuration from a file or stdin
//! - Resolution of library and header paths from compiler flags

pub mod error;
pub mod paths;

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

pub use error::ConfigError;
pub use paths::{resolve_header_paths, resolve_dylib_path, DEFAULT_LIBRARY_EXTENSION};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "llcppg.cfg";

/// Path value meaning "read configuration from stdin".
pub const STDIN_PATH: &str = "-";

/// Binding project configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SymgConfig {
	/// Package name of the generated bindings.
	pub name: String,
	/// Compiler flags locating the headers, e.g. `-I/opt/include`.
	pub cflags: String,
	/// Linker flags locating the library, e.g. `-L/opt/lib -lfoo`.
	pub libs: String,
	/// Header files relative to the `cflags` include directory.
	pub include: Vec<String>,
	/// Prefixes trimmed from class and function names, tried in order.
	pub trim_prefixes: Vec<String>,
}

impl SymgConfig {
	pub fn parse_json(path: &Path, contents: &str) -> Result<Self, ConfigError> {
		let config: Self =
			serde_json::from_str(contents).map_err(|source| ConfigError::JsonParse {
				path: path.to_path_buf(),
				source,
			})?;
		config.validate()?;
		Ok(config)
	}

	pub fn parse_toml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(contents).map_err(|source| ConfigError::TomlParse {
			path: path.to_path_buf(),
			source,
		})?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.libs.trim().is_empty() {
			return Err(ConfigError::validation("libs must not be empty"));
		}
		if self.trim_prefixes.iter().any(String::is_empty) {
			return Err(ConfigError::validation("trimPrefixes must not contain empty strings"));
		}
		Ok(())
	}

	/// Library file the symbols are listed from.
	pub fn library_path(&self, extension: &str) -> Result<PathBuf, ConfigError> {
		resolve_dylib_path(&self.libs, extension)
	}

	/// Header files the declarations are extracted from, in configured order.
	pub fn header_paths(&self) -> Vec<PathBuf> {
		resolve_header_paths(&self.cflags, &self.include)
	}
}

/// Load configuration from `path`, or from stdin when `path` is `-`.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
pub fn load_config(path: &Path) -> Result<SymgConfig, ConfigError> {
	if path == Path::new(STDIN_PATH) {
		let mut contents = String::new();
		std::io::stdin()
			.read_to_string(&mut contents)
			.map_err(|source| ConfigError::Io {
				path: path.to_path_buf(),
				source,
			})?;
		return SymgConfig::parse_json(path, &contents);
	}

	let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
		path: path.to_path_buf(),
		source,
	})?;

	let config = if path.extension().and_then(|e| e.to_str()) == Some("toml") {
		SymgConfig::parse_toml(path, &contents)?
	} else {
		SymgConfig::parse_json(path, &contents)?
	};

	debug!(
			path = %path.display(),
			name = %config.name,
			headers = config.include.len(),
			prefixes = config.trim_prefixes.len(),
			"loaded configuration"
	);
	Ok(config)
}
