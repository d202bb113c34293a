// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for symbol table generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the external collaborators (symbol listing, declaration extraction).
#[derive(Debug, Error)]
pub enum SourceError {
	#[error("could not resolve library path: {0}")]
	UnresolvedLibrary(String),

	#[error("{tool} not found in PATH")]
	NotInstalled { tool: String },

	#[error("{cmd} {args:?} failed: {stderr}")]
	CommandFailed {
		cmd: String,
		args: Vec<String>,
		stderr: String,
	},

	#[error("invalid tool output: {0}")]
	InvalidOutput(String),

	#[error("invalid declaration JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Errors reading or writing the persisted symbol table.
#[derive(Debug, Error)]
pub enum TableError {
	#[error("failed to read {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("failed to serialize symbol table: {0}")]
	Serialize(#[source] serde_json::Error),

	#[error("failed to write {path}: {source}")]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// A terminal failure, qualified by the pipeline stage that produced it.
#[derive(Debug, Error)]
pub enum SymgError {
	#[error("configuration failed: {0}")]
	Config(#[source] Box<dyn std::error::Error + Send + Sync>),

	#[error("symbol listing failed: {0}")]
	SymbolList(#[source] SourceError),

	#[error("declaration extraction failed: {0}")]
	Extraction(#[source] SourceError),

	#[error("reading symbol table failed: {0}")]
	TableRead(#[source] TableError),

	#[error("writing symbol table failed: {0}")]
	TableWrite(#[source] TableError),
}

impl SymgError {
	pub fn config(err: impl std::error::Error + Send + Sync + 'static) -> Self {
		Self::Config(Box::new(err))
	}
}

pub type Result<T> = std::result::Result<T, SymgError>;
