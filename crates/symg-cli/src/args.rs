// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use symg_config::{DEFAULT_CONFIG_FILE, DEFAULT_LIBRARY_EXTENSION};
use symg_core::{Identity, StripLeadingUnderscore, SymbolNormalizer, DEFAULT_TABLE_FILE};

/// Generate the symbol table mapping library symbols to binding names
#[derive(Parser, Debug)]
#[command(name = "symg", version)]
pub struct Args {
	/// Configuration file, or `-` to read it from stdin
	#[arg(default_value = DEFAULT_CONFIG_FILE)]
	pub config: PathBuf,

	/// Symbol table to update
	#[arg(long, short, env = "SYMG_OUTPUT", default_value = DEFAULT_TABLE_FILE)]
	pub output: PathBuf,

	/// Symbol listing tool
	#[arg(long, env = "SYMG_NM", default_value = "nm")]
	pub nm: String,

	/// C++ demangling tool
	#[arg(long, env = "SYMG_DEMANGLER", default_value = "c++filt")]
	pub demangler: String,

	/// Header extractor command; header paths are appended as arguments
	#[arg(long, env = "SYMG_EXTRACTOR", default_value = "llcppsigfetch")]
	pub extractor: String,

	/// Read declarations from a JSON file instead of running the extractor
	#[arg(long, env = "SYMG_DECLARATIONS", conflicts_with = "extractor")]
	pub declarations: Option<PathBuf>,

	/// Shared library file extension
	#[arg(long, env = "SYMG_DYLIB_EXT", default_value = DEFAULT_LIBRARY_EXTENSION)]
	pub dylib_ext: String,

	/// Platform marker stripped from symbol names before matching
	#[arg(long, value_enum, env = "SYMG_SYMBOL_PREFIX", default_value_t = SymbolPrefix::Underscore)]
	pub symbol_prefix: SymbolPrefix,

	/// Print the table to stdout instead of writing it
	#[arg(long)]
	pub dry_run: bool,

	/// Enable debug logging
	#[arg(long, short)]
	pub verbose: bool,

	/// Emit logs as JSON
	#[arg(long, env = "SYMG_LOG_JSON")]
	pub log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SymbolPrefix {
	/// Strip one leading `_` (Mach-O)
	Underscore,
	/// Compare symbols verbatim (ELF)
	None,
}

impl SymbolPrefix {
	pub fn normalizer(self) -> Box<dyn SymbolNormalizer> {
		match self {
			SymbolPrefix::Underscore => Box::new(StripLeadingUnderscore),
			SymbolPrefix::None => Box::new(Identity),
		}
	}
}
