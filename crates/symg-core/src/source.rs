// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Seams to the external tools that feed the generator.

use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::model::Declaration;

/// Lists the mangled symbols exported by a compiled library, in listing order.
pub trait SymbolSource {
	fn list_symbols(&self, library: &Path) -> Result<Vec<String>, SourceError>;
}

/// Produces a human-readable signature for a mangled name.
///
/// Demangling is display-only, so implementations fall back to the input
/// rather than failing.
pub trait Demangler {
	fn demangle(&self, mangled: &str) -> String;

	fn demangle_all(&self, mangled: &[String]) -> Vec<String> {
		mangled.iter().map(|name| self.demangle(name)).collect()
	}
}

/// Extracts declaration records from a set of header files, in header order.
pub trait DeclarationSource {
	fn extract(&self, headers: &[PathBuf]) -> Result<Vec<Declaration>, SourceError>;
}
