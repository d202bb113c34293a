// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Platform symbol-prefix normalization.
//!
//! Object formats disagree on whether a compiler-level symbol carries an extra
//! leading marker (Mach-O prepends `_`, ELF does not). Symbols listed from the
//! library are normalized before they are compared with a declaration's
//! symbol reference, which already uses the compiler-level spelling.

/// Maps a mangled symbol to the form used for matching and for the table.
pub trait SymbolNormalizer {
	fn normalize<'a>(&self, symbol: &'a str) -> &'a str;
}

/// Strips at most one leading `_` (Mach-O convention).
#[derive(Debug, Clone, Copy, Default)]
pub struct StripLeadingUnderscore;

impl SymbolNormalizer for StripLeadingUnderscore {
	fn normalize<'a>(&self, symbol: &'a str) -> &'a str {
		symbol.strip_prefix('_').unwrap_or(symbol)
	}
}

/// Leaves symbols untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl SymbolNormalizer for Identity {
	fn normalize<'a>(&self, symbol: &'a str) -> &'a str {
		symbol
	}
}
