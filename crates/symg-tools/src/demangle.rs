// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Symbol demangling for diagnostic display.

use rustc_demangle::try_demangle;
use symg_core::Demangler;
use tracing::warn;

use crate::command::run_tool_with_input;

const LIBCXX_STRING: &str =
	"std::__1::basic_string<char, std::__1::char_traits<char>, std::__1::allocator<char> > const";

/// Check if a symbol appears to be a Rust mangled symbol.
pub fn is_rust_symbol(symbol: &str) -> bool {
	let symbol = symbol.strip_prefix('_').filter(|s| s.starts_with('_')).unwrap_or(symbol);
	if symbol.starts_with("_ZN") {
		// Legacy mangling always ends in a `17h<hash>E` path segment.
		return symbol.ends_with('E') && symbol.contains("17h");
	}
	symbol
		.strip_prefix("_R")
		.and_then(|rest| rest.chars().next())
		.is_some_and(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Tidy a demangled signature for display.
pub fn tidy_signature(demangled: &str) -> String {
	demangled.trim().replace(LIBCXX_STRING, "std::string")
}

/// Demangles Rust symbols (legacy and v0) with `rustc-demangle`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustDemangler;

impl Demangler for RustDemangler {
	fn demangle(&self, mangled: &str) -> String {
		// Mach-O adds one underscore in front of the compiler's symbol.
		let candidate = match mangled.strip_prefix('_') {
			Some(rest) if rest.starts_with('_') => rest,
			_ => mangled,
		};

		match try_demangle(candidate) {
			Ok(demangled) => format!("{demangled:#}"),
			Err(_) => mangled.to_string(),
		}
	}
}

/// Demangles C++ symbols by piping them through `c++filt`.
///
/// If the tool is unavailable or misbehaves the mangled names are returned
/// unchanged; demangled text is only ever used for display.
#[derive(Debug, Clone)]
pub struct CxxFiltDemangler {
	program: String,
}

impl CxxFiltDemangler {
	pub fn new(program: impl Into<String>) -> Self {
		Self {
			program: program.into(),
		}
	}
}

impl Default for CxxFiltDemangler {
	fn default() -> Self {
		Self::new("c++filt")
	}
}

impl Demangler for CxxFiltDemangler {
	fn demangle(&self, mangled: &str) -> String {
		self.demangle_all(&[mangled.to_string()])
			.pop()
			.unwrap_or_else(|| mangled.to_string())
	}

	fn demangle_all(&self, mangled: &[String]) -> Vec<String> {
		if mangled.is_empty() {
			return Vec::new();
		}

		let mut input = mangled.join("\n");
		input.push('\n');

		let output = match run_tool_with_input(&self.program, &[], input) {
			Ok(output) => output,
			Err(e) => {
				warn!(program = %self.program, error = %e, "demangling unavailable, using mangled names");
				return mangled.to_vec();
			}
		};

		let lines: Vec<&str> = output.lines().collect();
		if lines.len() != mangled.len() {
			warn!(
					program = %self.program,
					expected = mangled.len(),
					got = lines.len(),
					"unexpected demangler output, using mangled names"
			);
			return mangled.to_vec();
		}

		lines.into_iter().map(tidy_signature).collect()
	}
}

/// Routes Rust symbols to [`RustDemangler`] and everything else to `c++filt`.
#[derive(Debug, Clone, Default)]
pub struct ChainDemangler {
	rust: RustDemangler,
	cxx: CxxFiltDemangler,
}

impl ChainDemangler {
	pub fn new(cxx: CxxFiltDemangler) -> Self {
		Self {
			rust: RustDemangler,
			cxx,
		}
	}
}

impl Demangler for ChainDemangler {
	fn demangle(&self, mangled: &str) -> String {
		if is_rust_symbol(mangled) {
			self.rust.demangle(mangled)
		} else {
			self.cxx.demangle(mangled)
		}
	}

	fn demangle_all(&self, mangled: &[String]) -> Vec<String> {
		let (rust, other): (Vec<usize>, Vec<usize>) =
			(0..mangled.len()).partition(|&i| is_rust_symbol(&mangled[i]));

		let other_names: Vec<String> = other.iter().map(|&i| mangled[i].clone()).collect();
		let other_demangled = self.cxx.demangle_all(&other_names);

		let mut result = mangled.to_vec();
		for i in rust {
			result[i] = self.rust.demangle(&mangled[i]);
		}
		for (i, demangled) in other.into_iter().zip(other_demangled) {
			result[i] = demangled;
		}
		result
	}
}
