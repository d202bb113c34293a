// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Binding identifier synthesis.
//!
//! Identifiers take the shape `(*Class).Method`, `(*Class).Init`,
//! `(*Class).Dispose` or a bare `Function`. Overloads that share a qualified
//! native name are told apart by a `__k` suffix assigned in encounter order,
//! so the iteration order of the input declarations is part of the output.

use std::collections::HashMap;

use crate::model::Declaration;

/// Method name used for constructors.
pub const CONSTRUCTOR_NAME: &str = "Init";
/// Method name used for destructors.
pub const DESTRUCTOR_NAME: &str = "Dispose";

/// Running count of how many times each native name has been seen in a run.
#[derive(Debug, Clone, Default)]
pub struct OccurrenceTally {
	counts: HashMap<String, usize>,
}

impl OccurrenceTally {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record one more occurrence and return the updated count (starting at 1).
	pub fn record(&mut self, native_name: &str) -> usize {
		let count = self.counts.entry(native_name.to_string()).or_insert(0);
		*count += 1;
		*count
	}
}

/// What a declaration looks like once its prefixes have been trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
	Constructor,
	Destructor,
	Method,
	Function,
}

/// Remove the first prefix in `prefixes` that `value` starts with.
pub fn trim_prefix<'a>(value: &'a str, prefixes: &[String]) -> &'a str {
	prefixes
		.iter()
		.find_map(|prefix| value.strip_prefix(prefix.as_str()))
		.unwrap_or(value)
}

/// Classify an already-trimmed class/name pair.
pub fn classify(class: &str, name: &str) -> MemberKind {
	if class.is_empty() {
		return MemberKind::Function;
	}
	if name == class {
		MemberKind::Constructor
	} else if name.strip_prefix('~') == Some(class) {
		MemberKind::Destructor
	} else {
		MemberKind::Method
	}
}

/// Compose the identifier for `declaration`, given that this is its
/// `occurrence`-th appearance (1-based) under its native name.
pub fn binding_name(declaration: &Declaration, occurrence: usize, prefixes: &[String]) -> String {
	let class = trim_prefix(&declaration.class, prefixes);
	let name = trim_prefix(&declaration.name, prefixes);

	let mut ident = match classify(class, name) {
		MemberKind::Constructor => format!("(*{class}).{CONSTRUCTOR_NAME}"),
		MemberKind::Destructor => format!("(*{class}).{DESTRUCTOR_NAME}"),
		MemberKind::Method => format!("(*{class}).{name}"),
		MemberKind::Function => name.to_string(),
	};

	if occurrence > 1 {
		ident.push_str(&format!("__{}", occurrence - 1));
	}
	ident
}

/// Assigns identifiers to matched declarations, threading the tally through
/// successive calls.
#[derive(Debug)]
pub struct NameGenerator<'p> {
	prefixes: &'p [String],
	tally: OccurrenceTally,
}

impl<'p> NameGenerator<'p> {
	pub fn new(prefixes: &'p [String]) -> Self {
		Self {
			prefixes,
			tally: OccurrenceTally::new(),
		}
	}

	/// Returns `(native_name, generated_name)` for the next matched declaration.
	pub fn assign(&mut self, declaration: &Declaration) -> (String, String) {
		let native_name = declaration.native_name();
		let occurrence = self.tally.record(&native_name);
		let generated = binding_name(declaration, occurrence, self.prefixes);
		(native_name, generated)
	}
}
