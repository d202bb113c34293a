// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Keeps previously published binding identifiers across regenerations.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::TableError;
use crate::model::BindingEntry;
use crate::table;

/// Lookup from mangled name to the identifier assigned by a previous run.
#[derive(Debug, Clone, Default)]
pub struct PriorTable {
	names: HashMap<String, String>,
}

impl PriorTable {
	pub fn empty() -> Self {
		Self::default()
	}

	/// Build the lookup from table rows. A repeated mangled name keeps the
	/// last row's identifier.
	pub fn from_entries(entries: impl IntoIterator<Item = BindingEntry>) -> Self {
		let mut names = HashMap::new();
		for entry in entries {
			if let Some(previous) = names.insert(entry.mangled_name.clone(), entry.generated_name) {
				warn!(
						mangled = %entry.mangled_name,
						previous = %previous,
						"duplicate entry in existing symbol table"
				);
			}
		}
		Self { names }
	}

	/// Load the table at `path`. A missing file yields an empty lookup; a file
	/// that cannot be read or parsed is an error.
	pub fn load(path: &Path) -> Result<Self, TableError> {
		Ok(match table::read_table(path)? {
			Some(entries) => Self::from_entries(entries),
			None => Self::empty(),
		})
	}

	pub fn get(&self, mangled_name: &str) -> Option<&str> {
		self.names.get(mangled_name).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

/// Overwrite each entry's identifier with the one recorded in `prior`, if any.
///
/// Returns how many entries took their identifier from `prior`.
pub fn stabilize(entries: &mut [BindingEntry], prior: &PriorTable) -> usize {
	let mut preserved = 0;
	for entry in entries.iter_mut() {
		let Some(existing) = prior.get(&entry.mangled_name) else {
			continue;
		};
		if existing != entry.generated_name {
			debug!(
					mangled = %entry.mangled_name,
					candidate = %entry.generated_name,
					kept = %existing,
					"keeping previously assigned name"
			);
			entry.generated_name = existing.to_string();
		}
		preserved += 1;
	}
	preserved
}
