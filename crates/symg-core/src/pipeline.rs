// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The match, name, stabilize and emit pass.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, SymgError};
use crate::matcher::match_symbols;
use crate::model::{BindingEntry, Declaration, RawSymbol};
use crate::naming::NameGenerator;
use crate::normalize::{StripLeadingUnderscore, SymbolNormalizer};
use crate::source::{DeclarationSource, Demangler, SymbolSource};
use crate::stabilize::{stabilize, PriorTable};
use crate::table;

/// Matches declarations to symbols and assigns binding identifiers.
pub struct Generator {
	prefixes: Vec<String>,
	normalizer: Box<dyn SymbolNormalizer>,
}

impl Generator {
	pub fn new(prefixes: Vec<String>) -> Self {
		Self {
			prefixes,
			normalizer: Box::new(StripLeadingUnderscore),
		}
	}

	pub fn with_normalizer(mut self, normalizer: Box<dyn SymbolNormalizer>) -> Self {
		self.normalizer = normalizer;
		self
	}

	/// Build table rows for every declaration that has a library symbol, in
	/// declaration order. The occurrence tally starts empty on every call and
	/// only counts matched declarations.
	pub fn generate(&self, declarations: &[Declaration], symbols: &[RawSymbol]) -> Vec<BindingEntry> {
		let matched = match_symbols(declarations, symbols, self.normalizer.as_ref());
		let mut names = NameGenerator::new(&self.prefixes);

		matched
			.into_iter()
			.map(|m| {
				let (native_name, generated_name) = names.assign(m.declaration);
				debug!(symbol = %generated_name, "generated");
				BindingEntry {
					mangled_name: self.normalizer.normalize(&m.symbol.name).to_string(),
					native_name,
					generated_name,
				}
			})
			.collect()
	}

	/// [`Generator::generate`] followed by stabilization against `prior`.
	pub fn regenerate(
		&self,
		declarations: &[Declaration],
		symbols: &[RawSymbol],
		prior: &PriorTable,
	) -> (Vec<BindingEntry>, usize) {
		let mut entries = self.generate(declarations, symbols);
		let preserved = stabilize(&mut entries, prior);
		(entries, preserved)
	}
}

/// List a library's symbols and attach their demangled signatures.
pub fn collect_symbols(
	source: &dyn SymbolSource,
	demangler: &dyn Demangler,
	library: &Path,
) -> Result<Vec<RawSymbol>> {
	let names = source.list_symbols(library).map_err(SymgError::SymbolList)?;
	let demangled = demangler.demangle_all(&names);

	info!(library = %library.display(), symbols = names.len(), "listed library symbols");

	Ok(names
		.into_iter()
		.zip(demangled)
		.map(|(name, demangled)| RawSymbol::new(name).with_demangled(demangled))
		.collect())
}

/// Everything a single generation run needs.
pub struct Pipeline<'a> {
	pub symbols: &'a dyn SymbolSource,
	pub demangler: &'a dyn Demangler,
	pub declarations: &'a dyn DeclarationSource,
	pub generator: Generator,
}

/// Inputs resolved from configuration.
#[derive(Debug, Clone)]
pub struct RunRequest {
	pub library: PathBuf,
	pub headers: Vec<PathBuf>,
	pub table_path: PathBuf,
	/// Build and return the table without writing it.
	pub dry_run: bool,
}

/// Counts describing a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
	pub symbols: usize,
	pub declarations: usize,
	pub matched: usize,
	pub preserved: usize,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
	pub entries: Vec<BindingEntry>,
	pub summary: RunSummary,
}

impl Pipeline<'_> {
	/// Run every stage in order, stopping at the first failure. The table file
	/// is only replaced once all stages before it have succeeded.
	pub fn run(&self, request: &RunRequest) -> Result<RunOutcome> {
		let symbols = collect_symbols(self.symbols, self.demangler, &request.library)?;

		let declarations = self
			.declarations
			.extract(&request.headers)
			.map_err(SymgError::Extraction)?;
		info!(
				headers = request.headers.len(),
				declarations = declarations.len(),
				"extracted declarations"
		);

		let prior = PriorTable::load(&request.table_path).map_err(SymgError::TableRead)?;
		let (entries, preserved) = self.generator.regenerate(&declarations, &symbols, &prior);

		if !request.dry_run {
			table::write_table(&request.table_path, &entries).map_err(SymgError::TableWrite)?;
		}

		let summary = RunSummary {
			symbols: symbols.len(),
			declarations: declarations.len(),
			matched: entries.len(),
			preserved,
		};
		info!(
				path = %request.table_path.display(),
				matched = summary.matched,
				preserved = summary.preserved,
				dry_run = request.dry_run,
				"symbol table generated"
		);

		Ok(RunOutcome { entries, summary })
	}
}
