// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end generation runs against in-memory collaborators.

use std::path::{Path, PathBuf};

use symg_core::{
	BindingEntry, Declaration, DeclarationSource, Demangler, Generator, Pipeline, RunRequest,
	SourceError, SymbolSource, SymgError,
};
use tempfile::TempDir;

struct FakeSymbols(Vec<String>);

impl SymbolSource for FakeSymbols {
	fn list_symbols(&self, _library: &Path) -> Result<Vec<String>, SourceError> {
		Ok(self.0.clone())
	}
}

struct FailingSymbols;

impl SymbolSource for FailingSymbols {
	fn list_symbols(&self, library: &Path) -> Result<Vec<String>, SourceError> {
		Err(SourceError::UnresolvedLibrary(library.display().to_string()))
	}
}

struct UpperDemangler;

impl Demangler for UpperDemangler {
	fn demangle(&self, mangled: &str) -> String {
		mangled.to_uppercase()
	}
}

struct FakeDeclarations(Vec<Declaration>);

impl DeclarationSource for FakeDeclarations {
	fn extract(&self, _headers: &[PathBuf]) -> Result<Vec<Declaration>, SourceError> {
		Ok(self.0.clone())
	}
}

struct FailingDeclarations;

impl DeclarationSource for FailingDeclarations {
	fn extract(&self, _headers: &[PathBuf]) -> Result<Vec<Declaration>, SourceError> {
		Err(SourceError::InvalidOutput("truncated".to_string()))
	}
}

fn decl(class: &str, name: &str, symbol: &str) -> Declaration {
	Declaration {
		class: class.to_string(),
		name: name.to_string(),
		symbol: symbol.to_string(),
		..Declaration::default()
	}
}

fn request(dir: &TempDir) -> RunRequest {
	RunRequest {
		library: PathBuf::from("/usr/local/lib/libfoo.dylib"),
		headers: vec![PathBuf::from("/usr/local/include/foo.h")],
		table_path: dir.path().join("llcppg.symb.json"),
		dry_run: false,
	}
}

fn library_symbols() -> FakeSymbols {
	FakeSymbols(vec![
		"__ZN3FooC1Ev".to_string(),
		"__ZN3FooD1Ev".to_string(),
		"__ZN3Foo3BarEv".to_string(),
		"__ZN3Foo3BarEi".to_string(),
		"__ZN3Foo3BarEd".to_string(),
		"_foo_version".to_string(),
	])
}

fn header_declarations() -> Vec<Declaration> {
	vec![
		decl("Foo", "Foo", "_ZN3FooC1Ev"),
		decl("Foo", "~Foo", "_ZN3FooD1Ev"),
		decl("Foo", "Bar", "_ZN3Foo3BarEv"),
		decl("Foo", "Bar", "_ZN3Foo3BarEi"),
		decl("Foo", "Bar", "_ZN3Foo3BarEd"),
		decl("", "foo_version", "foo_version"),
		decl("", "foo_inline_only", "foo_inline_only"),
	]
}

fn run(symbols: &dyn SymbolSource, declarations: Vec<Declaration>, req: &RunRequest) -> Vec<BindingEntry> {
	let declarations = FakeDeclarations(declarations);
	let pipeline = Pipeline {
		symbols,
		demangler: &UpperDemangler,
		declarations: &declarations,
		generator: Generator::new(vec![]),
	};
	pipeline.run(req).unwrap().entries
}

fn generated(entries: &[BindingEntry]) -> Vec<&str> {
	entries.iter().map(|e| e.generated_name.as_str()).collect()
}

#[test]
fn test_first_run_names() {
	let dir = TempDir::new().unwrap();
	let entries = run(&library_symbols(), header_declarations(), &request(&dir));

	assert_eq!(
		generated(&entries),
		vec![
			"(*Foo).Init",
			"(*Foo).Dispose",
			"(*Foo).Bar",
			"(*Foo).Bar__1",
			"(*Foo).Bar__2",
			"foo_version",
		]
	);
	assert_eq!(entries[2].mangled_name, "_ZN3Foo3BarEv");
	assert_eq!(entries[2].native_name, "Foo::Bar");
}

#[test]
fn test_second_run_is_byte_identical() {
	let dir = TempDir::new().unwrap();
	let req = request(&dir);

	let entries = run(&library_symbols(), header_declarations(), &req);
	assert_eq!(entries.len(), 6);
	let first = std::fs::read(&req.table_path).unwrap();

	run(&library_symbols(), header_declarations(), &req);
	let second = std::fs::read(&req.table_path).unwrap();

	assert_eq!(first, second);
}

#[test]
fn test_reordered_declarations_keep_published_names() {
	let dir = TempDir::new().unwrap();
	let req = request(&dir);
	run(&library_symbols(), header_declarations(), &req);

	let mut reordered = header_declarations();
	reordered.swap(2, 4);
	let entries = run(&library_symbols(), reordered, &req);

	let by_mangle = |m: &str| {
		entries
			.iter()
			.find(|e| e.mangled_name == m)
			.map(|e| e.generated_name.clone())
			.unwrap()
	};
	assert_eq!(by_mangle("_ZN3Foo3BarEv"), "(*Foo).Bar");
	assert_eq!(by_mangle("_ZN3Foo3BarEd"), "(*Foo).Bar__2");
}

#[test]
fn test_reordered_declarations_without_prior_table_renumber() {
	let dir = TempDir::new().unwrap();
	let mut req = request(&dir);
	req.dry_run = true;

	let mut reordered = header_declarations();
	reordered.swap(2, 4);
	let entries = run(&library_symbols(), reordered, &req);

	assert_eq!(entries[2].mangled_name, "_ZN3Foo3BarEd");
	assert_eq!(entries[2].generated_name, "(*Foo).Bar");
}

#[test]
fn test_new_overload_appended_without_renaming_existing() {
	let dir = TempDir::new().unwrap();
	let req = request(&dir);
	run(&library_symbols(), header_declarations(), &req);

	let mut symbols = library_symbols();
	symbols.0.push("__ZN3Foo3BarEf".to_string());
	let mut decls = header_declarations();
	decls.insert(2, decl("Foo", "Bar", "_ZN3Foo3BarEf"));

	let entries = run(&symbols, decls, &req);
	let names: Vec<(&str, &str)> = entries
		.iter()
		.map(|e| (e.mangled_name.as_str(), e.generated_name.as_str()))
		.collect();

	assert!(names.contains(&("_ZN3Foo3BarEv", "(*Foo).Bar")));
	assert!(names.contains(&("_ZN3Foo3BarEi", "(*Foo).Bar__1")));
	assert!(names.contains(&("_ZN3Foo3BarEd", "(*Foo).Bar__2")));
	// The newcomer takes whatever candidate its position yields.
	assert!(names.contains(&("_ZN3Foo3BarEf", "(*Foo).Bar")));
}

#[test]
fn test_dry_run_does_not_write() {
	let dir = TempDir::new().unwrap();
	let mut req = request(&dir);
	req.dry_run = true;

	let entries = run(&library_symbols(), header_declarations(), &req);
	assert_eq!(entries.len(), 6);
	assert!(!req.table_path.exists());
}

#[test]
fn test_corrupt_prior_table_aborts_and_is_preserved() {
	let dir = TempDir::new().unwrap();
	let req = request(&dir);
	std::fs::write(&req.table_path, "{ broken").unwrap();

	let declarations = FakeDeclarations(header_declarations());
	let pipeline = Pipeline {
		symbols: &library_symbols(),
		demangler: &UpperDemangler,
		declarations: &declarations,
		generator: Generator::new(vec![]),
	};
	let err = pipeline.run(&req).unwrap_err();

	assert!(matches!(err, SymgError::TableRead(_)));
	assert_eq!(std::fs::read_to_string(&req.table_path).unwrap(), "{ broken");
}

#[test]
fn test_symbol_listing_failure_is_stage_qualified() {
	let dir = TempDir::new().unwrap();
	let req = request(&dir);
	let declarations = FakeDeclarations(header_declarations());
	let pipeline = Pipeline {
		symbols: &FailingSymbols,
		demangler: &UpperDemangler,
		declarations: &declarations,
		generator: Generator::new(vec![]),
	};

	let err = pipeline.run(&req).unwrap_err();
	assert!(matches!(err, SymgError::SymbolList(_)));
	assert!(err.to_string().starts_with("symbol listing failed"));
	assert!(!req.table_path.exists());
}

#[test]
fn test_extraction_failure_is_stage_qualified() {
	let dir = TempDir::new().unwrap();
	let req = request(&dir);
	let pipeline = Pipeline {
		symbols: &library_symbols(),
		demangler: &UpperDemangler,
		declarations: &FailingDeclarations,
		generator: Generator::new(vec![]),
	};

	let err = pipeline.run(&req).unwrap_err();
	assert!(matches!(err, SymgError::Extraction(_)));
	assert!(!req.table_path.exists());
}

#[test]
fn test_summary_counts() {
	let dir = TempDir::new().unwrap();
	let req = request(&dir);
	let declarations = FakeDeclarations(header_declarations());
	let pipeline = Pipeline {
		symbols: &library_symbols(),
		demangler: &UpperDemangler,
		declarations: &declarations,
		generator: Generator::new(vec!["foo_".to_string()]),
	};

	let first = pipeline.run(&req).unwrap();
	assert_eq!(first.summary.symbols, 6);
	assert_eq!(first.summary.declarations, 7);
	assert_eq!(first.summary.matched, 6);
	assert_eq!(first.summary.preserved, 0);
	assert_eq!(first.entries[5].generated_name, "version");

	let second = pipeline.run(&req).unwrap();
	assert_eq!(second.summary.preserved, 6);
}
