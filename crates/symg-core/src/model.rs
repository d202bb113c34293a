// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Records exchanged between the collaborators, the matcher and the table.

use serde::{Deserialize, Serialize};

/// A symbol exported by a compiled native library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSymbol {
	/// Mangled name exactly as listed by the symbol tool.
	pub name: String,
	/// Human-readable signature. Display only; never used for matching.
	pub demangled: String,
}

impl RawSymbol {
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			demangled: name.clone(),
			name,
		}
	}

	pub fn with_demangled(mut self, demangled: impl Into<String>) -> Self {
		self.demangled = demangled.into();
		self
	}
}

/// A function parameter as reported by the declaration extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
	#[serde(default)]
	pub name: String,
	#[serde(default, rename = "type")]
	pub ty: String,
}

/// One header-declared function or method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Declaration {
	pub namespace: String,
	pub class: String,
	pub name: String,
	pub base_classes: Vec<String>,
	pub return_type: String,
	pub location: String,
	pub parameters: Vec<Parameter>,
	/// Reference to the native symbol this declaration compiles to.
	pub symbol: String,
}

impl Declaration {
	/// Qualified display name: `Class::Name`, or bare `Name` for free functions.
	pub fn native_name(&self) -> String {
		if self.class.is_empty() {
			self.name.clone()
		} else {
			format!("{}::{}", self.class, self.name)
		}
	}
}

/// One row of the persisted symbol table.
///
/// The JSON field names are shared with the binding generator that consumes
/// the table and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEntry {
	#[serde(rename = "mangle")]
	pub mangled_name: String,
	#[serde(rename = "c++")]
	pub native_name: String,
	#[serde(rename = "go")]
	pub generated_name: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_native_name_with_class() {
		let decl = Declaration {
			class: "Foo".to_string(),
			name: "Bar".to_string(),
			..Declaration::default()
		};
		assert_eq!(decl.native_name(), "Foo::Bar");
	}

	#[test]
	fn test_native_name_free_function() {
		let decl = Declaration {
			name: "sqlite3_open".to_string(),
			..Declaration::default()
		};
		assert_eq!(decl.native_name(), "sqlite3_open");
	}

	#[test]
	fn test_declaration_deserializes_extractor_fields() {
		let json = r#"{
			"namespace": "ns",
			"class": "Foo",
			"name": "bar",
			"baseClasses": ["Base"],
			"returnType": "int",
			"location": "foo.h:12",
			"parameters": [{"name": "x", "type": "double"}],
			"symbol": "_ZN2ns3Foo3barEd"
		}"#;

		let decl: Declaration = serde_json::from_str(json).unwrap();
		assert_eq!(decl.namespace, "ns");
		assert_eq!(decl.base_classes, vec!["Base".to_string()]);
		assert_eq!(decl.return_type, "int");
		assert_eq!(decl.parameters[0].ty, "double");
		assert_eq!(decl.symbol, "_ZN2ns3Foo3barEd");
	}

	#[test]
	fn test_declaration_missing_fields_default_empty() {
		let decl: Declaration = serde_json::from_str(r#"{"name": "f", "symbol": "f"}"#).unwrap();
		assert!(decl.class.is_empty());
		assert!(decl.parameters.is_empty());
	}

	#[test]
	fn test_binding_entry_uses_table_field_names() {
		let entry = BindingEntry {
			mangled_name: "_ZN3Foo3BarEv".to_string(),
			native_name: "Foo::Bar".to_string(),
			generated_name: "(*Foo).Bar".to_string(),
		};

		let value = serde_json::to_value(&entry).unwrap();
		assert_eq!(value["mangle"], "_ZN3Foo3BarEv");
		assert_eq!(value["c++"], "Foo::Bar");
		assert_eq!(value["go"], "(*Foo).Bar");
	}

	#[test]
	fn test_binding_entry_requires_all_fields() {
		let result = serde_json::from_str::<BindingEntry>(r#"{"mangle": "x", "c++": "y"}"#);
		assert!(result.is_err());
	}
}
