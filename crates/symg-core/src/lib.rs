// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Symbol table generation for native library bindings.
//!
//! This crate provides:
//! - Matching header declarations to the symbols a compiled library exports
//! - Deterministic binding identifiers with overload disambiguation
//! - Stabilization of identifiers against a previously written table
//! - Atomic persistence of the table
//!
//! # Example
//!
//! ```
//! use symg_core::{Declaration, Generator, RawSymbol};
//!
//! let declarations = vec![Declaration {
//!     class: "Foo".to_string(),
//!     name: "Foo".to_string(),
//!     symbol: "_ZN3FooC1Ev".to_string(),
//!     ..Declaration::default()
//! }];
//! let symbols = vec![RawSymbol::new("__ZN3FooC1Ev")];
//!
//! let entries = Generator::new(vec![]).generate(&declarations, &symbols);
//! assert_eq!(entries[0].generated_name, "(*Foo).Init");
//! ```

pub mod error;
pub mod matcher;
pub mod model;
pub mod naming;
pub mod normalize;
pub mod pipeline;
pub mod source;
pub mod stabilize;
pub mod table;

pub use error::{Result, SourceError, SymgError, TableError};
pub use matcher::{match_symbols, Matched};
pub use model::{BindingEntry, Declaration, Parameter, RawSymbol};
pub use naming::{binding_name, NameGenerator, OccurrenceTally};
pub use normalize::{Identity, StripLeadingUnderscore, SymbolNormalizer};
pub use pipeline::{collect_symbols, Generator, Pipeline, RunOutcome, RunRequest, RunSummary};
pub use source::{DeclarationSource, Demangler, SymbolSource};
pub use stabilize::{stabilize, PriorTable};
pub use table::{read_table, render_table, write_table, DEFAULT_TABLE_FILE};
