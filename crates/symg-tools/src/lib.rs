// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! External tool integrations for symbol table generation.
//!
//! This crate provides:
//! - Symbol listing with `nm`
//! - Demangling via `rustc-demangle` and `c++filt`
//! - Declaration extraction through an external header parser

mod command;
pub mod declarations;
pub mod demangle;
pub mod nm;

pub use declarations::{parse_declarations, CommandDeclarationSource, JsonDeclarationSource};
pub use demangle::{is_rust_symbol, tidy_signature, ChainDemangler, CxxFiltDemangler, RustDemangler};
pub use nm::{parse_nm_output, NmSymbolSource};
