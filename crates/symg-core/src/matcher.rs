// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pairs declarations with the library symbols they compile to.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::model::{Declaration, RawSymbol};
use crate::normalize::SymbolNormalizer;

/// A declaration together with the first library symbol that matched it.
#[derive(Debug, Clone, Copy)]
pub struct Matched<'a> {
	pub declaration: &'a Declaration,
	pub symbol: &'a RawSymbol,
}

/// Match each declaration, in input order, to the first raw symbol whose
/// normalized name equals the declaration's symbol reference. The reference
/// is compared as written; only the listed name carries the platform marker.
///
/// Declarations without a matching symbol are dropped. Ambiguities are
/// resolved silently: only the first symbol in listing order is considered,
/// and one symbol may be matched by several declarations.
pub fn match_symbols<'a>(
	declarations: &'a [Declaration],
	symbols: &'a [RawSymbol],
	normalizer: &dyn SymbolNormalizer,
) -> Vec<Matched<'a>> {
	let mut index: HashMap<&'a str, &'a RawSymbol> = HashMap::with_capacity(symbols.len());
	for symbol in symbols {
		index.entry(normalizer.normalize(&symbol.name)).or_insert(symbol);
	}

	let mut matched = Vec::new();
	for declaration in declarations {
		match index.get(declaration.symbol.as_str()).copied() {
			Some(symbol) => {
				debug!(
						symbol = %symbol.name,
						demangled = %symbol.demangled,
						location = %declaration.location,
						"matched declaration"
				);
				matched.push(Matched {
					declaration,
					symbol,
				});
			}
			None => {
				trace!(symbol = %declaration.symbol, "no library symbol for declaration");
			}
		}
	}

	matched
}
