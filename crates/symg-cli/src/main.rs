// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod args;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use symg_config::ConfigError;
use symg_core::{
	render_table, DeclarationSource, Generator, Pipeline, RunRequest, SourceError, SymgError,
};
use symg_tools::{
	ChainDemangler, CommandDeclarationSource, CxxFiltDemangler, JsonDeclarationSource,
	NmSymbolSource,
};
use tracing::info;

use args::Args;

fn main() -> ExitCode {
	let args = Args::parse();
	logging::init(args.verbose, args.log_json);

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("symg: {e}");
			ExitCode::FAILURE
		}
	}
}

fn run(args: &Args) -> anyhow::Result<()> {
	let config = symg_config::load_config(&args.config).map_err(SymgError::config)?;
	info!(name = %config.name, config = %args.config.display(), "loaded configuration");

	let library = config
		.library_path(&args.dylib_ext)
		.map_err(|e| SymgError::SymbolList(SourceError::UnresolvedLibrary(e.to_string())))?;

	let declarations: Box<dyn DeclarationSource> = match &args.declarations {
		Some(path) => Box::new(JsonDeclarationSource::new(path)),
		None => Box::new(
			CommandDeclarationSource::from_command_line(&args.extractor).ok_or_else(|| {
				SymgError::config(ConfigError::validation("extractor command must not be empty"))
			})?,
		),
	};

	let pipeline = Pipeline {
		symbols: &NmSymbolSource::new(args.nm.as_str()),
		demangler: &ChainDemangler::new(CxxFiltDemangler::new(args.demangler.as_str())),
		declarations: declarations.as_ref(),
		generator: Generator::new(config.trim_prefixes.clone())
			.with_normalizer(args.symbol_prefix.normalizer()),
	};

	let request = RunRequest {
		library,
		headers: config.header_paths(),
		table_path: args.output.clone(),
		dry_run: args.dry_run,
	};

	let outcome = pipeline.run(&request)?;

	if args.dry_run {
		let json = render_table(&outcome.entries).map_err(SymgError::TableWrite)?;
		print!("{json}");
	} else {
		info!(
				path = %request.table_path.display(),
				entries = outcome.summary.matched,
				"wrote symbol table"
		);
	}

	info!(
			symbols = outcome.summary.symbols,
			declarations = outcome.summary.declarations,
			matched = outcome.summary.matched,
			preserved = outcome.summary.preserved,
			"done"
	);
	Ok(())
}
