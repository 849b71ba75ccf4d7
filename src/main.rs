// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton CLI entrypoint.
//!
//! Runs the interactive canvas TUI. Pass a catalog file (a JSON array of
//! table descriptors) to populate the palette; without one the built-in
//! sample catalog is used.

use std::error::Error;

use triton::catalog::Catalog;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<catalog-file>]\n  {program} [--catalog <file>]\n\nThe catalog file is a JSON array of table descriptors:\n  [{{\"id\": \"t1\", \"name\": \"orders\", \"columns\": [{{\"column_id\": \"c1\", \"name\": \"order_id\", \"data_type\": \"integer\"}}]}}]\n\nWithout a catalog file the built-in sample tables are used."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    catalog_file: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => {
                if options.catalog_file.is_some() {
                    return Err(());
                }
                let file = args.next().ok_or(())?;
                options.catalog_file = Some(file);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.catalog_file.is_some() {
                    return Err(());
                }
                options.catalog_file = Some(arg);
            }
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "triton".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let catalog = match options.catalog_file {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::builtin(),
        };

        triton::tui::run_with_catalog(catalog)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("triton: {err}");
        std::process::exit(1);
    }
}
