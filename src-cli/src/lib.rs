//! SecureVault command shell.
//!
//! Thin layer over `securevault-vault`: parses arguments, acquires
//! passwords, calls one handler from [`commands`], and prints the result.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod prompt;

use securevault_vault::Settings;

use cli::{Cli, Commands};
use commands::password_generator::GeneratePasswordRequest;

/// Execute the parsed command.
///
/// # Errors
///
/// Returns the user-facing message of whichever step failed.
pub fn run(cli: Cli, settings: &Settings) -> Result<(), String> {
    match cli.command {
        Commands::Export {
            entries,
            out,
            allow_weak,
        } => {
            let password = prompt::read_password("Export password", true)?;
            let response =
                commands::export::export_vault(&entries, &out, &password, allow_weak, settings)?;
            println!(
                "Exported {} entries to {}",
                response.entry_count,
                response.path.display()
            );
        }
        Commands::Import { file, out } => {
            let password = prompt::read_password("Import password", false)?;
            let response = commands::import::import_vault(&file, &password, settings)?;
            match out {
                Some(path) => {
                    commands::import::write_entries(&path, &response)?;
                    println!("Imported {} entries to {}", response.count, path.display());
                }
                None => println!("{}", response.entries_json()?),
            }
        }
        Commands::Strength => {
            let password = prompt::read_password("Password", false)?;
            println!("{}", commands::strength::check_strength(&password)?);
        }
        Commands::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
        } => {
            let request = GeneratePasswordRequest {
                length,
                uppercase: no_uppercase.then_some(false),
                lowercase: no_lowercase.then_some(false),
                digits: no_numbers.then_some(false),
                symbols: no_symbols.then_some(false),
            };
            let result = commands::password_generator::generate_password(&request, settings)?;
            println!("{}", result.value);
        }
    }
    Ok(())
}
