//! CLI Adapter.

mod wizard;

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Error as DialoguerError};
use std::io::ErrorKind;

use crate::domain::AppError;
use crate::ports::{DraftStore, RecordReceipt};
use crate::services::FilesystemDraftStore;

#[derive(Parser)]
#[command(name = "provision")]
#[command(version)]
#[command(
    about = "Plan restaurant POS hardware orders and record them in Notion",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the order wizard (stations, printers, network, review)
    #[clap(visible_alias = "w")]
    Wizard,
    /// Print the order summary for the saved draft
    #[clap(visible_alias = "r")]
    Review,
    /// Copy the order summary for the saved draft to the clipboard
    #[clap(visible_alias = "c")]
    Copy,
    /// Create the Notion record for the saved draft
    #[clap(visible_alias = "s")]
    Submit {
        /// Print the record instead of calling the Notion API
        #[arg(long)]
        mock: bool,
    },
    /// Discard the saved draft
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Wizard => run_wizard(),
        Commands::Review => run_review(),
        Commands::Copy => run_copy(),
        Commands::Submit { mock } => run_submit(mock),
        Commands::Reset { yes } => run_reset(yes),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_wizard() -> Result<(), AppError> {
    let drafts = FilesystemDraftStore::current()?;
    wizard::run(&drafts)
}

fn run_review() -> Result<(), AppError> {
    let text = crate::review()?;
    println!("{}", text);
    Ok(())
}

fn run_copy() -> Result<(), AppError> {
    crate::copy_summary()?;
    println!("✅ Order summary copied to clipboard");
    Ok(())
}

fn run_submit(mock: bool) -> Result<(), AppError> {
    let receipt = crate::submit(mock)?;
    print_receipt(&receipt);
    Ok(())
}

fn print_receipt(receipt: &RecordReceipt) {
    match &receipt.record_url {
        Some(url) => println!("✅ Order created in Notion: {}", url),
        None => println!("✅ Order created in Notion"),
    }
}

fn run_reset(yes: bool) -> Result<(), AppError> {
    if !yes {
        let drafts = FilesystemDraftStore::current()?;
        if !drafts.exists() {
            println!("No saved draft to discard");
            return Ok(());
        }
        let Some(confirmed) = prompt_reset_confirm()? else {
            return Ok(());
        };
        if !confirmed {
            return Ok(());
        }
    }
    if crate::reset()? {
        println!("✅ Draft cleared");
    } else {
        println!("No saved draft to discard");
    }
    Ok(())
}

fn prompt_reset_confirm() -> Result<Option<bool>, AppError> {
    match Confirm::new().with_prompt("Discard the saved order draft?").default(false).interact() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Confirmation failed: {}", err))),
    }
}
