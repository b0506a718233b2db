//! Command-line argument parsing
//!
//! Supports:
//! - Validating and normalizing colorscheme documents
//! - Printing the highlight script for a document
//! - Turning a highlight-table snapshot into a document
//! - Saving a document as a colorscheme file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Edit a Vim colorscheme as a YAML document
#[derive(Parser, Debug)]
#[command(name = "colordinate", version, about = "Edit a Vim colorscheme as a YAML document")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Validate a document and report the first problem
    Check {
        #[arg(value_name = "DOC")]
        document: PathBuf,
    },

    /// Rewrite a document in canonical form
    Fmt {
        #[arg(value_name = "DOC")]
        document: PathBuf,

        /// Write the result back to DOC instead of printing it
        #[arg(short = 'w', long)]
        write: bool,
    },

    /// Print the highlight commands for a document
    Script {
        #[arg(value_name = "DOC")]
        document: PathBuf,
    },

    /// Print the document for a JSON highlight-table snapshot
    Extract {
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
    },

    /// Save a document as `<NAME>.vim` in the configured save path
    Save {
        #[arg(value_name = "DOC")]
        document: PathBuf,

        /// Colorscheme name (`g:colors_name`)
        #[arg(value_name = "NAME")]
        name: String,

        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },

    /// Print the line a group is defined on
    Jump {
        #[arg(value_name = "DOC")]
        document: PathBuf,

        #[arg(value_name = "GROUP")]
        group: String,
    },
}
