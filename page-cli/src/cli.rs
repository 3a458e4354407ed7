//! CLI parser.

use clap::{Parser, Subcommand};

use crate::input::{parse_document_spec, DocumentSpec};

#[derive(Parser, Debug)]
#[command(name = "hwp-pages")]
#[command(about = "Estimate HWP page counts and generate an overarching title", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Keep statistics in memory only (nothing is read from or written to disk).
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Statistics database; overrides DATABASE_URL.
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Log file; overrides LOG_FILE.
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate pages for the given documents, generate a title and print the token.
    Process {
        /// Documents as `[TITLE=]PATH`; `-` reads content from stdin.
        #[arg(required = true, value_parser = parse_document_spec)]
        documents: Vec<DocumentSpec>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show cumulative statistics (counts as a visit for the day counter).
    Stats,
    /// Edit documents and process them in an interactive session.
    Interactive,
}
