use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::constants::{
    DEFAULT_API_BASE, DEFAULT_SHEETS_BASE, DEFAULT_SHEET_RANGE, DEFAULT_SPREADSHEET_ID,
};

#[derive(Parser, Debug)]
#[command(name = "capwatch", version, about = "Endorsement cap audits for NationStates regions")]
pub struct Cli {
    /// Script user, required for NS API compliance
    #[arg(short, long)]
    pub user: String,
    /// Google Sheets API key for the citizen roster
    #[arg(short, long)]
    pub key: String,
    /// Delegate nation whose endorsers fall under the standard and citizen caps
    #[arg(short, long)]
    pub delegate: Option<String>,
    /// Region to scan
    #[arg(short, long)]
    pub region: Option<String>,
    /// Excluded nations -- VD, RSC, etc. Use once per nation (-x nation1 -x nation2 ...)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,
    /// Base endocap
    #[arg(short, long)]
    pub basecap: Option<u32>,
    /// Standard endocap
    #[arg(short, long)]
    pub endocap: Option<u32>,
    /// Citizen endocap
    #[arg(short, long)]
    pub citcap: Option<u32>,
    #[arg(long, global = true, help = "Output machine-readable JSON instead of report files")]
    pub json: bool,
    /// Directory the report files are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Pause after each NS API request, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
    /// NationStates API endpoint
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    /// Google Sheets API endpoint
    #[arg(long, default_value = DEFAULT_SHEETS_BASE)]
    pub sheets_base: String,
    /// Citizen roster spreadsheet id
    #[arg(long, default_value = DEFAULT_SPREADSHEET_ID)]
    pub spreadsheet_id: String,
    /// Citizen roster cell range
    #[arg(long, default_value = DEFAULT_SHEET_RANGE)]
    pub sheet_range: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank nations exceeding their endorsement cap
    Violators,
    /// Rank nations by the share of cap violators they endorse
    Endorsers {
        /// Verbose output - will print all violators that a nation is endorsing
        #[arg(short, long)]
        verbose: bool,
    },
}
