use crate::types::FormatArg;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "treescope")]
#[command(about = "Browse structured data files interactively", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Document to browse
    pub file: PathBuf,

    /// Document format (detected from the extension when omitted)
    #[arg(long)]
    pub format: Option<FormatArg>,

    /// Config file path (default: the XDG config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rows reserved for chrome when sizing the scroll window
    #[arg(long)]
    pub page_margin: Option<u16>,
}
