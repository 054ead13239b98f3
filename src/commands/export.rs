use crate::libs::export::{ExportFormat, ExportTarget, Exporter};
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(value_enum)]
    target: ExportTarget,
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file, date-stamped name in the current directory when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    if let Some(parent) = args.output.as_ref().and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            msg_bail_anyhow!(Message::ExportDirectoryMissing(parent.display().to_string()));
        }
    }
    Exporter::new(args.format, args.target, args.output).export(args.target)
}
