use std::str::FromStr;

use vaultscan_core::format::OutputFormat;

/// Parse `--format` values via the core `FromStr` impl, with a
/// clap-friendly error type
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|e| e.to_string())
}
