//! Init subcommand for todo-presets CLI
//!
//! Materializes a preset into the database for the configured user.

use crate::format::OutputFormat;
use clap::Args;

/// Arguments for the init subcommand
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Preset name (file name without `.json`)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Report what would be created without modifying the database
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,
}

impl InitArgs {
    /// Describe the init mode for logging
    pub fn init_mode(&self) -> &'static str {
        if self.dry_run { "dry-run" } else { "create" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_mode() {
        let args = InitArgs {
            name: "study".to_string(),
            dry_run: true,
            format: OutputFormat::Markdown,
        };
        assert_eq!(args.init_mode(), "dry-run");

        let args = InitArgs {
            name: "study".to_string(),
            dry_run: false,
            format: OutputFormat::Json,
        };
        assert_eq!(args.init_mode(), "create");
    }
}
