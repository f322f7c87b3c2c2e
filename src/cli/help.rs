//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Stable command name used in log records (e.g. "show", "merge").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Show { .. } => "show",
        Commands::Get { .. } => "get",
        Commands::Merge { .. } => "merge",
        Commands::Path => "path",
        Commands::Refresh => "refresh",
        Commands::Delete => "delete",
    }
}
