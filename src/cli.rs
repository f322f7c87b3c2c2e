//! CLI domain: parse, route, help and output only.
//! No domain orchestration; single route table dispatches to the config store.

mod help;
mod output;
mod parse;
mod route;

pub use help::command_name;
pub use output::{map_error, parse_format, render_document, render_value};
pub use parse::{Cli, Commands};
pub use route::RunContext;
