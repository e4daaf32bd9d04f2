//! Command-line interface for generating and analysing chordal graphs.
//!
//! `generate` builds one or more instances with a chosen method, writes each
//! as an LGF file and appends its statistics to the method's CSV tables.
//! `analyze` reads an LGF file back and reports the same statistics.

mod commands;
mod layout;

pub use commands::{
    AnalyzeCommand, Cli, CliError, Command, ConnectingArgs, ExecutionSummary, GenerateCommand,
    GrowingArgs, InstanceSummary, MethodCommand, PeoArgs, PrunedArgs, RunArgs, render_summary,
    run_cli,
};
pub use layout::OutputLayout;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
