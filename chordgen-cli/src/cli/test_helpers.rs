//! Small helpers shared across CLI tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::{
    Cli, CliError, Command, GenerateCommand, GrowingArgs, MethodCommand, RunArgs, run_cli,
};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn run_args(nodes: usize, out_dir: &Path) -> RunArgs {
    RunArgs {
        nodes,
        seed: Some(3),
        instances: 2,
        first_index: 5,
        out_dir: out_dir.to_path_buf(),
        no_write: false,
    }
}

pub(super) fn generate(method: MethodCommand) -> Cli {
    Cli {
        command: Command::Generate(GenerateCommand { method }),
    }
}

pub(super) fn growing(run: RunArgs, max_subtree_size: usize) -> Cli {
    generate(MethodCommand::Gs(GrowingArgs {
        run,
        max_subtree_size,
    }))
}

pub(super) fn read_lines(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents.lines().map(str::to_owned).collect(),
        Err(err) => panic!("failed to read {}: {err}", path.display()),
    }
}

pub(super) fn written_outputs(cli: Cli) -> Vec<PathBuf> {
    match run_cli(cli) {
        Ok(summary) => summary
            .instances
            .into_iter()
            .filter_map(|instance| instance.output)
            .collect(),
        Err(err) => panic!("command failed: {err}"),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
