//! Unit tests for the CLI commands, output layout and summary rendering.

use super::test_helpers::{
    generate, growing, read_lines, run_args, run_cli_expecting_error, temp_dir, written_outputs,
};
use super::{
    AnalyzeCommand, Cli, CliError, Command, ConnectingArgs, ExecutionSummary, InstanceSummary,
    MethodCommand, OutputLayout, PeoArgs, PrunedArgs, render_summary, run_cli,
};

use std::path::Path;
use std::time::Duration;

use chordgen_core::{ChordalError, ChordalGraph, GenerationMethod, analyze};
use chordgen_export::{CLIQUE_SIZE_FILE_NAME, ExportError, INSTANCE_INFO_FILE_NAME};
use chordgen_test_support::tracing::RecordingLayer;
use clap::Parser;
use rstest::rstest;
use tracing::Level;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
fn layout_places_graphs_under_method_and_size() {
    let layout = OutputLayout::new("out");
    assert_eq!(
        layout.method_dir("cn"),
        Path::new("out").join("ChordalGraphs").join("cn")
    );
    assert_eq!(
        layout.graph_path("cn", 12, 0),
        Path::new("out/ChordalGraphs/cn/12/chordalgr_12_0.lgf")
    );
}

#[rstest]
fn generate_writes_graphs_and_statistics() -> TestResult {
    let dir = temp_dir();
    let outputs = written_outputs(growing(run_args(10, dir.path()), 4));

    let layout = OutputLayout::new(dir.path());
    assert_eq!(
        outputs,
        vec![layout.graph_path("gs", 10, 5), layout.graph_path("gs", 10, 6)]
    );
    for path in &outputs {
        assert!(path.is_file(), "{} must exist", path.display());
    }

    let info = read_lines(&layout.method_dir("gs").join(INSTANCE_INFO_FILE_NAME));
    assert_eq!(info.len(), 2);
    for (line, path) in info.iter().zip(&outputs) {
        let cells: Vec<&str> = line.split(',').collect();
        assert_eq!(cells.first().copied(), Some(path.display().to_string().as_str()));
        assert_eq!(cells.get(1).copied(), Some("growingSubtree"));
        assert_eq!(cells.get(2).copied(), Some("4"));
        assert_eq!(cells.get(3).copied(), Some("10"));
        assert_eq!(cells.len(), 13);
    }

    let frequencies = read_lines(&layout.method_dir("gs").join(CLIQUE_SIZE_FILE_NAME));
    assert_eq!(frequencies.len(), 2);
    for line in &frequencies {
        assert_eq!(line.split(',').count(), 11, "one cell per clique size 1..=10");
    }
    Ok(())
}

#[rstest]
fn repeated_runs_append_to_statistics() {
    let dir = temp_dir();
    written_outputs(growing(run_args(8, dir.path()), 3));
    written_outputs(growing(run_args(8, dir.path()), 3));

    let info = OutputLayout::new(dir.path())
        .method_dir("gs")
        .join(INSTANCE_INFO_FILE_NAME);
    assert_eq!(read_lines(&info).len(), 4);
}

#[rstest]
fn no_write_leaves_the_output_directory_untouched() -> TestResult {
    let dir = temp_dir();
    let mut run = run_args(15, dir.path());
    run.no_write = true;
    let summary = run_cli(generate(MethodCommand::Peo(PeoArgs {
        run,
        upper_bound_coef: 0.4,
    })))?;

    assert_eq!(summary.instances.len(), 2);
    assert!(summary.instances.iter().all(|item| item.output.is_none()));
    assert!(!dir.path().join("ChordalGraphs").exists());
    Ok(())
}

#[rstest]
#[case::connecting(MethodCommand::Cn(ConnectingArgs { run: run_args(20, Path::new(".")), threshold_prob: 0.2 }))]
#[case::pruned(MethodCommand::Pt(PrunedArgs { run: run_args(20, Path::new(".")), edge_deletion: 0.5, selection_barrier: 0.25 }))]
#[case::peo(MethodCommand::Peo(PeoArgs { run: run_args(20, Path::new(".")), upper_bound_coef: 0.3 }))]
fn seeded_runs_are_reproducible(#[case] method: MethodCommand) -> TestResult {
    let disable_writes = |method: &MethodCommand| {
        let mut method = method.clone();
        match &mut method {
            MethodCommand::Gs(args) => args.run.no_write = true,
            MethodCommand::Cn(args) => args.run.no_write = true,
            MethodCommand::Pt(args) => args.run.no_write = true,
            MethodCommand::Peo(args) => args.run.no_write = true,
        }
        generate(method)
    };
    let first = run_cli(disable_writes(&method))?;
    let second = run_cli(disable_writes(&method))?;

    for (left, right) in first.instances.iter().zip(&second.instances) {
        assert_eq!(left.seed, right.seed);
        assert_eq!(left.stats, right.stats);
    }
    assert_ne!(first.instances[0].seed, first.instances[1].seed);
    Ok(())
}

#[rstest]
fn analyze_reports_the_written_graph() -> TestResult {
    let dir = temp_dir();
    let generated = run_cli(growing(run_args(12, dir.path()), 5))?;
    let instance = &generated.instances[0];
    let path = instance.output.clone().ok_or("graph must be written")?;

    let analysed = run_cli(Cli {
        command: Command::Analyze(AnalyzeCommand { path: path.clone() }),
    })?;

    let [report] = analysed.instances.as_slice() else {
        return Err("analyze reports exactly one instance".into());
    };
    assert_eq!(report.label, path.display().to_string());
    assert_eq!(report.method, None);
    assert_eq!(report.stats.edge_count(), instance.stats.edge_count());
    assert_eq!(report.stats.clique_count(), instance.stats.clique_count());
    assert_eq!(
        report.stats.clique_size_histogram(),
        instance.stats.clique_size_histogram()
    );
    Ok(())
}

#[rstest]
fn analyze_rejects_missing_files() {
    let dir = temp_dir();
    let cli = Cli {
        command: Command::Analyze(AnalyzeCommand {
            path: dir.path().join("absent.lgf"),
        }),
    };
    let err = run_cli_expecting_error(cli, "missing file must fail");
    assert!(matches!(err, CliError::Export(ExportError::Open { .. })));
}

#[rstest]
fn generate_rejects_invalid_parameters() {
    let dir = temp_dir();
    let cli = generate(MethodCommand::Pt(PrunedArgs {
        run: run_args(10, dir.path()),
        edge_deletion: 1.0,
        selection_barrier: 0.2,
    }));
    let err = run_cli_expecting_error(cli, "edge deletion of 1 must be rejected");
    assert!(matches!(
        err,
        CliError::Core(ChordalError::ParameterOutOfRange { .. })
    ));
    assert!(!dir.path().join("ChordalGraphs").exists());
}

#[rstest]
fn generate_rejects_overflowing_indices() {
    let dir = temp_dir();
    let mut run = run_args(5, dir.path());
    run.first_index = u64::MAX;
    let err = run_cli_expecting_error(growing(run, 2), "index range must overflow");
    assert!(matches!(
        err,
        CliError::IndexOverflow {
            first_index: u64::MAX,
            instances: 2
        }
    ));
}

#[rstest]
fn generate_reports_unwritable_output_roots() -> TestResult {
    let dir = temp_dir();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory")?;
    let err = run_cli_expecting_error(growing(run_args(5, &blocker), 2), "root is a file");
    assert!(matches!(err, CliError::CreateDir { .. }));
    Ok(())
}

#[rstest]
#[case::short_names(&["chordgen", "generate", "pt", "--nodes", "20", "--edge-deletion", "0.5", "--selection-barrier", "0.1"])]
#[case::alias(&["chordgen", "generate", "growing-subtree", "-n", "20", "--max-subtree-size", "4"])]
#[case::batch(&["chordgen", "generate", "cn", "-n", "20", "--threshold-prob", "0.3", "--instances", "5", "--first-index", "2", "--seed", "8"])]
#[case::analyze(&["chordgen", "analyze", "graph.lgf"])]
fn clap_accepts_supported_invocations(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_ok(), "{args:?} must parse");
}

#[rstest]
#[case::zero_instances(&["chordgen", "generate", "peo", "-n", "20", "--upper-bound-coef", "0.5", "--instances", "0"])]
#[case::missing_parameter(&["chordgen", "generate", "gs", "-n", "20"])]
#[case::missing_nodes(&["chordgen", "generate", "peo", "--upper-bound-coef", "0.5"])]
#[case::unknown_method(&["chordgen", "generate", "random", "-n", "20"])]
#[case::negative_seed(&["chordgen", "generate", "gs", "-n", "20", "--max-subtree-size", "3", "--seed", "-1"])]
fn clap_rejects_invalid_invocations(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err(), "{args:?} must be rejected");
}

#[rstest]
fn clap_defaults_to_one_instance_in_the_working_directory() -> TestResult {
    let cli = Cli::try_parse_from(["chordgen", "generate", "peo", "-n", "9", "--upper-bound-coef", "1"])?;
    let Command::Generate(command) = cli.command else {
        return Err("expected generate".into());
    };
    let MethodCommand::Peo(args) = command.method else {
        return Err("expected peo".into());
    };
    assert_eq!(args.run.instances, 1);
    assert_eq!(args.run.first_index, 0);
    assert_eq!(args.run.seed, None);
    assert_eq!(args.run.out_dir, Path::new("."));
    assert!(!args.run.no_write);
    Ok(())
}

#[rstest]
fn render_summary_lists_every_instance() -> TestResult {
    let graph = ChordalGraph::from_edges(4, [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)])?;
    let instance = InstanceSummary {
        label: "chordalgr_4_0".to_owned(),
        method: Some(GenerationMethod::PeoBased {
            upper_bound_coef: 0.5,
        }),
        seed: Some(11),
        build_duration: Some(Duration::from_micros(1_500)),
        stats: analyze(&graph),
        output: None,
    };
    let summary = ExecutionSummary {
        instances: vec![instance.clone(), instance],
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;

    assert_eq!(text.matches("instance: chordalgr_4_0").count(), 2);
    assert!(text.contains("method: peoBased (0.5)"));
    assert!(text.contains("edges: 5"));
    assert!(text.contains("maximal cliques: 2 (min 3, max 3, mean 3.00, stdev 0.00)"));
    assert!(text.contains("build time: 1.500 ms"));
    assert!(text.contains("seed: 11"));
    assert!(!text.contains("output:"));
    Ok(())
}

#[rstest]
fn generate_emits_tracing_fields() -> TestResult {
    let dir = temp_dir();
    let (summary, layer) = RecordingLayer::capture(|| run_cli(growing(run_args(10, dir.path()), 4)));
    let summary = summary?;

    let runs = layer.spans_named("cli.run");
    let [run] = runs.as_slice() else {
        return Err("expected one cli.run span".into());
    };
    assert_eq!(run.field("command"), Some("generate"));

    let generates = layer.spans_named("cli.generate");
    let [span] = generates.as_slice() else {
        return Err("expected one cli.generate span".into());
    };
    assert_eq!(span.field("method"), Some("gs"));
    assert_eq!(span.field("nodes"), Some("10"));
    assert_eq!(span.field("instances"), Some("2"));
    assert_eq!(span.field("base_seed"), Some("3"));

    let completed = layer.events_with_message("instance completed");
    assert_eq!(completed.len(), summary.instances.len());
    for (event, index) in completed.iter().zip(["5", "6"]) {
        assert_eq!(event.level, Level::INFO);
        assert_eq!(event.parent_span.as_deref(), Some("cli.generate"));
        assert_eq!(event.field("index"), Some(index));
        assert_eq!(event.field("written"), Some("true"));
    }
    Ok(())
}

#[rstest]
fn failed_generation_is_recorded_on_the_span() {
    let dir = temp_dir();
    let (result, layer) = RecordingLayer::capture(|| run_cli(growing(run_args(4, dir.path()), 9)));
    assert!(matches!(
        result,
        Err(CliError::Core(ChordalError::SubtreeSizeOutOfRange { size: 9, node_count: 4 }))
    ));
    let errors: Vec<_> = layer
        .events()
        .into_iter()
        .filter(|event| event.level == Level::ERROR)
        .collect();
    assert!(
        errors
            .iter()
            .any(|event| event.parent_span.as_deref() == Some("cli.generate")),
        "instrumented error must be emitted inside cli.generate"
    );
}
