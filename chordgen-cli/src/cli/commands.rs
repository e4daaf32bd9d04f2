//! Command implementations and argument parsing for the chordgen CLI.

use std::{
    io::{self, Write},
    ops::Range,
    path::PathBuf,
    time::Duration,
};

use chordgen_core::{
    ChordalError, ChordalGraphBuilder, GeneratedGraph, GenerationMethod, GraphExporter,
    GraphStats, InstanceRecord, StatsWriter, analyze,
};
use chordgen_export::{CsvStatsWriter, ExportError, LgfExporter, read_lgf_path};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::layout::OutputLayout;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "chordgen",
    about = "Generate random chordal graphs and report their maximal clique structure."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate graph instances with one construction method.
    Generate(GenerateCommand),
    /// Report statistics for an existing `.lgf` graph.
    Analyze(AnalyzeCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Construction method and its parameters.
    #[command(subcommand)]
    pub method: MethodCommand,
}

/// Options accepted by the `analyze` command.
#[derive(Debug, Args, Clone)]
pub struct AnalyzeCommand {
    /// Path to a graph in LEMON graph format.
    pub path: PathBuf,
}

/// Construction methods selectable on the command line.
#[derive(Debug, Subcommand, Clone)]
pub enum MethodCommand {
    /// Intersection graph of randomly grown subtrees.
    #[command(visible_alias = "growing-subtree")]
    Gs(GrowingArgs),
    /// Intersection graph of subtrees spanned by random node sets.
    #[command(visible_alias = "connecting-nodes")]
    Cn(ConnectingArgs),
    /// Intersection graph of components of randomly pruned trees.
    #[command(visible_alias = "pruned-tree")]
    Pt(PrunedArgs),
    /// Direct construction along a perfect elimination ordering.
    #[command(visible_alias = "peo-based")]
    Peo(PeoArgs),
}

impl MethodCommand {
    fn into_parts(self) -> (GenerationMethod, RunArgs) {
        match self {
            Self::Gs(GrowingArgs {
                run,
                max_subtree_size,
            }) => (GenerationMethod::GrowingSubtree { max_subtree_size }, run),
            Self::Cn(ConnectingArgs {
                run,
                threshold_prob,
            }) => (GenerationMethod::ConnectingNodes { threshold_prob }, run),
            Self::Pt(PrunedArgs {
                run,
                edge_deletion,
                selection_barrier,
            }) => (
                GenerationMethod::PrunedTree {
                    edge_deletion,
                    selection_barrier,
                },
                run,
            ),
            Self::Peo(PeoArgs {
                run,
                upper_bound_coef,
            }) => (GenerationMethod::PeoBased { upper_bound_coef }, run),
        }
    }
}

/// Options shared by every construction method.
#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Number of nodes in every generated graph.
    #[arg(long, short = 'n')]
    pub nodes: usize,

    /// Base seed. Instance `i` is seeded from a mix of this seed and `i`, so
    /// any instance can be regenerated on its own. Drawn from entropy when
    /// omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of instances to generate.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub instances: u64,

    /// Index of the first instance, used in file names and seed derivation.
    #[arg(long = "first-index", default_value_t = 0)]
    pub first_index: u64,

    /// Root directory of the `ChordalGraphs` output tree.
    #[arg(long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the summary without writing graphs or statistics.
    #[arg(long = "no-write")]
    pub no_write: bool,
}

/// Arguments of the growing-subtree method.
#[derive(Debug, Args, Clone)]
pub struct GrowingArgs {
    /// Shared run options.
    #[command(flatten)]
    pub run: RunArgs,

    /// Largest subtree size, between 1 and the node count.
    #[arg(long = "max-subtree-size")]
    pub max_subtree_size: usize,
}

/// Arguments of the connecting-nodes method.
#[derive(Debug, Args, Clone)]
pub struct ConnectingArgs {
    /// Shared run options.
    #[command(flatten)]
    pub run: RunArgs,

    /// Mean fraction of tree nodes joined per subtree, in (0, 1].
    #[arg(long = "threshold-prob")]
    pub threshold_prob: f64,
}

/// Arguments of the pruned-tree method.
#[derive(Debug, Args, Clone)]
pub struct PrunedArgs {
    /// Shared run options.
    #[command(flatten)]
    pub run: RunArgs,

    /// Fraction of tree edges deleted per subtree, in [0, 1).
    #[arg(long = "edge-deletion")]
    pub edge_deletion: f64,

    /// Fraction of the smallest component sizes excluded, in [0, 1).
    #[arg(long = "selection-barrier")]
    pub selection_barrier: f64,
}

/// Arguments of the PEO-based method.
#[derive(Debug, Args, Clone)]
pub struct PeoArgs {
    /// Shared run options.
    #[command(flatten)]
    pub run: RunArgs,

    /// Scales the number of fresh neighbours per node, in (0, 1]. Larger
    /// values give denser graphs.
    #[arg(long = "upper-bound-coef")]
    pub upper_bound_coef: f64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generation was misconfigured.
    #[error(transparent)]
    Core(#[from] ChordalError),
    /// Writing or reading a graph or statistics table failed.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// An output directory could not be created.
    #[error("failed to create directory `{path}`: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The requested instance indices overflow `u64`.
    #[error("instances {first_index}.. (count {instances}) overflow the index range")]
    IndexOverflow {
        /// Requested first index.
        first_index: u64,
        /// Requested instance count.
        instances: u64,
    },
}

/// Statistics and provenance of one graph reported by a command.
#[derive(Debug, Clone)]
pub struct InstanceSummary {
    /// Display name of the instance.
    pub label: String,
    /// Method that built the graph, when it was generated in this run.
    pub method: Option<GenerationMethod>,
    /// Seed of the generator's `SmallRng`, when generated in this run.
    pub seed: Option<u64>,
    /// Construction time, when generated in this run.
    pub build_duration: Option<Duration>,
    /// Analysis of the graph.
    pub stats: GraphStats,
    /// Where the graph was written, if anywhere.
    pub output: Option<PathBuf>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, Default)]
pub struct ExecutionSummary {
    /// One entry per graph, in instance order.
    pub instances: Vec<InstanceSummary>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when validation, generation or persistence fails.
///
/// # Examples
/// ```
/// use chordgen_cli::cli::{Cli, Command, GenerateCommand, MethodCommand, PeoArgs, RunArgs, run_cli};
///
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         method: MethodCommand::Peo(PeoArgs {
///             run: RunArgs {
///                 nodes: 12,
///                 seed: Some(4),
///                 instances: 2,
///                 first_index: 0,
///                 out_dir: ".".into(),
///                 no_write: true,
///             },
///             upper_bound_coef: 0.5,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.instances.len(), 2);
/// assert!(summary.instances.iter().all(|instance| instance.output.is_none()));
/// # Ok::<(), chordgen_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(generate) => {
            span.record("command", field::display("generate"));
            run_generate(generate.method)
        }
        Command::Analyze(command) => {
            span.record("command", field::display("analyze"));
            run_analyze(&command)
        }
    }
}

struct Persistence {
    layout: OutputLayout,
    stats: CsvStatsWriter,
}

impl Persistence {
    fn prepare(run: &RunArgs, method: GenerationMethod) -> Result<Self, CliError> {
        let layout = OutputLayout::new(run.out_dir.clone());
        layout.prepare(method.tag(), run.nodes)?;
        let stats = CsvStatsWriter::in_dir(layout.method_dir(method.tag()));
        Ok(Self { layout, stats })
    }

    fn persist(
        &mut self,
        index: u64,
        generated: &GeneratedGraph,
        stats: &GraphStats,
    ) -> Result<PathBuf, CliError> {
        let method = generated.method();
        let nodes = generated.graph().node_count();
        let path = self.layout.graph_path(method.tag(), nodes, index);
        LgfExporter::create(&path)?.export(generated.graph())?;
        let instance = path.display().to_string();
        let record = InstanceRecord::new(&instance, method, stats, generated.build_duration());
        self.stats.append(&record)?;
        Ok(path)
    }
}

fn instance_range(run: &RunArgs) -> Result<Range<u64>, CliError> {
    let end = run
        .first_index
        .checked_add(run.instances)
        .ok_or(CliError::IndexOverflow {
            first_index: run.first_index,
            instances: run.instances,
        })?;
    Ok(run.first_index..end)
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(method = field::Empty, nodes = field::Empty, instances = field::Empty, base_seed = field::Empty),
)]
fn run_generate(command: MethodCommand) -> Result<ExecutionSummary, CliError> {
    let (method, run) = command.into_parts();
    let span = Span::current();
    span.record("method", field::display(method.tag()));
    span.record("nodes", run.nodes);
    span.record("instances", run.instances);

    let mut builder = ChordalGraphBuilder::new(method).with_node_count(run.nodes);
    if let Some(seed) = run.seed {
        builder = builder.with_seed(seed);
    }
    let generator = builder.build()?;
    let base_seed = generator.resolve_seed();
    span.record("base_seed", base_seed);

    let indices = instance_range(&run)?;
    let batch = generator.generate_batch(base_seed, indices.clone())?;
    let mut persistence = if run.no_write {
        None
    } else {
        Some(Persistence::prepare(&run, method)?)
    };

    let mut summary = ExecutionSummary::default();
    for (index, generated) in indices.zip(batch) {
        let stats = analyze(generated.graph());
        let output = match persistence.as_mut() {
            Some(persistence) => Some(persistence.persist(index, &generated, &stats)?),
            None => None,
        };
        info!(
            index,
            edges = stats.edge_count(),
            cliques = stats.clique_count(),
            written = output.is_some(),
            "instance completed"
        );
        summary.instances.push(InstanceSummary {
            label: format!("chordalgr_{}_{index}", run.nodes),
            method: Some(method),
            seed: Some(generated.seed()),
            build_duration: Some(generated.build_duration()),
            stats,
            output,
        });
    }
    Ok(summary)
}

#[instrument(name = "cli.analyze", err, skip(command), fields(path = %command.path.display()))]
fn run_analyze(command: &AnalyzeCommand) -> Result<ExecutionSummary, CliError> {
    let graph = read_lgf_path(&command.path)?;
    let stats = analyze(&graph);
    info!(
        nodes = stats.node_count(),
        cliques = stats.clique_count(),
        "analysis completed"
    );
    Ok(ExecutionSummary {
        instances: vec![InstanceSummary {
            label: command.path.display().to_string(),
            method: None,
            seed: None,
            build_duration: None,
            stats,
            output: None,
        }],
    })
}

/// Renders `summary` to `writer` as one text block per instance.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use chordgen_cli::cli::{ExecutionSummary, InstanceSummary, render_summary};
/// # use chordgen_core::{ChordalGraph, analyze};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = ChordalGraph::from_edges(3, [(0, 1), (1, 2), (0, 2)])?;
/// let summary = ExecutionSummary {
///     instances: vec![InstanceSummary {
///         label: "triangle".into(),
///         method: None,
///         seed: None,
///         build_duration: None,
///         stats: analyze(&graph),
///         output: None,
///     }],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("maximal cliques: 1 (min 3, max 3, mean 3.00, stdev 0.00)"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for (position, instance) in summary.instances.iter().enumerate() {
        if position > 0 {
            writeln!(writer)?;
        }
        render_instance(instance, &mut writer)?;
    }
    Ok(())
}

fn render_instance(instance: &InstanceSummary, writer: &mut impl Write) -> io::Result<()> {
    let stats = &instance.stats;
    writeln!(writer, "instance: {}", instance.label)?;
    if let Some(method) = instance.method {
        let parameters = method.parameter_values().join(", ");
        writeln!(writer, "method: {} ({parameters})", method.name())?;
    }
    writeln!(writer, "nodes: {}", stats.node_count())?;
    writeln!(writer, "edges: {}", stats.edge_count())?;
    writeln!(writer, "density: {:.4}", stats.density())?;
    writeln!(writer, "components: {}", stats.connected_components())?;
    writeln!(
        writer,
        "maximal cliques: {} (min {}, max {}, mean {:.2}, stdev {:.2})",
        stats.clique_count(),
        stats.min_clique_size(),
        stats.max_clique_size(),
        stats.mean_clique_size(),
        stats.clique_size_stdev(),
    )?;
    if let Some(duration) = instance.build_duration {
        writeln!(writer, "build time: {:.3} ms", duration.as_secs_f64() * 1_000.0)?;
    }
    if let Some(seed) = instance.seed {
        writeln!(writer, "seed: {seed}")?;
    }
    if let Some(output) = &instance.output {
        writeln!(writer, "output: {}", output.display())?;
    }
    Ok(())
}
