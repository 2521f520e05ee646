//! Runs a hole specification against a problem instance: the catalog is resolved against the
//! instance's columns, the hooks are exercised over every hole, and the run log receives the
//! configuration echo, the per-hook counters, and the final summary line.
//!
//! The branch-and-bound engine itself is an external collaborator of the
//! [`branch_and_hole`] library, so the search here is a scripted pass driven through a
//! [`StaticEngine`]: every resolved hole gets one mid-hole candidate incumbent and one in-hole
//! bound proposal, exactly the traffic a solver adapter would forward during a solve.

mod mps;
mod result;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use branch_and_hole::basic_types::BoundChange;
use branch_and_hole::basic_types::BoundSense;
use branch_and_hole::basic_types::BranchKind;
use branch_and_hole::basic_types::CandidateSolution;
use branch_and_hole::basic_types::ChildNode;
use branch_and_hole::basic_types::ColumnIndex;
use branch_and_hole::basic_types::Hole;
use branch_and_hole::basic_types::ProposedBranch;
use branch_and_hole::basic_types::SolutionOrigin;
use branch_and_hole::catalog::read_hole_file;
use branch_and_hole::catalog::serialize_hole_variables;
use branch_and_hole::catalog::HoleCatalog;
use branch_and_hole::engine::EngineModel;
use branch_and_hole::engine::EngineStatus;
use branch_and_hole::engine::StaticEngine;
use branch_and_hole::hooks::BranchDecision;
use branch_and_hole::hooks::HoleHooks;
use branch_and_hole::hooks::SearchHooks;
use branch_and_hole::session::HoleStatistics;
use branch_and_hole::session::SessionContext;
use branch_and_hole::statistics::configure_statistic_logging;
use branch_and_hole::statistics::log_statistic;
use branch_and_hole::statistics::StatisticLogger;
use clap::Parser;
use log::debug;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::RunError;
use result::RunResult;

#[derive(Debug, Parser)]
#[command(author, version, about, arg_required_else_help = true)]
struct Args {
    /// The problem instance the hole file belongs to, in the MPS format ('*.mps').
    instance_path: PathBuf,

    /// Enable the incumbent check hook.
    #[arg(long)]
    inc: bool,

    /// Enable the branching decision hook.
    #[arg(long)]
    br: bool,

    /// Turn off the engine's own cut generation.
    #[arg(long)]
    c: bool,

    /// Filter rejected cuts instead of purging them.
    #[arg(long)]
    filter: bool,

    /// The number of rounds of user cuts separated at the root node.
    #[arg(short, default_value_t = 0)]
    n: u64,

    /// The log verbosity: 0 warnings only, 1 informational, 2 debug, 3 and up trace output.
    #[arg(long, default_value_t = 1)]
    log: u32,

    /// The time limit for branch-and-bound, in seconds.
    #[arg(long)]
    bab_time: Option<f64>,

    /// The hole specification file; defaults to '<instance>_holes.txt'.
    #[arg(long)]
    hfile: Option<PathBuf>,

    /// The run log file; defaults to '<instance>.bblog'.
    #[arg(long)]
    logfile: Option<PathBuf>,
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> RunResult<()> {
    let args = Args::parse();
    configure_logging(args.log);

    let hole_path = args
        .hfile
        .clone()
        .unwrap_or_else(|| sibling_path(&args.instance_path, "_holes.txt"));
    let log_path = args
        .logfile
        .clone()
        .unwrap_or_else(|| sibling_path(&args.instance_path, ".bblog"));
    info!(
        "instance {}, hole file {}, log file {}",
        args.instance_path.display(),
        hole_path.display(),
        log_path.display()
    );

    if args.n > 0 {
        warn!("Separating user cuts in {} rounds, but no cuts are currently generated.", args.n);
    }

    let mut run_log = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
        .map_err(|_| RunError::open_log_file(log_path.display()))?;

    let columns = match args.instance_path.extension().and_then(|ext| ext.to_str()) {
        Some("mps") => mps::read_column_names(&args.instance_path)?,
        _ => return Err(RunError::invalid_instance(args.instance_path.display())),
    };
    let mut engine = StaticEngine::new(columns);

    writeln!(
        run_log,
        "\n{}, inccb {}, brcb {}, maxrounds {}, cuts off {}, filter {}, time {:.2}",
        args.instance_path.display(),
        args.inc,
        args.br,
        args.n,
        args.c,
        args.filter,
        args.bab_time.unwrap_or(f64::MAX),
    )?;

    if !args.inc && !args.br && args.n == 0 {
        info!("No hook enabled; the hole file is left unread.");
        return Ok(());
    }

    let variables = read_hole_file(&hole_path)?;
    debug!("holes read:\n{}", serialize_hole_variables(&variables));

    let catalog = HoleCatalog::resolve(variables, &engine);
    let num_hole_variables = catalog.variables().len();
    let num_resolved = catalog.num_resolved();
    let num_holes: usize = catalog
        .variables()
        .iter()
        .map(|variable| variable.holes.len())
        .sum();
    writeln!(
        run_log,
        "catalog: {num_hole_variables} hole variables ({num_resolved} resolved), \
         {num_holes} holes",
    )?;

    let mut hooks = HoleHooks::new(SessionContext::new(catalog)).with_cut_rounds(args.n);
    let num_nodes = exercise_catalog(&mut hooks, &engine, &args);
    engine.set_search_result(num_nodes, engine.node_objective(), None, EngineStatus::Other);

    let session = hooks.into_session();
    configure_statistic_logging("stat", None, None, None);
    log_statistic("numColumns", engine.num_columns());
    log_statistic("numHoleVariables", num_hole_variables);
    log_statistic("numResolvedHoleVariables", num_resolved);
    log_statistic("numHoles", num_holes);
    session.log_statistics(StatisticLogger::default());

    let statistics = session.statistics();
    write_run_summary(&mut run_log, &args, &engine, statistics)?;

    println!(
        "BRANCH-AND-HOLE: nodes {} bound {:.10} sol {} {} incs {}/{} branch {}/{} cuts {}",
        engine.num_nodes(),
        engine.best_bound(),
        display_objective(&engine),
        engine.status(),
        statistics.num_incumbents_rejected,
        statistics.num_incumbent_calls,
        statistics.num_bounds_strengthened,
        statistics.num_branches_forced,
        statistics.num_cut_calls,
    );

    Ok(())
}

/// Drives the hooks over every resolved hole, the way a solver adapter would during a solve.
///
/// Per hole: one mid-hole node solution is offered to the incumbent check (when `--inc` is
/// given), and the following branching decision consumes the rejection into a forced split;
/// then one in-hole bound proposal is offered for strengthening (when `--br` is given).
/// Afterwards the requested number of cut rounds is offered. Returns the number of child nodes
/// the branching decisions created.
fn exercise_catalog(hooks: &mut HoleHooks, engine: &dyn EngineModel, args: &Args) -> u64 {
    let plan: Vec<(ColumnIndex, Hole)> = hooks
        .session()
        .catalog()
        .variables()
        .iter()
        .filter_map(|variable| variable.column.map(|column| (column, variable.holes.clone())))
        .flat_map(|(column, holes)| holes.into_iter().map(move |hole| (column, hole)))
        .collect();

    let mut num_nodes = 0;
    for (column, hole) in plan {
        let midpoint = (hole.lower + hole.upper) as f64 / 2.0;

        if args.inc {
            let mut values = vec![0.0; engine.num_columns()];
            values[column.index as usize] = midpoint;
            let candidate = CandidateSolution::new(&values, 0.0, SolutionOrigin::NodeSolution);
            let _ = hooks.check_incumbent(engine, &candidate);
        }

        if args.br {
            // Consumes the pending rejection, if the incumbent check armed one.
            if let BranchDecision::Override(directive) = hooks.decide_branch(engine, None) {
                num_nodes += directive.children.len() as u64;
            }

            let proposed = ProposedBranch {
                kind: BranchKind::Variable,
                children: vec![ChildNode {
                    changes: vec![BoundChange::new(column, BoundSense::Lower, midpoint)],
                    estimate: engine.node_objective(),
                }],
            };
            let decision = hooks.decide_branch(engine, Some(&proposed));
            if let BranchDecision::Override(directive) = decision {
                num_nodes += directive.children.len() as u64;
            }
        }
    }

    for _ in 0..args.n {
        let _ = hooks.separate_cuts(engine);
    }

    num_nodes
}

/// Appends the per-hook counter lines and the `FINAL:` summary line to the run log.
fn write_run_summary(
    out: &mut impl Write,
    args: &Args,
    engine: &dyn EngineModel,
    statistics: &HoleStatistics,
) -> std::io::Result<()> {
    if args.n > 0 {
        writeln!(out, "-------------------------------")?;
        writeln!(
            out,
            "cut rounds called: {}, cuts added: 0",
            statistics.num_cut_calls
        )?;
    }
    if args.inc {
        writeln!(out, "-------------------------------")?;
        writeln!(
            out,
            "incumbent rejected/called: {}/{}",
            statistics.num_incumbents_rejected, statistics.num_incumbent_calls
        )?;
    }
    if args.br {
        writeln!(out, "-------------------------------")?;
        writeln!(
            out,
            "branch strengthenings/changes: {}/{}",
            statistics.num_bounds_strengthened, statistics.num_branches_forced
        )?;
    }
    writeln!(
        out,
        "FINAL: nodes {} bound {:.10} sol {} {}",
        engine.num_nodes(),
        engine.best_bound(),
        display_objective(engine),
        engine.status(),
    )
}

fn display_objective(engine: &dyn EngineModel) -> String {
    match engine.objective() {
        Some(objective) => format!("{objective:.10}"),
        None => "-".to_owned(),
    }
}

/// Derives a default file name next to the instance: `dir/name.mps` becomes `dir/name<suffix>`.
fn sibling_path(instance: &Path, suffix: &str) -> PathBuf {
    let stem = instance
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("instance");
    instance.with_file_name(format!("{stem}{suffix}"))
}

fn configure_logging(level: u32) {
    let level_filter = match level {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
}
