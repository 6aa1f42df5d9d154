use std::fmt::Debug;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use fringetree::algebra::NamedMeasure;
use fringetree::{
    Count, DotRenderer, FringeTree, Maximum, MeasureRegistry, Measured, Minimum, RenderConfig,
    Sum,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fringetree", about = "Immutable measured sequences stored in tree fringes")]
struct Cli {
    /// Log at debug level regardless of RUST_LOG.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print DOT graphs of the sample trees and their edited versions.
    Demo,
    /// Build a tree from values, edit it, and report its shape and measure.
    Build(BuildArgs),
    /// List the available measures.
    Measures,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Initial elements, laid out as a balanced tree.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
    /// Measure to tag nodes with (see `measures`).
    #[arg(long, short, default_value = "count")]
    measure: String,
    /// Prepend a value after building (repeatable, applied in order).
    #[arg(long, allow_negative_numbers = true)]
    prepend: Vec<i64>,
    /// Append a value after building (repeatable, applied in order).
    #[arg(long, allow_negative_numbers = true)]
    append: Vec<i64>,
    /// Print the tree as a DOT graph instead of a summary.
    #[arg(long)]
    dot: bool,
    /// Graph name used with --dot.
    #[arg(long, default_value = "G")]
    graph_name: String,
    /// Leave tags out of DOT labels.
    #[arg(long)]
    no_tags: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Demo => run_demo()?,
        Commands::Build(args) => run_build(args)?,
        Commands::Measures => run_measures(),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_demo() -> Result<()> {
    type Tree = FringeTree<i64, Count>;

    let t = Tree::branch(
        Tree::branch(Tree::leaf(Count, 1), Tree::leaf(Count, 2)),
        Tree::leaf(Count, 3),
    );
    let t1 = t.prepend(0);
    let t2 = t1.append(4);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut versions = DotRenderer::new(&mut out, RenderConfig::default())?;
    for tree in [&t, &t1, &t2] {
        versions.render(tree).context("failed to render edited versions")?;
    }
    versions.finish()?;

    let mut chain = vec![Tree::empty(Count)];
    for value in 0..5 {
        let next = chain[chain.len() - 1].prepend(value);
        chain.push(next);
    }
    let mut list = DotRenderer::new(&mut out, RenderConfig::default())?;
    for tree in &chain {
        list.render(tree).context("failed to render prepend chain")?;
    }
    list.finish()?;

    out.flush()?;
    Ok(())
}

fn run_build(args: BuildArgs) -> Result<()> {
    let registry = MeasureRegistry::with_defaults();
    debug!(measure = %args.measure, values = args.values.len(), "building tree");

    match args.measure.as_str() {
        "count" => build_with(lookup::<Count>(&registry, "count")?, &args),
        "sum" => {
            ensure_sum_fits(&args)?;
            build_with(lookup::<Sum<i64>>(&registry, "sum")?, &args)
        }
        "min" => build_with(lookup::<Minimum<i64>>(&registry, "min")?, &args),
        "max" => build_with(lookup::<Maximum<i64>>(&registry, "max")?, &args),
        other => {
            let names: Vec<_> = registry.list().into_iter().map(|info| info.name).collect();
            bail!("unknown measure '{}' (available: {})", other, names.join(", "))
        }
    }
}

/// Every `sum` tag is the total of some run of elements, so a bounded sum
/// of magnitudes keeps all of them inside `i64`.
fn ensure_sum_fits(args: &BuildArgs) -> Result<()> {
    let magnitude = args
        .values
        .iter()
        .chain(&args.prepend)
        .chain(&args.append)
        .try_fold(0i64, |total, value| total.checked_add(value.checked_abs()?));
    if magnitude.is_none() {
        bail!("values are too large for the sum measure: partial sums would overflow i64");
    }
    Ok(())
}

fn lookup<M: NamedMeasure + Clone>(registry: &MeasureRegistry, name: &str) -> Result<M> {
    registry
        .get::<M>(name)
        .map(|binding| M::clone(&binding))
        .with_context(|| format!("measure '{}' is not registered for i64 values", name))
}

fn build_with<M>(binding: M, args: &BuildArgs) -> Result<()>
where
    M: Measured<i64> + Clone,
    M::Tag: Debug,
{
    let mut tree = FringeTree::from_values(binding, args.values.iter().copied());
    for value in &args.prepend {
        tree = tree.prepend(*value);
    }
    for value in &args.append {
        tree = tree.append(*value);
    }

    if args.dot {
        let config = RenderConfig::default()
            .with_graph_name(args.graph_name.clone())
            .with_tags(!args.no_tags);
        let stdout = io::stdout();
        let mut renderer = DotRenderer::new(stdout.lock(), config)?;
        renderer.render(&tree).context("failed to render tree")?;
        renderer.finish()?;
        return Ok(());
    }

    println!("elements\t{:?}", tree.flatten());
    println!("shape\t{}", tree);
    println!("breadth\t{}", tree.breadth());
    println!("depth\t{}", tree.depth());
    println!("measure\t{:?}", tree.measure());
    match (tree.head(), tree.last()) {
        (Ok(head), Ok(last)) => println!("ends\t{} .. {}", head, last),
        (Err(err), _) | (_, Err(err)) => println!("ends\t<{}>", err),
    }

    Ok(())
}

fn run_measures() {
    let registry = MeasureRegistry::with_defaults();
    for info in registry.list() {
        println!("{}\t{}", info.name, info.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_args(argv: &[&str]) -> BuildArgs {
        let cli = Cli::try_parse_from(argv).expect("valid command line");
        match cli.command {
            Commands::Build(args) => args,
            other => panic!("expected build, got {:?}", other),
        }
    }

    #[test]
    fn test_sum_within_range_builds() {
        let args = build_args(&["fringetree", "build", "--measure", "sum", "--append", "-3", "1", "2"]);
        assert!(ensure_sum_fits(&args).is_ok());
        assert!(run_build(args).is_ok());
    }

    #[test]
    fn test_sum_overflow_is_rejected() {
        let args = build_args(&["fringetree", "build", "--measure", "sum", "9223372036854775807", "1"]);
        let err = run_build(args).expect_err("overflowing sum");
        assert!(err.to_string().contains("overflow"));

        let args = build_args(&["fringetree", "build", "--measure", "sum", "--", "-9223372036854775808"]);
        assert!(ensure_sum_fits(&args).is_err());
    }

    #[test]
    fn test_other_measures_skip_range_check() {
        let args = build_args(&["fringetree", "build", "--measure", "max", "9223372036854775807", "1"]);
        assert!(run_build(args).is_ok());
    }
}
