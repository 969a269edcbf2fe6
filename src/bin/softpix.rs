use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "softpix", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene JSON to a PNG.
    Render(RenderArgs),
    /// Print the layout of a pixel format preset.
    Describe(DescribeArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Log drawing diagnostics to stderr.
    #[arg(long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
struct DescribeArgs {
    /// Preset name, e.g. `rgb565` or `indexed8_grey`.
    #[arg(long)]
    format: softpix::FormatPreset,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Describe(args) => cmd_describe(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    init_logging(args.verbose);

    let scene = softpix::Scene::from_path(&args.in_path)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;
    let (surface, stats) = scene.render().context("render scene")?;

    softpix::export::save_png(&surface, &args.out)?;

    eprintln!(
        "wrote {} ({} ops, {} clipped out)",
        args.out.display(),
        stats.ops_executed,
        stats.ops_clipped_out
    );
    Ok(())
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let format = args.format.pixel_format()?;
    println!("{}", args.format);
    print!("{format}");
    Ok(())
}
