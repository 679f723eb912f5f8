use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use flowbar::Arrange as _;

#[derive(Parser, Debug)]
#[command(name = "flowbar", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the size a request needs.
    Measure(MeasureArgs),
    /// Measure and arrange a request, writing the result as JSON.
    Arrange(ArrangeArgs),
    /// Print a request's layout config as a preference string.
    Pref(PrefArgs),
}

#[derive(Parser, Debug)]
struct MeasureArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ArrangeArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Fail if the result overlaps or escapes the margins.
    #[arg(long)]
    check: bool,
}

#[derive(Parser, Debug)]
struct PrefArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Measure(args) => cmd_measure(args),
        Command::Arrange(args) => cmd_arrange(args),
        Command::Pref(args) => cmd_pref(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_request_json(path: &Path) -> anyhow::Result<flowbar::LayoutRequest> {
    let f = File::open(path).with_context(|| format!("open request '{}'", path.display()))?;
    let r = BufReader::new(f);
    let req: flowbar::LayoutRequest =
        serde_json::from_reader(r).with_context(|| "parse request JSON")?;
    req.validate()?;
    Ok(req)
}

fn cmd_measure(args: MeasureArgs) -> anyhow::Result<()> {
    let req = read_request_json(&args.in_path)?;
    let mut engine = flowbar::FlowLayout::new(req.config)?;
    let size = engine.measure(&req.items, req.width, req.height, req.options);
    println!("{}", serde_json::to_string(&size)?);
    Ok(())
}

fn cmd_arrange(args: ArrangeArgs) -> anyhow::Result<()> {
    let req = read_request_json(&args.in_path)?;
    let result = flowbar::run_request(&req)?;
    if args.check {
        result
            .check_invariants(&req.config)
            .with_context(|| format!("check layout of '{}'", args.in_path.display()))?;
    }

    let json = serde_json::to_string_pretty(&result)?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let mut f =
                File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            writeln!(f, "{json}").with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_pref(args: PrefArgs) -> anyhow::Result<()> {
    let req = read_request_json(&args.in_path)?;
    println!("{}", req.config.to_pref_string());
    Ok(())
}
