use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use redwood_config::{RedwoodConfig, load_config};
use redwood_logging::{LogLevel, Logger};
use redwood_render::{RenderFormat, render, render_report, write_output};
use redwood_tree::{RbTree, validate};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "redwood")]
#[command(about = "Build, print and check insert-only red-black trees.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
    /// More log output on stderr (repeatable).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert the classic eight values eight times over and print the tree.
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Insert the given values in order and print the tree.
    Insert {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
        /// Insert the whole list this many times.
        #[arg(long, default_value_t = 1)]
        repeat: usize,
        /// Refuse to grow past this many nodes.
        #[arg(long)]
        limit: Option<usize>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run a YAML or JSON run file.
    Run {
        #[arg(long)]
        config: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Insert the given values and print the invariant report.
    Check {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// plain, json or outline. Overrides the run file.
    #[arg(long)]
    format: Option<RenderFormat>,
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, output, check) = match cli.cmd {
        Command::Demo { output } => (RedwoodConfig::demo(), output, false),
        Command::Insert {
            values,
            repeat,
            limit,
            output,
        } => (
            RedwoodConfig {
                values,
                repeat,
                node_limit: limit,
                ..RedwoodConfig::default()
            },
            output,
            false,
        ),
        Command::Run { config, output } => (load_config(&config)?, output, false),
        Command::Check { values, output } => (
            RedwoodConfig {
                values,
                ..RedwoodConfig::default()
            },
            output,
            true,
        ),
    };

    let mut logging = config.logging.clone();
    if cli.quiet {
        logging.level = LogLevel::Error;
    }
    for _ in 0..cli.verbose {
        logging.level = logging.level.louder();
    }
    let mut log = Logger::stderr(logging);

    let format = output.format.unwrap_or(config.format);
    let mut tree = build_tree(&config, &mut log)?;

    let text = if check {
        let report = validate(&tree).context("tree failed validation")?;
        log.debug(
            "check",
            format!("height {} black height {}", report.height, report.black_height),
        );
        render_report(&report, format)?
    } else {
        render(&tree, format)?
    };

    match output.out {
        Some(path) => {
            write_output(&path, &text)?;
            log.debug("output", format!("wrote {}", path.display()));
        }
        None => print!("{text}"),
    }

    tree.teardown().context("teardown")?;
    log.debug("tree", "released all nodes");
    Ok(())
}

fn build_tree(config: &RedwoodConfig, log: &mut Logger) -> Result<RbTree> {
    let mut tree = match config.node_limit {
        Some(limit) => RbTree::with_node_limit(limit),
        None => RbTree::new(),
    };
    log.debug("tree", format!("inserting {} values", config.insert_count()));

    for value in config.insert_sequence() {
        if let Err(err) = tree.insert(value) {
            log.error("tree", format!("insert {value} failed: {err}"));
            return Err(err).with_context(|| format!("insert {value}"));
        }
        log.trace("tree", format!("inserted {value}"));
    }

    log.debug("tree", format!("built tree with {} nodes", tree.len()));
    Ok(tree)
}
