//! friendgraph CLI: query a social network loaded from CSV.
//!
//! Usage:
//!   friendgraph --csv people.csv list [--order bfs --from NAME]
//!   friendgraph --csv people.csv show NAME
//!   friendgraph --csv people.csv fof NAME
//!   friendgraph --csv people.csv edges
//!   friendgraph --csv people.csv export NAME [--depth N] [--out BASE]

use clap::{Parser, Subcommand, ValueEnum};
use friendgraph::{Config, ExportOutcome, NetworkManager, TraversalOrder};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "friendgraph",
    version,
    about = "Social network profiles, friendships and exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// CSV file(s) to load, in order
    #[arg(long = "csv", global = true)]
    csv: Vec<PathBuf>,
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List profile names
    List {
        /// Listing order
        #[arg(long, value_enum, default_value_t = OrderArg::Insertion)]
        order: OrderArg,
        /// Start profile for bfs/dfs
        #[arg(long, required_if_eq_any = [("order", "bfs"), ("order", "dfs")])]
        from: Option<String>,
    },
    /// Show a profile's details
    Show {
        /// Profile name
        name: String,
    },
    /// List friends of friends
    Fof {
        /// Profile name
        name: String,
    },
    /// List every friendship once
    Edges,
    /// Export the network around a profile
    Export {
        /// Focal profile name
        name: String,
        /// Hops to include (defaults to the configured depth)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        depth: Option<u64>,
        /// Output base path, without extension (defaults to the profile name)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Renderer executable
        #[arg(long)]
        renderer: Option<String>,
        /// Image format
        #[arg(long)]
        format: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Insertion,
    Bfs,
    Dfs,
}

impl From<OrderArg> for TraversalOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Insertion => TraversalOrder::Insertion,
            OrderArg::Bfs => TraversalOrder::Bfs,
            OrderArg::Dfs => TraversalOrder::Dfs,
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_network(paths: &[PathBuf]) -> Result<NetworkManager, String> {
    let mut net = NetworkManager::new();
    for path in paths {
        net.read_profiles_from_csv(path)
            .map_err(|e| format!("failed to import '{}': {}", path.display(), e))?;
    }
    Ok(net)
}

/// Print `value` as JSON, or fall back to the plain-text printer
fn emit<T: Serialize>(json: bool, value: &T, plain: impl FnOnce(&T)) -> i32 {
    if !json {
        plain(value);
        return 0;
    }
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn print_lines(items: &Vec<String>) {
    for item in items {
        println!("{}", item);
    }
}

fn cmd_list(net: &NetworkManager, order: OrderArg, from: Option<&str>, json: bool) -> i32 {
    let start = from.unwrap_or_default();
    if order != OrderArg::Insertion && net.get_profile(start).is_none() {
        eprintln!("Error: profile '{}' not found", start);
        return 1;
    }
    let names = net.display_profiles_by(order.into(), start);
    if names.is_empty() && !json {
        println!("No profiles loaded.");
        return 0;
    }
    emit(json, &names, print_lines)
}

fn cmd_show(net: &NetworkManager, name: &str, json: bool) -> i32 {
    let Some(profile) = net.get_profile(name) else {
        eprintln!("Error: profile '{}' not found", name);
        return 1;
    };
    emit(json, profile, |p| println!("{}", p))
}

fn cmd_fof(net: &NetworkManager, name: &str, json: bool) -> i32 {
    if net.get_profile(name).is_none() {
        eprintln!("Error: profile '{}' not found", name);
        return 1;
    }
    let names = net.get_friends_of_friends(name);
    if names.is_empty() && !json {
        println!("No friends of friends for '{}'.", name);
        return 0;
    }
    emit(json, &names, print_lines)
}

fn cmd_edges(net: &NetworkManager, json: bool) -> i32 {
    let edges = net.edges();
    emit(json, &edges, |edges| {
        println!("{:<24}  {:<24}  {:>6}", "FROM", "TO", "WEIGHT");
        println!("{}", "-".repeat(58));
        for edge in edges {
            println!("{:<24}  {:<24}  {:>6}", edge.from, edge.to, edge.weight);
        }
    })
}

fn cmd_export(
    net: &NetworkManager,
    config: &Config,
    name: &str,
    depth: usize,
    out: PathBuf,
    json: bool,
) -> i32 {
    let base = config.export.resolve_output(&out);
    let renderer = config.export.renderer();
    match net.create_user_graph(name, depth, &renderer, &base) {
        Ok(Some(outcome)) => emit(json, &outcome, |outcome| match outcome {
            ExportOutcome::Rendered { image } => {
                println!("Wrote {}", image.display());
            }
            ExportOutcome::Fallback { dot, instruction, reason } => {
                println!("Renderer unavailable ({}).", reason);
                println!("Wrote {}", dot.display());
                println!("Render it with: {}", instruction);
            }
        }),
        Ok(None) => {
            eprintln!("Error: profile '{}' not found", name);
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let net = match load_network(&cli.csv) {
        Ok(net) => net,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::List { order, from } => cmd_list(&net, order, from.as_deref(), cli.json),
        Commands::Show { name } => cmd_show(&net, &name, cli.json),
        Commands::Fof { name } => cmd_fof(&net, &name, cli.json),
        Commands::Edges => cmd_edges(&net, cli.json),
        Commands::Export { name, depth, out, renderer, format } => {
            if let Some(program) = renderer {
                config.export.renderer_program = program;
            }
            if let Some(format) = format {
                config.export.image_format = format;
            }
            let depth = depth
                .map(|d| d as usize)
                .unwrap_or(config.export.default_depth);
            let out = out.unwrap_or_else(|| PathBuf::from(&name));
            cmd_export(&net, &config, &name, depth, out, cli.json)
        }
    };
    std::process::exit(code);
}
