use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use graphgen::{
    DotDisplay, DotOptions, GeneratorConfig, Graph, LayoutConfig, MstResult, bfs_tree,
    dfs_tree_iterative, dfs_tree_recursive, dijkstra, dijkstra_from, kruskal_mst, mesh, prim_mst,
    render_dot, reverse_delete_mst, spring_layout,
};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// Generate graphs and run the worked examples
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a graph from a JSON generator config and print it
    Generate {
        /// Path to the JSON config
        #[arg(short, long)]
        config: PathBuf,

        /// Print a derived structure instead of the generated graph
        #[arg(short, long, value_enum)]
        derive: Option<Derived>,

        /// Omit edge weights from the output
        #[arg(long)]
        unweighted: bool,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run one of the built-in examples
    Demo {
        #[arg(value_enum)]
        name: DemoName,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Derived {
    Bfs,
    DfsRecursive,
    DfsIterative,
    Dijkstra,
    Kruskal,
    Prim,
    ReverseDelete,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DemoName {
    Dijkstra,
    Kruskal,
    Traversal,
    Layout,
}

fn derive_graph(mut graph: Graph, derived: Derived) -> Result<Graph, Box<dyn Error>> {
    Ok(match derived {
        Derived::Bfs => bfs_tree(&graph)?,
        Derived::DfsRecursive => dfs_tree_recursive(&graph, 0)?,
        Derived::DfsIterative => dfs_tree_iterative(&graph, 0)?,
        Derived::Dijkstra => {
            let result = dijkstra(&mut graph)?;
            result.to_labeled_graph(&graph)
        }
        Derived::Kruskal => highlighted(graph, kruskal_mst)?,
        Derived::Prim => highlighted(graph, prim_mst)?,
        Derived::ReverseDelete => highlighted(graph, reverse_delete_mst)?,
    })
}

/// Source graph with the spanning tree edges marked.
fn highlighted(
    mut graph: Graph,
    engine: impl Fn(&Graph) -> graphgen::Result<MstResult>,
) -> Result<Graph, Box<dyn Error>> {
    let mst = engine(&graph)?;
    info!(total_weight = mst.total_weight, components = mst.components(), "spanning tree");
    mst.highlight_in(&mut graph);
    Ok(graph)
}

fn generate(
    config: PathBuf,
    derived: Option<Derived>,
    unweighted: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let config: GeneratorConfig = serde_json::from_reader(File::open(&config)?)?;
    let mut graph = config.generate()?;
    info!(graph = graph.name(), nodes = graph.order(), edges = graph.size(), "generated");

    if let Some(derived) = derived {
        graph = derive_graph(graph, derived)?;
    }

    let dot = render_dot(&graph, &DotOptions { weighted: !unweighted });
    match output {
        Some(path) => File::create(path)?.write_all(dot.as_bytes())?,
        None => io::stdout().write_all(dot.as_bytes())?,
    }
    Ok(())
}

fn dijkstra_example() -> Result<(), Box<dyn Error>> {
    let mut graph = Graph::from_edges(
        "Dijkstra",
        true,
        [
            ("s", "u", 10),
            ("s", "x", 5),
            ("u", "x", 2),
            ("x", "u", 3),
            ("u", "v", 1),
            ("x", "v", 9),
            ("x", "y", 2),
            ("v", "y", 4),
            ("y", "v", 6),
            ("y", "s", 7),
        ],
    );

    let result = dijkstra_from(&mut graph, "N_s")?;
    println!("{}", result.to_labeled_graph(&graph).to_dot());

    match result.lightest_path_to("N_v")? {
        Some((weight, path)) => println!("Lightest path from s to v has weight {weight}: {path:?}"),
        None => println!("No path from s to v found."),
    }
    Ok(())
}

fn kruskal_example() -> Result<(), Box<dyn Error>> {
    let mut graph = Graph::from_edges(
        "Kruskal",
        false,
        [
            ("a", "b", 7),
            ("a", "c", 1),
            ("a", "d", 4),
            ("b", "e", 6),
            ("b", "f", 5),
            ("c", "d", 1),
            ("c", "g", 3),
            ("d", "h", 2),
            ("e", "f", 6),
            ("e", "h", 5),
            ("e", "i", 3),
            ("f", "i", 4),
            ("f", "l", 7),
            ("g", "h", 5),
            ("g", "j", 3),
            ("h", "j", 4),
            ("i", "k", 7),
            ("j", "k", 8),
            ("k", "l", 6),
        ],
    );

    let mst = kruskal_mst(&graph)?;
    println!("Kruskal MST weight: {}", mst.total_weight);
    println!("Prim MST weight: {}", prim_mst(&graph)?.total_weight);
    println!("Reverse-delete MST weight: {}", reverse_delete_mst(&graph)?.total_weight);

    mst.highlight_in(&mut graph);
    println!("{}", graph.to_dot());
    Ok(())
}

fn traversal_example() -> Result<(), Box<dyn Error>> {
    let graph = mesh(3, 4, false, None)?;
    println!("{}", graph.to_dot());
    println!("{}", bfs_tree(&graph)?.to_dot());
    println!("{}", dfs_tree_recursive(&graph, 0)?.to_dot());
    println!("{}", dfs_tree_iterative(&graph, 0)?.to_dot());
    Ok(())
}

fn layout_example() -> Result<(), Box<dyn Error>> {
    let mut graph = mesh(4, 4, false, None)?;
    spring_layout(&mut graph, &LayoutConfig::default())?;
    for (_, node) in graph.nodes() {
        if let Some(position) = node.position() {
            println!("{}: ({:.1}, {:.1})", node.name(), position.x, position.y);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Generate {
            config,
            derive,
            unweighted,
            output,
        } => generate(config, derive, unweighted, output),
        Command::Demo { name } => match name {
            DemoName::Dijkstra => dijkstra_example(),
            DemoName::Kruskal => kruskal_example(),
            DemoName::Traversal => traversal_example(),
            DemoName::Layout => layout_example(),
        },
    }
}
