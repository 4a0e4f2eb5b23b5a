use clap::{CommandFactory, Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    compare::CompareArgs, generate::GenerateArgs, matrix::MatrixArgs, route::RouteArgs,
};

mod compare;
mod generate;
mod graph_args;
mod matrix;
mod parsers;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random graph and print it
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Run one search algorithm on a random graph
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Run every search algorithm on the same random graph
    #[command(visible_alias = "c")]
    Compare {
        #[command(flatten)]
        args: CompareArgs,
    },
    /// Run a search algorithm on a distance table read from a JSON file
    Matrix {
        #[command(flatten)]
        args: MatrixArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Generate { args }) => generate::run(args)?,
        Some(Commands::Route { args }) => route::run(args)?,
        Some(Commands::Compare { args }) => compare::run(args)?,
        Some(Commands::Matrix { args }) => matrix::run(args)?,
        None => Cli::command().print_help()?,
    }

    Ok(())
}
