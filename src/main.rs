// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point: load a `.cxt` context, enumerate its
//! concepts, report the count and elapsed wall time.

use clap::Parser;
use concept_search::cxt::load_context;
use concept_search::search::enumerate_concepts;
use concept_search::Concept;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Enumerate all formal concepts of a context with Close-by-One.
#[derive(Parser, Debug)]
#[command(name = "cbo", version, about)]
struct Args {
    /// Path to the context file in Burmeister .cxt format.
    context: PathBuf,

    /// Print every concept, not just the total.
    #[arg(short, long)]
    verbose: bool,

    /// With --verbose, print object/attribute names instead of indices.
    #[arg(long)]
    names: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let ctx = match load_context(&args.context) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        objects = ctx.object_count(),
        attributes = ctx.attribute_count(),
        path = %args.context.display(),
        "context loaded"
    );

    let start = Instant::now();
    let lattice = enumerate_concepts(&ctx);
    let elapsed = start.elapsed();

    if args.verbose {
        for (index, concept) in lattice.iter().enumerate() {
            if args.names {
                println!("Concept {}: {}", index, display_with_names(&ctx, concept));
            } else {
                println!("Concept {}: {}", index, concept);
            }
        }
    }

    println!("Total Concepts : {}", lattice.len());
    println!("Elapsed        : {}", humantime::format_duration(elapsed));

    ExitCode::SUCCESS
}

/// Render a concept with object/attribute names instead of indices.
fn display_with_names(ctx: &concept_search::FormalContext, concept: &Concept) -> String {
    let objects: Vec<&str> = concept
        .extent
        .iter()
        .map(|o| ctx.object_name(o))
        .collect();
    let attributes: Vec<&str> = concept
        .intent
        .iter()
        .map(|a| ctx.attribute_name(a))
        .collect();
    format!("({{{}}}, {{{}}})", objects.join(", "), attributes.join(", "))
}
