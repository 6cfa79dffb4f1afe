//! kube2cdk8s - Kubernetes YAML to cdk8s converter
//!
//! Converts Kubernetes YAML manifests into cdk8s TypeScript snippets by
//! post-processing kube2pulumi output: imports are stripped and the generated
//! declaration is rewritten into a `new k8s.Kube<Kind>(this, "<name>", {`
//! constructor call.

use clap::Parser;

mod cli;
mod commands;
mod converter;
mod error;
mod metadata;
mod pipeline;
mod rewrite;
mod temp;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Typescript(args) => commands::typescript::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
