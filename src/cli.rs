//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kube2cdk8s - Kubernetes YAML to cdk8s converter
#[derive(Parser, Debug)]
#[command(
    name = "kube2cdk8s",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Convert Kubernetes YAML manifests to cdk8s TypeScript",
    long_about = "kube2cdk8s converts Kubernetes YAML manifests into cdk8s TypeScript snippets \
                  by post-processing the output of kube2pulumi. Multi-document streams \
                  separated by --- are converted one manifest at a time, in order.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  kube2cdk8s typescript -f manifest.yaml\n    \
                  kube2cdk8s typescript -f manifests.yaml --multiple\n    \
                  kube2cdk8s version\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/smallcase/kube2cdk8s"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert k8s YAML to cdk8s TypeScript
    Typescript(TypescriptArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the typescript command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Convert a single manifest:\n    kube2cdk8s typescript -f manifest.yaml\n\n\
                  Convert a multi-document stream:\n    kube2cdk8s typescript -f manifests.yaml -m\n\n\
                  Use a specific converter binary:\n    KUBE2PULUMI_BIN=/opt/bin/kube2pulumi kube2cdk8s typescript -f manifest.yaml")]
pub struct TypescriptArgs {
    /// YAML file to convert
    #[arg(long, short = 'f', value_name = "FILE")]
    pub file: PathBuf,

    /// Convert multiple YAML documents separated by ---
    #[arg(long, short = 'm')]
    pub multiple: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    kube2cdk8s completions --shell bash > ~/.bash_completion.d/kube2cdk8s\n\n\
                  Generate zsh completions:\n    kube2cdk8s completions --shell zsh > ~/.zfunc/_kube2cdk8s")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
