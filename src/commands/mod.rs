//! Command implementations for kube2cdk8s CLI

pub mod completions;
pub mod typescript;
pub mod version;
