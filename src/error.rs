//! Error types and handling for kube2cdk8s
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for kube2cdk8s operations
#[derive(Error, Diagnostic, Debug)]
pub enum Kube2Cdk8sError {
    // I/O errors
    #[error("Failed to read manifest '{path}': {reason}")]
    #[diagnostic(
        code(kube2cdk8s::io::manifest_read_failed),
        help("Check that the file exists and is readable")
    )]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to create temporary file: {reason}")]
    #[diagnostic(code(kube2cdk8s::io::temp_create_failed))]
    TempFileCreateFailed { reason: String },

    #[error("Failed to remove temporary file '{path}': {reason}")]
    #[diagnostic(
        code(kube2cdk8s::io::temp_release_failed),
        help("The file was deleted while a conversion unit still owned it")
    )]
    TempFileReleaseFailed { path: String, reason: String },

    // External converter errors
    #[error("Converter not found: {program}")]
    #[diagnostic(
        code(kube2cdk8s::converter::not_found),
        help(
            "Install kube2pulumi (https://github.com/pulumi/kube2pulumi) or point KUBE2PULUMI_BIN at it"
        )
    )]
    ConverterNotFound { program: String },

    #[error("Failed to convert manifest '{path}': {reason}")]
    #[diagnostic(code(kube2cdk8s::converter::conversion_failed))]
    ConversionFailed { path: String, reason: String },

    #[error("Failed to read converter output '{path}': {reason}")]
    #[diagnostic(code(kube2cdk8s::converter::output_unreadable))]
    ConverterOutputUnreadable { path: String, reason: String },

    // Manifest metadata errors
    #[error("Failed to parse manifest metadata from '{path}': {reason}")]
    #[diagnostic(
        code(kube2cdk8s::metadata::parse_failed),
        help("The manifest must be valid YAML")
    )]
    MetadataParseFailed { path: String, reason: String },

    #[error("Manifest '{path}' is missing field '{field}'")]
    #[diagnostic(
        code(kube2cdk8s::metadata::field_missing),
        help("Both 'kind' and 'metadata.name' are required to build the cdk8s constructor")
    )]
    MetadataFieldMissing { path: String, field: String },
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Kube2Cdk8sError>;
