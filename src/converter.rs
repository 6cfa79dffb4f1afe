//! Boundary to the external manifest-to-code converter.
//!
//! The converter is treated as a black box: a manifest path and a target
//! language go in, the path of a generated-code file comes out. The production
//! implementation shells out to the `kube2pulumi` binary; tests substitute
//! their own [`ManifestConverter`].

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Kube2Cdk8sError, Result};
use crate::temp::temp_dir_base;

/// Fixed target-language selector passed to the converter.
pub const LANGUAGE_TYPESCRIPT: &str = "typescript";

/// Environment variable naming the converter binary, overriding PATH lookup.
pub const KUBE2PULUMI_BIN_ENV: &str = "KUBE2PULUMI_BIN";

/// Converts a single YAML manifest into generic infrastructure-as-code text.
pub trait ManifestConverter {
    /// Translate the manifest at `manifest` into `language`, returning the
    /// path of the generated intermediate file. The caller owns that file.
    fn convert(&self, manifest: &Path, language: &str) -> Result<PathBuf>;
}

/// [`ManifestConverter`] backed by the `kube2pulumi` command-line tool.
pub struct Kube2PulumiCli {
    program: PathBuf,
}

impl Kube2PulumiCli {
    /// Resolve the converter binary from `KUBE2PULUMI_BIN`, falling back to
    /// `kube2pulumi` on PATH.
    pub fn from_env() -> Self {
        Self::from_override(env::var_os(KUBE2PULUMI_BIN_ENV))
    }

    fn from_override(program: Option<std::ffi::OsString>) -> Self {
        Self::with_program(
            program
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("kube2pulumi")),
        )
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ManifestConverter for Kube2PulumiCli {
    fn convert(&self, manifest: &Path, language: &str) -> Result<PathBuf> {
        // The -o target gets a unique name under the temp base, never a path
        // derived from the manifest: a sibling .ts file owned by the user must
        // survive, and concurrent runs on the same manifest must not collide.
        let generated = tempfile::Builder::new()
            .prefix("kube2cdk8s-")
            .suffix(".ts")
            .tempfile_in(temp_dir_base())
            .map_err(|e| Kube2Cdk8sError::TempFileCreateFailed {
                reason: e.to_string(),
            })?
            .keep()
            .map(|(_, path)| path)
            .map_err(|e| Kube2Cdk8sError::TempFileCreateFailed {
                reason: e.to_string(),
            })?;

        let output = Command::new(&self.program)
            .arg(language)
            .arg("-f")
            .arg(manifest)
            .arg("-o")
            .arg(&generated)
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let _ = fs::remove_file(&generated);
                return Err(Kube2Cdk8sError::ConverterNotFound {
                    program: self.program.display().to_string(),
                });
            }
            Err(e) => {
                let _ = fs::remove_file(&generated);
                return Err(Kube2Cdk8sError::ConversionFailed {
                    path: manifest.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };

        if !output.status.success() {
            let _ = fs::remove_file(&generated);
            return Err(Kube2Cdk8sError::ConversionFailed {
                path: manifest.display().to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(generated)
    }
}
