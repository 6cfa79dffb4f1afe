//! Manifest metadata lookup.
//!
//! The rewritten constructor needs exactly two scalars from the original YAML:
//! `kind` and `metadata.name`. Each lookup parses the manifest fresh, so no
//! state crosses document boundaries in a multi-document batch.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Kube2Cdk8sError, Result};

/// The two fields that parametrize the cdk8s constructor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestMetadata {
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    kind: Option<String>,
    metadata: Option<RawObjectMeta>,
}

#[derive(Debug, Deserialize)]
struct RawObjectMeta {
    name: Option<String>,
}

impl ManifestMetadata {
    /// Read `kind` and `metadata.name` from the manifest at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|e| Kube2Cdk8sError::MetadataParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Self::from_yaml(&contents, path)
    }

    fn from_yaml(contents: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest =
            serde_yaml::from_str(contents).map_err(|e| Kube2Cdk8sError::MetadataParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let kind = raw
            .kind
            .ok_or_else(|| Kube2Cdk8sError::MetadataFieldMissing {
                path: path.display().to_string(),
                field: "kind".to_string(),
            })?;
        let name = raw
            .metadata
            .and_then(|m| m.name)
            .ok_or_else(|| Kube2Cdk8sError::MetadataFieldMissing {
                path: path.display().to_string(),
                field: "metadata.name".to_string(),
            })?;

        Ok(Self { kind, name })
    }
}
