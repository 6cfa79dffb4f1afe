//! Conversion pipeline: one manifest at a time, or a `---`-separated batch.
//!
//! Each document flows through the same steps: hand the manifest to the
//! external converter, strip the imports from the generated code, re-read the
//! manifest for `kind`/`metadata.name`, and swap the generated declaration for
//! the cdk8s constructor call. The batch variant materializes each document as
//! a [`ScopedTempFile`] and fails fast on the first error; temp files are
//! removed on every exit path, including the failing document's own.

use std::fs;
use std::path::Path;

use crate::converter::{LANGUAGE_TYPESCRIPT, ManifestConverter};
use crate::error::{Kube2Cdk8sError, Result};
use crate::metadata::ManifestMetadata;
use crate::rewrite;
use crate::temp::ScopedTempFile;

/// Literal separator between documents in a multi-document YAML stream.
pub const DOCUMENT_SEPARATOR: &str = "---";

/// Convert the single manifest at `path` into a rewritten cdk8s snippet.
pub fn convert_manifest(path: &Path, converter: &dyn ManifestConverter) -> Result<String> {
    let generated = converter.convert(path, LANGUAGE_TYPESCRIPT)?;
    // The intermediate file exists only for this call; adopt it so it is
    // removed even when a later step bails out.
    let generated = ScopedTempFile::adopt(generated);

    let code = fs::read_to_string(generated.path()).map_err(|e| {
        Kube2Cdk8sError::ConverterOutputUnreadable {
            path: generated.path().display().to_string(),
            reason: e.to_string(),
        }
    })?;
    let code = rewrite::strip_imports(&code);

    let meta = ManifestMetadata::from_file(path)?;
    let code = rewrite::rewrite_declaration(&code, &rewrite::cdk8s_constructor(&meta));
    let code = rewrite::drop_api_version_line(&code);
    let code = rewrite::drop_kind_line(&code);

    generated.release()?;
    Ok(code)
}

/// Convert a `---`-separated stream of manifests, in input order.
///
/// Empty segments are skipped; whitespace-only segments are still handed to
/// the converter. The first failing document aborts the batch and no partial
/// text is returned.
pub fn convert_multi(raw: &str, converter: &dyn ManifestConverter) -> Result<String> {
    let mut result = String::new();

    for document in raw.split(DOCUMENT_SEPARATOR) {
        if document.is_empty() {
            continue;
        }

        let unit = ScopedTempFile::create(document.as_bytes())?;
        let snippet = convert_manifest(unit.path(), converter)?;

        result.push_str(&snippet);
        result.push('\n');

        unit.release()?;
    }

    Ok(result)
}
