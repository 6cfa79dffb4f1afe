//! Typescript command implementation

use std::fs;

use crate::cli::TypescriptArgs;
use crate::converter::Kube2PulumiCli;
use crate::error::{Kube2Cdk8sError, Result};
use crate::pipeline;

/// Run typescript conversion for a single manifest or a `---`-separated stream
pub fn run(args: TypescriptArgs) -> Result<()> {
    let converter = Kube2PulumiCli::from_env();

    let output = if args.multiple {
        let raw =
            fs::read_to_string(&args.file).map_err(|e| Kube2Cdk8sError::ManifestReadFailed {
                path: args.file.display().to_string(),
                reason: e.to_string(),
            })?;
        pipeline::convert_multi(&raw, &converter)?
    } else {
        pipeline::convert_manifest(&args.file, &converter)?
    };

    print!("{}", output);

    Ok(())
}
