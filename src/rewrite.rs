//! Textual rewriting of the converter's generated code.
//!
//! The external converter emits a TypeScript snippet with import lines at the
//! top and a single `const` declaration for the resource object. Rewriting is
//! purely line-oriented text surgery: imports are blanked in place, the
//! declaration is swapped for a cdk8s constructor call, and the generated
//! `apiVersion`/`kind` fields are dropped because the constructor already
//! encodes the kind. No parsing of the generated code happens anywhere.

use std::sync::LazyLock;

use regex::Regex;

use crate::metadata::ManifestMetadata;

/// Substring marking an import/include line in generated code.
const IMPORT_MARKER: &str = "import";

/// The declaration line plus its preceding newline run. Only the first match
/// is rewritten; the converter emits one top-level declaration per manifest.
static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[\r\n]+^.*const.*$").expect("declaration pattern compiles"));

static API_VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)[\r\n]+^.*apiVersion.*$").expect("apiVersion pattern compiles")
});

static KIND_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[\r\n]+^.*kind.*$").expect("kind pattern compiles"));

/// Blank out every line containing the import marker. Line slots are
/// preserved, so the line count of `code` does not change.
pub fn strip_imports(code: &str) -> String {
    // split('\n') rather than lines(): a trailing newline must survive.
    code.split('\n')
        .map(|line| if line.contains(IMPORT_MARKER) { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The cdk8s generic-object constructor opening for a manifest.
pub fn cdk8s_constructor(meta: &ManifestMetadata) -> String {
    format!("new k8s.Kube{}(this, \"{}\", {{", meta.kind, meta.name)
}

/// Replace the first declaration span with `replacement`. When no declaration
/// is present the code passes through unchanged.
pub fn rewrite_declaration(code: &str, replacement: &str) -> String {
    DECLARATION
        .replacen(code, 1, regex::NoExpand(replacement))
        .into_owned()
}

/// Drop the first generated `apiVersion` field line.
pub fn drop_api_version_line(code: &str) -> String {
    drop_first_match(code, &API_VERSION_LINE)
}

/// Drop the first generated `kind` field line.
pub fn drop_kind_line(code: &str) -> String {
    drop_first_match(code, &KIND_LINE)
}

fn drop_first_match(code: &str, pattern: &Regex) -> String {
    match pattern.find(code) {
        Some(m) => format!("{}{}", &code[..m.start()], &code[m.end()..]),
        None => code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED: &str = r#"import * as pulumi from "@pulumi/pulumi";
import * as kubernetes from "@pulumi/kubernetes";

const myServiceAccount = new kubernetes.core.v1.ServiceAccount("myServiceAccount", {
    apiVersion: "v1",
    kind: "ServiceAccount",
    metadata: {
        name: "my-service-account",
    },
});
"#;

    fn meta() -> ManifestMetadata {
        ManifestMetadata {
            kind: "ServiceAccount".to_string(),
            name: "my-service-account".to_string(),
        }
    }

    #[test]
    fn test_strip_imports_blanks_lines_in_place() {
        let stripped = strip_imports(GENERATED);
        assert!(!stripped.lines().any(|line| line.contains("import")));
        // Line slots are preserved, not deleted.
        assert_eq!(stripped.lines().count(), GENERATED.lines().count());
        assert_eq!(stripped.lines().next(), Some(""));
    }

    #[test]
    fn test_strip_imports_without_imports_is_noop() {
        let code = "const x = 1;\nexport { x };";
        assert_eq!(strip_imports(code), code);
    }

    #[test]
    fn test_constructor_contains_kind_and_name() {
        assert_eq!(
            cdk8s_constructor(&meta()),
            "new k8s.KubeServiceAccount(this, \"my-service-account\", {"
        );
    }

    #[test]
    fn test_rewrite_declaration_replaces_first_const() {
        let rewritten = rewrite_declaration(GENERATED, &cdk8s_constructor(&meta()));
        assert!(rewritten.contains("new k8s.KubeServiceAccount(this, \"my-service-account\", {"));
        assert!(!rewritten.contains("const myServiceAccount"));
    }

    #[test]
    fn test_rewrite_declaration_first_match_only() {
        let code = "intro\nconst a = 1;\nconst b = 2;\n";
        let rewritten = rewrite_declaration(code, "REPLACED");
        assert_eq!(rewritten, "introREPLACED\nconst b = 2;\n");
    }

    #[test]
    fn test_rewrite_declaration_without_marker_passes_through() {
        let code = "// no declaration here\nlet x = 1;\n";
        assert_eq!(rewrite_declaration(code, "REPLACED"), code);
    }

    #[test]
    fn test_replacement_dollars_are_literal() {
        let code = "intro\nconst a = 1;\n";
        let rewritten = rewrite_declaration(code, "new k8s.KubeThing(this, \"$ref\", {");
        assert!(rewritten.contains("$ref"));
    }

    #[test]
    fn test_drop_api_version_and_kind_lines() {
        let code = "head\n    apiVersion: \"v1\",\n    kind: \"ServiceAccount\",\ntail\n";
        let code = drop_api_version_line(&code);
        let code = drop_kind_line(&code);
        assert_eq!(code, "head\ntail\n");
    }

    #[test]
    fn test_drop_lines_without_match_is_noop() {
        let code = "metadata: {\n    name: \"x\",\n},\n";
        assert_eq!(drop_api_version_line(code), code);
        assert_eq!(drop_kind_line(code), code);
    }

    #[test]
    fn test_full_rewrite_snapshot() {
        let code = strip_imports(GENERATED);
        let code = rewrite_declaration(&code, &cdk8s_constructor(&meta()));
        let code = drop_api_version_line(&code);
        let code = drop_kind_line(&code);
        insta::assert_snapshot!(code, @r#"
        new k8s.KubeServiceAccount(this, "my-service-account", {
            metadata: {
                name: "my-service-account",
            },
        });
        "#);
    }
}
