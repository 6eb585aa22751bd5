//! Command implementations.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use ids_compile::{normalize_document, resolve_specification};
use ids_export::{suggested_filename, write_ids_file};
use ids_model::{DraftDocument, ValidationReport};
use ids_validate::{validate_document, validate_schema_document, write_validation_report_json};

use crate::cli::{ExportArgs, ValidateArgs};

/// Result of an export run.
pub struct ExportOutcome {
    pub output_path: PathBuf,
    /// Self-validation report, unless skipped.
    pub report: Option<ValidationReport>,
}

pub fn run_export(args: &ExportArgs) -> Result<ExportOutcome> {
    let raw = fs::read_to_string(&args.draft)
        .with_context(|| format!("read {}", args.draft.display()))?;
    let draft: DraftDocument = serde_json::from_str(&raw)
        .with_context(|| format!("parse draft document {}", args.draft.display()))?;

    let (metadata, specifications) = normalize_document(&draft);
    let resolved: Vec<_> = specifications.iter().map(resolve_specification).collect();

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(suggested_filename(&metadata.title)));
    let xml = write_ids_file(&output_path, &metadata, &resolved)?;
    info!(
        path = %output_path.display(),
        specifications = resolved.len(),
        "wrote ids document"
    );

    let report = if args.no_validate {
        None
    } else {
        let report = validate_document(&xml);
        for issue in &report.issues {
            warn!(
                severity = ?issue.severity,
                path = issue.path_hint.as_deref().unwrap_or("-"),
                "{}", issue.message
            );
        }
        Some(report)
    };

    Ok(ExportOutcome {
        output_path,
        report,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let raw = fs::read_to_string(&args.document)
        .with_context(|| format!("read {}", args.document.display()))?;
    let mut report = validate_document(&raw);

    if let Some(schema_path) = &args.schema {
        let schema = fs::read_to_string(schema_path)
            .with_context(|| format!("read {}", schema_path.display()))?;
        report.extend(validate_schema_document(&schema).issues);
    }

    if let Some(report_path) = &args.report {
        let document_name = args.document.display().to_string();
        let written = write_validation_report_json(report_path, &document_name, &report)
            .with_context(|| format!("write {}", report_path.display()))?;
        info!(path = %written.display(), "wrote validation report");
    }

    Ok(report)
}
