//! Static-analysis report collection from job artifacts.
//!
//! Each artifact link is resolved to a data provider and, when the provider
//! is file-backed and points at a single file, handed to the report parser.
//! Everything else — unresolvable handles, multi-file artifacts, foreign
//! storage backends, parse failures — is skipped with a diagnostic; one bad
//! artifact never affects its siblings.

use std::path::Path;

use payload::{ArtifactLink, ArtifactManager, Auditor, DataProvider, JobId, Report, ReportParser};

/// Collects parsed reports for one job, in artifact-link order.
pub fn collect_reports(
    manager: &dyn ArtifactManager,
    parser: &dyn ReportParser,
    links: &[ArtifactLink],
    job: JobId,
    audit: &Auditor,
) -> Vec<Report> {
    let mut reports = Vec::new();

    for link in links {
        let Some(provider) = manager.data_provider(&link.handle) else {
            tracing::debug!(label = %link.label, job = %job, "no data provider for artifact");
            audit.info(&format!(
                "Could not retrieve data for artifact {} in job {job}",
                link.label
            ));
            continue;
        };

        match provider {
            DataProvider::FileBacked(root) => {
                if let Some(report) = parse_file_artifact(parser, &root, &link.label, audit) {
                    reports.push(report);
                }
            }
            DataProvider::Unsupported(kind) => {
                tracing::debug!(
                    kind = %kind,
                    label = %link.label,
                    job = %job,
                    "unsupported artifact data provider"
                );
                audit.info(&format!(
                    "Unsupported artifact handler configuration encountered for artifact {} in job {job}",
                    link.label
                ));
            }
        }
    }

    reports
}

/// Parses one file-backed artifact, or returns `None` when it is skipped.
///
/// The root is a directory when the artifact's copy pattern matched multiple
/// files; such artifacts are not supported and skipped.
fn parse_file_artifact(
    parser: &dyn ReportParser,
    root: &Path,
    label: &str,
    audit: &Auditor,
) -> Option<Report> {
    if root.is_dir() {
        audit.info(&format!(
            "Artifact {label} matched multiple files, which is not yet supported"
        ));
        return None;
    }

    audit.info(&format!("Parsing report for artifact definition: {label}"));
    match parser.parse(root, label) {
        Ok(report) => Some(report),
        Err(err) => {
            tracing::error!(label = %label, error = %err, "report parsing failed");
            audit.error(&format!(
                "Error parsing static code analysis report {label}: {err}"
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FakeArtifacts, FakeParser, RecordingAudit};
    use payload::{ArtifactHandle, ReportParseError};

    fn link(label: &str) -> ArtifactLink {
        ArtifactLink {
            label: label.to_owned(),
            handle: ArtifactHandle::new(format!("handle-{label}")).unwrap(),
        }
    }

    fn job() -> JobId {
        JobId::new(11)
    }

    #[test]
    fn single_file_artifacts_are_parsed_in_link_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("spotbugs.xml");
        let second = dir.path().join("checkstyle.xml");
        std::fs::write(&first, "<report/>").unwrap();
        std::fs::write(&second, "<report/>").unwrap();

        let manager = FakeArtifacts::default()
            .file_backed("handle-spotbugs", &first)
            .file_backed("handle-checkstyle", &second);
        let parser = FakeParser::labelled();
        let (_audit, auditor) = RecordingAudit::with_auditor();

        let reports = collect_reports(
            &manager,
            &parser,
            &[link("spotbugs"), link("checkstyle")],
            job(),
            &auditor,
        );

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].0["label"], "spotbugs");
        assert_eq!(reports[1].0["label"], "checkstyle");
    }

    #[test]
    fn directory_roots_are_skipped_with_a_note() {
        let dir = tempfile::tempdir().unwrap();
        let manager = FakeArtifacts::default().file_backed("handle-multi", dir.path());
        let parser = FakeParser::labelled();
        let (audit, auditor) = RecordingAudit::with_auditor();

        let reports = collect_reports(&manager, &parser, &[link("multi")], job(), &auditor);
        assert!(reports.is_empty());
        assert!(audit.infos().iter().any(|m| m.contains("not yet supported")));

        // Skipping is idempotent: a second pass produces the same omission.
        let again = collect_reports(&manager, &parser, &[link("multi")], job(), &auditor);
        assert!(again.is_empty());
    }

    #[test]
    fn unresolvable_and_unsupported_providers_are_skipped() {
        let manager = FakeArtifacts::default().unsupported("handle-s3", "S3ArtifactHandler");
        let parser = FakeParser::labelled();
        let (audit, auditor) = RecordingAudit::with_auditor();

        let reports = collect_reports(
            &manager,
            &parser,
            &[link("missing"), link("s3")],
            job(),
            &auditor,
        );

        assert!(reports.is_empty());
        assert!(audit
            .infos()
            .iter()
            .any(|m| m.contains("Could not retrieve data for artifact missing")));
        assert!(audit
            .infos()
            .iter()
            .any(|m| m.contains("Unsupported artifact handler configuration")));
    }

    #[test]
    fn a_parse_failure_does_not_evict_sibling_reports() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.xml");
        let bad = dir.path().join("bad.xml");
        std::fs::write(&good, "<report/>").unwrap();
        std::fs::write(&bad, "garbage").unwrap();

        let manager = FakeArtifacts::default()
            .file_backed("handle-bad", &bad)
            .file_backed("handle-good", &good);
        let parser = FakeParser::labelled().failing_on("bad", || {
            ReportParseError::Malformed("unexpected token".to_owned())
        });
        let (audit, auditor) = RecordingAudit::with_auditor();

        let reports = collect_reports(
            &manager,
            &parser,
            &[link("bad"), link("good")],
            job(),
            &auditor,
        );

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0["label"], "good");
        assert!(audit
            .errors()
            .iter()
            .any(|m| m.contains("Error parsing static code analysis report bad")));
    }
}
