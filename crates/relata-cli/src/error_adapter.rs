//! Terminal reports for failed runs and document warnings.
//!
//! Every problem the CLI shows becomes a [`Report`]: a miette diagnostic
//! with its code, a hint on how to fix the `.erd` document or the
//! configuration, and the labelled elements of the source when there is one.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity as MietteSeverity,
    SourceSpan,
};

use relata::RelataError;
use relata_parser::error::{Diagnostic, ErrorCode, Label, Severity};

/// One rendered problem.
#[derive(Debug)]
pub struct Report<'a> {
    severity: MietteSeverity,
    code: String,
    message: String,
    help: Option<&'static str>,
    source: Option<&'a str>,
    labels: Vec<LabeledSpan>,
}

impl<'a> Report<'a> {
    /// Report for a parser diagnostic over `source`.
    ///
    /// The diagnostic's own label is primary; the element it conflicts with,
    /// if any, is shown as a secondary label.
    pub fn from_diagnostic(diag: &Diagnostic, source: &'a str) -> Self {
        let mut labels = vec![labeled_span(diag.label(), true)];
        labels.extend(diag.context().map(|label| labeled_span(label, false)));

        Self {
            severity: match diag.severity() {
                Severity::Error => MietteSeverity::Error,
                Severity::Warning => MietteSeverity::Warning,
            },
            code: diag.code().to_string(),
            message: diag.message().to_string(),
            help: Some(document_help(diag.code())),
            source: Some(source),
            labels,
        }
    }

    /// Report for a failed run.
    pub fn from_error(err: &'a RelataError) -> Self {
        let (code, help) = match err {
            RelataError::Parse { err, src } => return Self::from_diagnostic(err.diagnostic(), src),
            RelataError::Io(io_err) => ("relata::io", io_help(io_err.kind())),
            RelataError::Config(_) => (
                "relata::config",
                Some(
                    "every layout size must be positive and finite; the config is read from \
                     --config, relata/config.toml or the platform config directory",
                ),
            ),
            RelataError::Export(_) => ("relata::export", None),
        };

        Self {
            severity: MietteSeverity::Error,
            code: code.to_string(),
            message: err.to_string(),
            help,
            source: None,
            labels: Vec::new(),
        }
    }

    /// Renders the report for a terminal.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if GraphicalReportHandler::new()
            .render_report(&mut out, self)
            .is_err()
        {
            // Fall back to the one-line form.
            out = format!("{}[{}]: {}", severity_name(self.severity), self.code, self.message);
        }
        out
    }
}

/// Reports for every warning collected while parsing `source`.
pub fn warning_reports<'a>(warnings: &[Diagnostic], source: &'a str) -> Vec<Report<'a>> {
    warnings
        .iter()
        .map(|warning| Report::from_diagnostic(warning, source))
        .collect()
}

/// Writes each report to standard error.
///
/// Reports bypass the logger so that warnings about the document stay
/// visible at every `--log-level`.
pub fn print_reports(reports: &[Report<'_>]) {
    for report in reports {
        eprintln!("{}", report.render());
    }
}

fn labeled_span(label: &Label, primary: bool) -> LabeledSpan {
    let span = SourceSpan::new(label.span().start().into(), label.span().len());
    if primary {
        LabeledSpan::new_primary_with_span(Some(label.to_string()), span)
    } else {
        LabeledSpan::new_with_span(Some(label.to_string()), span)
    }
}

fn document_help(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::E001 => {
            "an ERD document must be well-formed XML; look for an unclosed tag or a bare `&` or `<` in an attribute"
        }
        ErrorCode::E100 => {
            "ERD documents start with `<diagram version=\"..\" name=\"..\">` holding `<entities>` and `<relations>`"
        }
        ErrorCode::W001 => {
            "relations resolve to the last entity with this id; give each `<entity>` a unique `id`"
        }
        ErrorCode::W002 => {
            "the relation is kept in the document but is not drawn or exported to Mermaid"
        }
    }
}

fn io_help(kind: std::io::ErrorKind) -> Option<&'static str> {
    match kind {
        std::io::ErrorKind::InvalidInput => Some("pass a document with the `.erd` extension"),
        std::io::ErrorKind::NotFound => Some("check that the input and config paths exist"),
        _ => None,
    }
}

fn severity_name(severity: MietteSeverity) -> &'static str {
    match severity {
        MietteSeverity::Error => "error",
        MietteSeverity::Warning => "warning",
        MietteSeverity::Advice => "advice",
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Report<'_> {}

impl MietteDiagnostic for Report<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(self.severity)
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.help.map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.source.as_ref().map(|src| src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.labels.is_empty() {
            return None;
        }
        Some(Box::new(self.labels.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    const DUPLICATE: &str = r#"<diagram version="1" name="d">
  <entities>
    <entity id="E1" name="first"/>
    <entity id="E1" name="second"/>
  </entities>
</diagram>"#;

    const DANGLING: &str = r#"<diagram version="1" name="d">
  <entities><entity id="E1" name="a"/></entities>
  <relations><relation name="fk" pk-ref="E1" fk-ref="E9"/></relations>
</diagram>"#;

    fn parse_error(source: &str) -> RelataError {
        let err = relata_parser::parse(source).unwrap_err();
        RelataError::new_parse_error(err, source)
    }

    fn warnings(source: &str) -> Vec<Diagnostic> {
        relata_parser::parse_with_warnings(source).unwrap().1
    }

    #[test]
    fn test_malformed_xml_report() {
        let err = parse_error("<diagram><entities></diagram>");

        let report = Report::from_error(&err);

        assert_eq!(report.code, "E001");
        assert_eq!(report.severity, MietteSeverity::Error);
        assert!(report.help.unwrap().contains("well-formed XML"));
        assert_eq!(report.labels.len(), 1);
        assert!(report.labels[0].primary());
        assert!(report.source.is_some());
    }

    #[test]
    fn test_wrong_root_report_names_element() {
        let err = parse_error("<schema/>");

        let report = Report::from_error(&err);

        assert_eq!(report.code, "E100");
        assert_eq!(
            report.labels[0].label(),
            Some("<schema>: root element is `schema`")
        );
        assert!(report.help.unwrap().contains("<diagram"));
    }

    #[test]
    fn test_duplicate_report_points_at_both_definitions() {
        let warnings = warnings(DUPLICATE);

        let reports = warning_reports(&warnings, DUPLICATE);

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.code, "W001");
        assert_eq!(report.severity, MietteSeverity::Warning);
        assert_eq!(report.labels.len(), 2);
        assert!(report.labels[0].primary());
        assert!(!report.labels[1].primary());

        let second = DUPLICATE.find(r#"<entity id="E1" name="second""#).unwrap();
        let first = DUPLICATE.find(r#"<entity id="E1" name="first""#).unwrap();
        assert_eq!(report.labels[0].offset(), second);
        assert_eq!(report.labels[1].offset(), first);
    }

    #[test]
    fn test_dangling_report_renders() {
        let warnings = warnings(DANGLING);

        let reports = warning_reports(&warnings, DANGLING);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].code, "W002");
        assert!(reports[0].help.unwrap().contains("not drawn"));
        let rendered = reports[0].render();
        assert!(rendered.contains("refers to unknown entity"));
    }

    #[test]
    fn test_run_error_codes() {
        let missing = RelataError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let report = Report::from_error(&missing);
        assert_eq!(report.code, "relata::io");
        assert!(report.help.unwrap().contains("paths exist"));
        assert!(report.labels.is_empty());

        let config = RelataError::Config("layout.entity_width must be positive".to_string());
        let report = Report::from_error(&config);
        assert_eq!(report.code, "relata::config");
        assert!(report.message.contains("entity_width"));
        assert!(report.source.is_none());
    }
}
