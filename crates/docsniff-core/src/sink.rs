//! Destinations for reported violations.

use crate::types::{LintResult, Severity, Violation};

/// Receives violations as rules report them.
///
/// Each call carries one [`Violation`]; a host that keys findings by
/// `(position, message, code)` reads them from `violation.position`,
/// `violation.message` and `violation.code`. The remaining fields (rule
/// name, severity, location, file) are extra context.
///
/// Hosts implement this to format, deduplicate or suppress violations.
/// Reporting is synchronous and infallible from the rule's point of view.
pub trait ReportSink {
    /// Accepts one violation.
    fn report(&mut self, violation: Violation);
}

impl ReportSink for Vec<Violation> {
    fn report(&mut self, violation: Violation) {
        self.push(violation);
    }
}

impl ReportSink for LintResult {
    fn report(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

/// Rewrites the severity of every violation before forwarding it.
pub(crate) struct SeverityOverride<'a, S: ReportSink + ?Sized> {
    pub(crate) inner: &'a mut S,
    pub(crate) severity: Severity,
}

impl<S: ReportSink + ?Sized> ReportSink for SeverityOverride<'_, S> {
    fn report(&mut self, mut violation: Violation) {
        violation.severity = self.severity;
        self.inner.report(violation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation() -> Violation {
        Violation::new("Code", "rule", Severity::Error, 1, "message")
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<Violation> = Vec::new();
        sink.report(violation());
        sink.report(Violation::new("Other", "rule", Severity::Info, 2, "m"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].code, "Other");
    }

    #[test]
    fn keyed_host_sink_reads_position_message_code() {
        struct Keyed(Vec<(usize, String, String)>);

        impl ReportSink for Keyed {
            fn report(&mut self, violation: Violation) {
                self.0
                    .push((violation.position, violation.message, violation.code));
            }
        }

        let mut sink = Keyed(Vec::new());
        sink.report(violation());
        assert_eq!(
            sink.0,
            vec![(1, "message".to_string(), "Code".to_string())]
        );
    }

    #[test]
    fn lint_result_sink_collects() {
        let mut result = LintResult::new();
        result.report(violation());
        assert_eq!(result.violations.len(), 1);
    }

    #[test]
    fn severity_override_rewrites() {
        let mut inner: Vec<Violation> = Vec::new();
        let mut sink = SeverityOverride {
            inner: &mut inner,
            severity: Severity::Info,
        };
        sink.report(violation());
        assert_eq!(inner[0].severity, Severity::Info);
    }
}
