use crate::{diagnostic, range};
use lsp_types as lsp;

impl From<diagnostic::Diagnostic> for lsp::Diagnostic {
	fn from(value: diagnostic::Diagnostic) -> Self {
		lsp::Diagnostic {
			range: value.range.into(),
			severity: value.severity.map(Into::into),
			code: value.code.map(lsp::NumberOrString::String),
			source: value.source,
			message: value.message,
			related_information: value
				.related_information
				.map(|related_information| vec![related_information.into()]),
			..Default::default()
		}
	}
}

impl From<diagnostic::Severity> for lsp::DiagnosticSeverity {
	fn from(value: diagnostic::Severity) -> Self {
		match value {
			diagnostic::Severity::Error => lsp::DiagnosticSeverity::ERROR,
			diagnostic::Severity::Warning => lsp::DiagnosticSeverity::WARNING,
			diagnostic::Severity::Information => lsp::DiagnosticSeverity::INFORMATION,
			diagnostic::Severity::Hint => lsp::DiagnosticSeverity::HINT,
		}
	}
}

impl From<diagnostic::RelatedInformation> for lsp::DiagnosticRelatedInformation {
	fn from(value: diagnostic::RelatedInformation) -> Self {
		lsp::DiagnosticRelatedInformation {
			location: value.location.into(),
			message: value.message,
		}
	}
}

impl From<diagnostic::Location> for lsp::Location {
	fn from(value: diagnostic::Location) -> Self {
		lsp::Location {
			uri: value.uri,
			range: value.range.into(),
		}
	}
}

impl From<range::Range> for lsp::Range {
	fn from(value: range::Range) -> Self {
		lsp::Range {
			start: value.start.into(),
			end: value.end.into(),
		}
	}
}

impl From<lsp::Range> for range::Range {
	fn from(value: lsp::Range) -> Self {
		range::Range {
			start: value.start.into(),
			end: value.end.into(),
		}
	}
}

impl From<range::Position> for lsp::Position {
	fn from(value: range::Position) -> Self {
		lsp::Position {
			line: value.line,
			character: value.character,
		}
	}
}

impl From<lsp::Position> for range::Position {
	fn from(value: lsp::Position) -> Self {
		range::Position {
			line: value.line,
			character: value.character,
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		diagnostic::{Diagnostic, Severity},
		range::{Position, Range},
	};
	use lsp_types as lsp;
	use pretty_assertions::assert_eq;

	#[test]
	fn test_diagnostic_conversion() {
		let mut diagnostic = Diagnostic::new(
			Range::new(Position::new(0, 0), Position::new(0, 5)),
			"unexpected token",
		);
		diagnostic.severity = Some(Severity::Error);
		diagnostic.code = Some("E001".to_owned());
		diagnostic.source = Some("compiler".to_owned());
		let diagnostic = lsp::Diagnostic::from(diagnostic);
		assert_eq!(diagnostic.range.start, lsp::Position::new(0, 0));
		assert_eq!(diagnostic.range.end, lsp::Position::new(0, 5));
		assert_eq!(diagnostic.severity, Some(lsp::DiagnosticSeverity::ERROR));
		assert_eq!(
			diagnostic.code,
			Some(lsp::NumberOrString::String("E001".to_owned())),
		);
		assert_eq!(diagnostic.source, Some("compiler".to_owned()));
		assert_eq!(diagnostic.message, "unexpected token");
		assert_eq!(diagnostic.related_information, None);
	}
}
