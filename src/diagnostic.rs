use crate::{
	error::{Error, Result},
	range::Range,
};
use url::Url;

/// A diagnostic reported for a build target's sources, such as a compiler error or warning.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
	/// The range the diagnostic applies to.
	pub range: Range,

	/// The severity. Absent means the severity is unspecified.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub severity: Option<Severity>,

	/// A stable, machine-readable identifier for the kind of problem.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,

	/// The name of the tool or subsystem that produced the diagnostic.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub source: Option<String>,

	/// The human-readable description of the problem.
	pub message: String,

	/// A related location elsewhere in the sources.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub related_information: Option<RelatedInformation>,
}

/// The severity of a diagnostic. The wire form is the protocol's ordinal, with `Error` as `1`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
	Error,
	Warning,
	Information,
	Hint,
}

/// A location in a document, identified by the document's URI and a range within it.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
	pub uri: Url,
	pub range: Range,
}

/// A secondary location relevant to a diagnostic, with a message explaining the relation.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedInformation {
	pub location: Location,
	pub message: String,
}

impl Diagnostic {
	/// Create a diagnostic with the required fields. The optional fields start absent.
	#[must_use]
	pub fn new(range: Range, message: impl Into<String>) -> Diagnostic {
		Diagnostic {
			range,
			severity: None,
			code: None,
			source: None,
			message: message.into(),
			related_information: None,
		}
	}

	#[must_use]
	pub fn builder() -> DiagnosticBuilder {
		DiagnosticBuilder::default()
	}
}

/// A builder that assembles a [`Diagnostic`] from possibly-absent parts. Building fails if a required field was never provided, so an invalid diagnostic is never observable.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBuilder {
	range: Option<Range>,
	severity: Option<Severity>,
	code: Option<String>,
	source: Option<String>,
	message: Option<String>,
	related_information: Option<RelatedInformation>,
}

impl DiagnosticBuilder {
	#[must_use]
	pub fn range(mut self, range: Range) -> DiagnosticBuilder {
		self.range = Some(range);
		self
	}

	#[must_use]
	pub fn severity(mut self, severity: Severity) -> DiagnosticBuilder {
		self.severity = Some(severity);
		self
	}

	#[must_use]
	pub fn code(mut self, code: impl Into<String>) -> DiagnosticBuilder {
		self.code = Some(code.into());
		self
	}

	#[must_use]
	pub fn source(mut self, source: impl Into<String>) -> DiagnosticBuilder {
		self.source = Some(source.into());
		self
	}

	#[must_use]
	pub fn message(mut self, message: impl Into<String>) -> DiagnosticBuilder {
		self.message = Some(message.into());
		self
	}

	#[must_use]
	pub fn related_information(mut self, related_information: RelatedInformation) -> DiagnosticBuilder {
		self.related_information = Some(related_information);
		self
	}

	pub fn build(self) -> Result<Diagnostic> {
		let range = self.range.ok_or(Error::InvalidArgument { field: "range" })?;
		let message = self
			.message
			.ok_or(Error::InvalidArgument { field: "message" })?;
		Ok(Diagnostic {
			range,
			severity: self.severity,
			code: self.code,
			source: self.source,
			message,
			related_information: self.related_information,
		})
	}
}

impl From<Severity> for u8 {
	fn from(value: Severity) -> u8 {
		match value {
			Severity::Error => 1,
			Severity::Warning => 2,
			Severity::Information => 3,
			Severity::Hint => 4,
		}
	}
}

impl TryFrom<u8> for Severity {
	type Error = String;

	fn try_from(value: u8) -> std::result::Result<Severity, String> {
		match value {
			1 => Ok(Severity::Error),
			2 => Ok(Severity::Warning),
			3 => Ok(Severity::Information),
			4 => Ok(Severity::Hint),
			_ => Err(format!(r#"Invalid severity "{value}"."#)),
		}
	}
}
