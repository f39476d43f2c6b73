#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub use self::{
	diagnostic::{Diagnostic, DiagnosticBuilder, Location, RelatedInformation, Severity},
	error::{Error, Result},
	publish::{BuildTargetIdentifier, PublishDiagnosticsParams, TextDocumentIdentifier},
	range::{Position, Range},
};

pub mod diagnostic;
pub mod error;
pub mod lsp;
pub mod publish;
pub mod range;
