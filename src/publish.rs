use crate::diagnostic::Diagnostic;
use url::Url;

/// The payload of a "publish diagnostics" notification: the diagnostics for one document within a build target.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishDiagnosticsParams {
	/// The document the diagnostics were produced for.
	pub text_document: TextDocumentIdentifier,

	/// The build target the document belongs to.
	pub build_target: BuildTargetIdentifier,

	/// The identifier of the originating request, if the diagnostics were produced on behalf of one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub origin_id: Option<String>,

	pub diagnostics: Vec<Diagnostic>,

	/// Whether the client should replace any previously published diagnostics for the document rather than extend them.
	pub reset: bool,
}

/// An identifier for a text document, as a URI.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentIdentifier {
	pub uri: Url,
}

/// An identifier for a build target, as a URI.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTargetIdentifier {
	pub uri: Url,
}

#[cfg(test)]
mod tests {
	use super::{BuildTargetIdentifier, PublishDiagnosticsParams, TextDocumentIdentifier};
	use crate::{
		diagnostic::Diagnostic,
		range::{Position, Range},
	};
	use pretty_assertions::assert_eq;

	#[test]
	fn test_wire_roundtrip() {
		let params = PublishDiagnosticsParams {
			text_document: TextDocumentIdentifier {
				uri: "file:///src/main.rs".parse().unwrap(),
			},
			build_target: BuildTargetIdentifier {
				uri: "target://example/main".parse().unwrap(),
			},
			origin_id: None,
			diagnostics: vec![Diagnostic::new(
				Range::new(Position::new(0, 0), Position::new(0, 5)),
				"unexpected token",
			)],
			reset: true,
		};
		let value = serde_json::to_value(&params).unwrap();
		assert_eq!(value["textDocument"]["uri"], "file:///src/main.rs");
		assert_eq!(value["buildTarget"]["uri"], "target://example/main");
		assert!(value.get("originId").is_none());
		assert_eq!(value["reset"], true);
		let deserialized = serde_json::from_value::<PublishDiagnosticsParams>(value).unwrap();
		assert_eq!(deserialized, params);
	}
}
