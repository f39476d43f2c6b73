/// A `Range` represents a span in a text document, such as the extent of a reported problem. The end is exclusive. This type maps cleanly to the `Range` type in the Language Server Protocol.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
	pub start: Position,
	pub end: Position,
}

/// A `Position` represents a position in a text document, indexed by a line and character offset (both zero-indexed). For maximum compatibility with the Language Server Protocol, character offsets use UTF-16 code units.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
	pub line: u32,
	pub character: u32,
}

impl Range {
	#[must_use]
	pub fn new(start: Position, end: Position) -> Range {
		Range { start, end }
	}
}

impl Position {
	#[must_use]
	pub fn new(line: u32, character: u32) -> Position {
		Position { line, character }
	}
}
