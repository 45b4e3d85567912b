//! Isolates a single class declaration from a header.
//!
//! The locator works on a narrow micro-grammar instead of parsing C++:
//!
//! - the *declaration anchor* is the literal `class <Name>` at the start of a
//!   line;
//! - a *paragraph* is a run of text without blank lines;
//! - the block starts at the last blank line whose following paragraph
//!   contains the anchor, so the comment paragraph directly attached to the
//!   declaration is kept;
//! - the block ends at the first line-initial `};` after that start which
//!   ends its line.
//!
//! The anchor is a plain prefix: `class Foo` also matches `class FooBar`.
//! An anchor inside a comment (`// see class Name`) does not start a line and
//! is never matched. Nested classes whose own terminator is flush left, or a
//! later declaration of `class <Name>::inner`, defeat the grammar; inputs are
//! expected to avoid them.

use thiserror::Error;

const PARAGRAPH_BREAK: &str = "\n\n";
const TERMINATOR: &str = "\n};";

/// Reasons a header does not yield a class block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocateError {
	#[error("no class declaration preceded by a blank line")]
	MissingDeclaration,
	#[error("no closing `}};` at the start of a line")]
	MissingTerminator,
}

/// Return the minimal text spanning the declaration of `class_name` in
/// `source`, from the start of its paragraph through the closing `};`.
pub fn locate_class_block<'a>(source: &'a str, class_name: &str) -> Result<&'a str, LocateError> {
	let anchor = format!("class {class_name}");
	let start = declaration_start(source, &anchor).ok_or(LocateError::MissingDeclaration)?;
	let retained = &source[start..];
	let end = terminator_end(retained).ok_or(LocateError::MissingTerminator)?;

	Ok(&retained[..end])
}

/// Offset of the first character after the last paragraph break whose
/// paragraph contains a line beginning with `anchor`.
fn declaration_start(source: &str, anchor: &str) -> Option<usize> {
	// Overlapping breaks (`\n\n\n`) each count as a candidate.
	source
		.as_bytes()
		.windows(PARAGRAPH_BREAK.len())
		.enumerate()
		.filter(|(_, window)| *window == PARAGRAPH_BREAK.as_bytes())
		.map(|(index, _)| index + PARAGRAPH_BREAK.len())
		.rev()
		.find(|&start| paragraph_declares(&source[start..], anchor))
}

/// Whether `paragraph` reaches a line starting with `anchor` before the next
/// blank line.
fn paragraph_declares(paragraph: &str, anchor: &str) -> bool {
	if paragraph.starts_with(anchor) {
		return true;
	}

	let line_anchor = format!("\n{anchor}");
	paragraph.find(&line_anchor).is_some_and(|offset| {
		let leading = &paragraph[..offset];
		// A blank line before the anchor belongs to a later candidate.
		!leading.contains(PARAGRAPH_BREAK) && !leading.ends_with('\n')
	})
}

/// Offset just past the first line-initial `};` that ends its line.
fn terminator_end(block: &str) -> Option<usize> {
	block
		.match_indices(TERMINATOR)
		.map(|(index, _)| index + TERMINATOR.len())
		.find(|&end| end == block.len() || block[end..].starts_with('\n'))
}
