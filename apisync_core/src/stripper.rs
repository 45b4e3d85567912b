//! Removes implementation-private regions from a class block.
//!
//! A region starts either at the line break right after `class <Name> {`
//! (members before any access marker are private by default) or at a line
//! break followed by an indented `private:` line. It extends up to the last
//! boundary found before the next occurrence of the text `public`, where a
//! boundary is a line break followed by an indented `public:` or by a
//! flush-left `}`. The boundary itself is kept.
//!
//! A region whose boundary cannot be reached (for example because a comment
//! inside it mentions `public`) is left untouched.

const PRIVATE_MARKER: &str = "private:\n";
const PUBLIC_MARKER: &str = "public:";
const PUBLIC_WORD: &str = "public";

/// A class block with its private regions removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedBlock {
	/// The remaining text.
	pub text: String,
	/// Number of regions that were removed.
	pub removed_regions: usize,
}

/// Remove every private region from `block`, the declaration of
/// `class_name`.
pub fn strip_private_sections(block: &str, class_name: &str) -> StrippedBlock {
	let opening = format!("class {class_name} {{");
	let mut text = String::with_capacity(block.len());
	let mut removed_regions = 0;
	let mut copied = 0;
	let mut pos = 0;

	while pos < block.len() {
		let removal_end = region_starts(block, pos, &opening)
			.into_iter()
			.flatten()
			.find_map(|content_start| region_end(block, content_start));

		if let Some(end) = removal_end {
			text.push_str(&block[copied..pos]);
			copied = end;
			pos = end;
			removed_regions += 1;
			continue;
		}

		pos += block[pos..].chars().next().map_or(1, char::len_utf8);
	}

	text.push_str(&block[copied..]);

	StrippedBlock {
		text,
		removed_regions,
	}
}

/// Candidate content starts for a region beginning at `pos`, implicit region
/// first.
fn region_starts(block: &str, pos: usize, opening: &str) -> [Option<usize>; 2] {
	let rest = &block[pos..];
	if !rest.starts_with('\n') {
		return [None, None];
	}

	let implicit = block[..pos].ends_with(opening).then_some(pos + 1);

	let after_break = &rest[1..];
	let marker = after_break.trim_start();
	let explicit = marker.starts_with(PRIVATE_MARKER).then(|| {
		let skipped = after_break.len() - marker.len();
		pos + 1 + skipped + PRIVATE_MARKER.len()
	});

	[implicit, explicit]
}

/// End of a region whose content starts at `content_start`: the position of
/// the last boundary before the next `public`.
fn region_end(block: &str, content_start: usize) -> Option<usize> {
	let limit = block[content_start..]
		.find(PUBLIC_WORD)
		.map_or(block.len(), |offset| content_start + offset);

	block[content_start..limit]
		.rmatch_indices('\n')
		.map(|(offset, _)| content_start + offset)
		.find(|&index| is_boundary(&block[index + 1..]))
}

/// Whether the text following a line break closes a region.
fn is_boundary(after_break: &str) -> bool {
	after_break.starts_with('}') || after_break.trim_start().starts_with(PUBLIC_MARKER)
}
