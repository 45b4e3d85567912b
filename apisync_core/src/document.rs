use std::ops::Range;
use std::path::Path;

use derive_more::Deref;
use derive_more::DerefMut;

use crate::ApiSyncError;
use crate::ApiSyncResult;

/// A documentation file held as an ordered sequence of lines.
///
/// Lines never contain their terminator. Rendering joins them with `\n` and
/// appends a single trailing newline, so loading and rendering an unchanged
/// document is lossless for `\n`-terminated files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct Document(
	#[deref]
	#[deref_mut]
	Vec<String>,
);

impl Document {
	/// Split `content` into lines. A trailing `\r` on each line is dropped.
	pub fn parse(content: &str) -> Self {
		Self(content.lines().map(ToString::to_string).collect())
	}

	/// Read and parse the document at `path`.
	pub fn load(path: &Path) -> ApiSyncResult<Self> {
		let content = std::fs::read_to_string(path).map_err(|e| {
			ApiSyncError::ReadFile {
				path: path.display().to_string(),
				reason: e.to_string(),
			}
		})?;

		Ok(Self::parse(&content))
	}

	/// Index of the first line at or after `start` satisfying `predicate`.
	pub fn find(&self, start: usize, predicate: impl Fn(&str) -> bool) -> Option<usize> {
		self.0
			.iter()
			.enumerate()
			.skip(start)
			.find(|(_, line)| predicate(line.as_str()))
			.map(|(index, _)| index)
	}

	/// Index of the first line at or after `start` that equals `text`.
	pub fn find_line(&self, start: usize, text: &str) -> Option<usize> {
		self.find(start, |line| line == text)
	}

	/// Remove the lines in `range` and insert `new_lines` in their place.
	/// Returns the index just past the inserted lines.
	pub fn replace_range<I>(&mut self, range: Range<usize>, new_lines: I) -> usize
	where
		I: IntoIterator<Item = String>,
	{
		let start = range.start;
		let before = self.0.len();
		let removed = range.len();
		self.0.splice(range, new_lines);
		start + (self.0.len() + removed - before)
	}

	/// Join the lines back into file content.
	pub fn render(&self) -> String {
		let mut content = self.0.join("\n");
		content.push('\n');
		content
	}

	/// Write the rendered document to `path`, replacing any existing file.
	pub fn save(&self, path: &Path) -> ApiSyncResult<()> {
		std::fs::write(path, self.render())?;
		Ok(())
	}
}

impl From<Vec<String>> for Document {
	fn from(lines: Vec<String>) -> Self {
		Self(lines)
	}
}
