use std::fmt;
use std::path::Path;

use regex::Regex;

use crate::ApiSyncError;
use crate::ApiSyncResult;

/// Characters a version token may contain.
pub(crate) const VERSION_TOKEN: &str = "[-0-9.a-z]+";

/// A version token such as `3.3.2-dev`, copied verbatim from the version
/// file into the document banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString(String);

impl VersionString {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for VersionString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Build the pattern matching `// <product> version: <version>` lines.
fn marker_pattern(product: &str) -> ApiSyncResult<Regex> {
	let pattern = format!(
		"^// {} version: ({VERSION_TOKEN})$",
		regex::escape(product)
	);
	Regex::new(&pattern).map_err(|e| {
		ApiSyncError::InvalidPattern {
			product: product.to_string(),
			reason: e.to_string(),
		}
	})
}

/// Extract the version from the first marker line in `content`.
pub fn parse_version(content: &str, product: &str) -> Option<VersionString> {
	let pattern = marker_pattern(product).ok()?;
	content.lines().find_map(|line| {
		pattern
			.captures(line)
			.and_then(|captures| captures.get(1))
			.map(|token| VersionString(token.as_str().to_string()))
	})
}

/// Read the version file at `path` and extract the version for `product`.
/// A file without a marker line is a fatal error.
pub fn read_version(path: &Path, product: &str) -> ApiSyncResult<VersionString> {
	let content = std::fs::read_to_string(path).map_err(|e| {
		ApiSyncError::ReadFile {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	})?;

	// Surface a bad product name instead of reporting a missing marker.
	marker_pattern(product)?;

	let version = parse_version(&content, product).ok_or_else(|| {
		ApiSyncError::MissingVersionMarker {
			path: path.display().to_string(),
			product: product.to_string(),
		}
	})?;
	tracing::debug!(path = %path.display(), %version, "read version marker");

	Ok(version)
}
