use std::path::Path;
use std::path::PathBuf;

use regex::Regex;

use crate::ApiSyncError;
use crate::ApiSyncResult;
use crate::Document;
use crate::VersionString;
use crate::config::ApiSyncConfig;
use crate::cosmetics::CosmeticRegistry;
use crate::locator::LocateError;
use crate::locator::locate_class_block;
use crate::stripper::strip_private_sections;
use crate::version::VERSION_TOKEN;
use crate::version::read_version;

/// Prefix of a class marker line: ``## Class `<Name>` ``.
pub const CLASS_MARKER_PREFIX: &str = "## Class `";
const CLASS_MARKER_SUFFIX: &str = "`";
/// A line consisting only of this text closes a fenced code block.
pub const FENCE: &str = "```";

/// Everything needed to synchronize a document: where sources live, how
/// they are named, and which cosmetic hooks apply.
#[derive(Debug, Clone)]
pub struct SyncContext {
	/// Directory that relative config paths are resolved against.
	pub root: PathBuf,
	pub config: ApiSyncConfig,
	pub cosmetics: CosmeticRegistry,
}

impl SyncContext {
	pub fn new(root: impl Into<PathBuf>, config: ApiSyncConfig) -> Self {
		Self {
			root: root.into(),
			config,
			cosmetics: CosmeticRegistry::default(),
		}
	}

	/// Build a context for `root`, loading `apisync.toml` when present.
	pub fn from_root(root: impl Into<PathBuf>) -> ApiSyncResult<Self> {
		let root = root.into();
		let config = ApiSyncConfig::load_or_default(&root)?;
		Ok(Self::new(root, config))
	}

	#[must_use]
	pub fn with_cosmetics(mut self, cosmetics: CosmeticRegistry) -> Self {
		self.cosmetics = cosmetics;
		self
	}
}

/// The public interface of one class, ready to be fenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
	pub text: String,
	/// Number of private regions removed from the declaration.
	pub removed_regions: usize,
}

/// A class whose fenced block was regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedClass {
	pub name: String,
	/// Header the declaration was read from.
	pub header: PathBuf,
	/// 1-indexed line of the class marker in the updated document.
	pub marker_line: usize,
	/// Number of lines inside the fence.
	pub line_count: usize,
	pub removed_regions: usize,
}

/// Result of synchronizing a document in memory.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
	/// Version written into the banner.
	pub version: VersionString,
	/// Classes in document order.
	pub classes: Vec<RenderedClass>,
	/// The document content before synchronization.
	pub original: String,
	/// The document content after synchronization.
	pub updated: String,
	document: Document,
}

impl SyncOutcome {
	/// Returns true if synchronization changed the document.
	pub fn is_changed(&self) -> bool {
		self.original != self.updated
	}

	/// The synchronized document.
	pub fn document(&self) -> &Document {
		&self.document
	}
}

/// Name of the class identified by a marker line, if `line` is one.
pub fn class_marker_name(line: &str) -> Option<&str> {
	line.strip_prefix(CLASS_MARKER_PREFIX)?
		.strip_suffix(CLASS_MARKER_SUFFIX)
		.filter(|name| !name.is_empty() && !name.contains('`'))
}

/// Extract the public interface of `class_name` from a header's `source`:
/// locate the declaration, strip its private regions and apply the class's
/// cosmetic hooks. `\r\n` line endings are read as `\n`.
pub fn render_class(
	source: &str,
	class_name: &str,
	cosmetics: &CosmeticRegistry,
) -> Result<RenderedBlock, LocateError> {
	let source = source.replace("\r\n", "\n");
	let block = locate_class_block(&source, class_name)?;
	let stripped = strip_private_sections(block, class_name);
	let text = cosmetics.apply(class_name, &stripped.text);

	Ok(RenderedBlock {
		text,
		removed_regions: stripped.removed_regions,
	})
}

/// Rewrite the banner line with `version`. The existing banner must already
/// read `# <product> <version>`.
pub fn patch_banner(
	document: &mut Document,
	product: &str,
	version: &VersionString,
) -> ApiSyncResult<()> {
	let pattern = format!("^# {} {VERSION_TOKEN}$", regex::escape(product));
	let banner = Regex::new(&pattern).map_err(|e| {
		ApiSyncError::InvalidPattern {
			product: product.to_string(),
			reason: e.to_string(),
		}
	})?;

	let Some(first) = document.first_mut() else {
		return Err(ApiSyncError::MalformedBanner {
			line: String::new(),
			product: product.to_string(),
		});
	};

	if !banner.is_match(first) {
		return Err(ApiSyncError::MalformedBanner {
			line: first.clone(),
			product: product.to_string(),
		});
	}

	*first = format!("# {product} {version}");
	Ok(())
}

/// Synchronize `document` against the sources described by `ctx`.
///
/// The banner is patched first, then every class marker is processed in
/// document order. Nothing is written; use [`write_outcome`] to persist the
/// result. Any error aborts the whole synchronization.
pub fn synchronize(document: &Document, ctx: &SyncContext) -> ApiSyncResult<SyncOutcome> {
	let config = &ctx.config;
	let version = read_version(&config.version_path(&ctx.root), &config.product)?;

	let original = document.render();
	let mut document = document.clone();
	patch_banner(&mut document, &config.product, &version)?;
	tracing::info!(%version, "patched banner");

	let mut classes = Vec::new();
	let mut cursor = 1;

	while let Some(marker) = document.find(cursor, |line| class_marker_name(line).is_some()) {
		let name = class_marker_name(&document[marker])
			.unwrap_or_default()
			.to_string();
		let header = config.header_path(&ctx.root, &name);
		let source = read_header(&header, &name)?;

		let rendered = render_class(&source, &name, &ctx.cosmetics).map_err(|e| {
			ApiSyncError::MalformedClassSource {
				class: name.clone(),
				path: header.display().to_string(),
				reason: e.to_string(),
			}
		})?;

		let missing_fence = || {
			ApiSyncError::MissingCodeFence {
				class: name.clone(),
				line: marker + 1,
			}
		};
		let fence_end = document.find_line(marker + 1, FENCE).ok_or_else(missing_fence)?;
		// The fence must belong to this marker, not to the next one.
		let next_marker = document.find(marker + 1, |line| class_marker_name(line).is_some());
		if next_marker.is_some_and(|next| next < fence_end) {
			return Err(missing_fence());
		}

		let body: Vec<String> = rendered.text.split('\n').map(ToString::to_string).collect();
		let line_count = body.len();
		let mut fenced = Vec::with_capacity(line_count + 3);
		fenced.push(String::new());
		fenced.push(format!("{FENCE}{}", config.fence_language));
		fenced.extend(body);
		fenced.push(FENCE.to_string());

		cursor = document.replace_range(marker + 1..fence_end + 1, fenced);
		tracing::debug!(
			class = %name,
			header = %header.display(),
			lines = line_count,
			removed_regions = rendered.removed_regions,
			"rendered class"
		);

		classes.push(RenderedClass {
			name,
			header,
			marker_line: marker + 1,
			line_count,
			removed_regions: rendered.removed_regions,
		});
	}

	Ok(SyncOutcome {
		version,
		classes,
		original,
		updated: document.render(),
		document,
	})
}

/// Load the document at `path` and synchronize it without writing.
pub fn sync_file(path: &Path, ctx: &SyncContext) -> ApiSyncResult<SyncOutcome> {
	let document = Document::load(path)?;
	synchronize(&document, ctx)
}

/// Write the synchronized document to `path` when it changed. Returns whether
/// the file was written.
pub fn write_outcome(path: &Path, outcome: &SyncOutcome) -> ApiSyncResult<bool> {
	if !outcome.is_changed() {
		return Ok(false);
	}

	outcome.document.save(path)?;
	tracing::info!(path = %path.display(), "wrote document");
	Ok(true)
}

fn read_header(path: &Path, class_name: &str) -> ApiSyncResult<String> {
	if !path.is_file() {
		return Err(ApiSyncError::MissingClassSource {
			class: class_name.to_string(),
			path: path.display().to_string(),
		});
	}

	std::fs::read_to_string(path).map_err(|e| {
		ApiSyncError::ReadFile {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	})
}
