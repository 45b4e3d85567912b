use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ApiSyncError {
	#[error(transparent)]
	#[diagnostic(code(apisync::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read `{path}`: {reason}")]
	#[diagnostic(code(apisync::read_file))]
	ReadFile { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(apisync::config_parse),
		help(
			"check that apisync.toml is valid TOML using only the keys product, version_file, \
			 header_dir, header_extension and fence_language"
		)
	)]
	ConfigParse(String),

	#[error("invalid pattern for product `{product}`: {reason}")]
	#[diagnostic(code(apisync::invalid_pattern))]
	InvalidPattern { product: String, reason: String },

	#[error("no version marker found in `{path}`")]
	#[diagnostic(
		code(apisync::missing_version_marker),
		help("add a line of the form `// {product} version: 1.2.3` to the version file")
	)]
	MissingVersionMarker { path: String, product: String },

	#[error("malformed banner line: `{line}`")]
	#[diagnostic(
		code(apisync::malformed_banner),
		help("the first line of the document must read `# {product} <version>`")
	)]
	MalformedBanner { line: String, product: String },

	#[error("missing header for class `{class}`: `{path}` does not exist")]
	#[diagnostic(
		code(apisync::missing_class_source),
		help("every `## Class` marker needs a header file named after the class")
	)]
	MissingClassSource { class: String, path: String },

	#[error("malformed header for class `{class}` in `{path}`: {reason}")]
	#[diagnostic(
		code(apisync::malformed_class_source),
		help(
			"the declaration `class {class}` must start a line in a paragraph preceded by a blank \
			 line and end with a line starting with `}};`"
		)
	)]
	MalformedClassSource {
		class: String,
		path: String,
		reason: String,
	},

	#[error("no code fence found after the marker for class `{class}` (line {line})")]
	#[diagnostic(
		code(apisync::missing_code_fence),
		help("follow the `## Class` marker with a fenced code block closed by a line containing only ```")
	)]
	MissingCodeFence { class: String, line: usize },
}

pub type ApiSyncResult<T> = Result<T, ApiSyncError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
