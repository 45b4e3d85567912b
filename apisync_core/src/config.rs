use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ApiSyncError;
use crate::ApiSyncResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["apisync.toml", ".apisync.toml", ".config/apisync.toml"];

/// Product name used in the banner and the version marker.
pub const DEFAULT_PRODUCT: &str = "UniLib";
/// Location of the source-of-truth version file, relative to the root.
pub const DEFAULT_VERSION_FILE: &str = "../unilib/version.h";
/// Directory holding one header per documented class, relative to the root.
pub const DEFAULT_HEADER_DIR: &str = "../unilib";
pub const DEFAULT_HEADER_EXTENSION: &str = "h";
pub const DEFAULT_FENCE_LANGUAGE: &str = "cpp";

/// Configuration loaded from an `apisync.toml` file.
///
/// ```toml
/// product = "UniLib"
/// version_file = "../unilib/version.h"
/// header_dir = "../unilib"
/// header_extension = "h"
/// fence_language = "cpp"
/// ```
///
/// Every key is optional. Relative paths are resolved against the root
/// directory the tool runs in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApiSyncConfig {
	/// Product name expected in the banner (`# <product> <version>`) and in
	/// the version marker (`// <product> version: <version>`).
	#[serde(default = "default_product")]
	pub product: String,
	/// File containing the version marker line.
	#[serde(default = "default_version_file")]
	pub version_file: PathBuf,
	/// Directory containing `<Class>.<header_extension>` files.
	#[serde(default = "default_header_dir")]
	pub header_dir: PathBuf,
	/// Extension of the header files, without the leading dot.
	#[serde(default = "default_header_extension")]
	pub header_extension: String,
	/// Info string written after the opening fence of each rendered block.
	#[serde(default = "default_fence_language")]
	pub fence_language: String,
}

impl Default for ApiSyncConfig {
	fn default() -> Self {
		Self {
			product: default_product(),
			version_file: default_version_file(),
			header_dir: default_header_dir(),
			header_extension: default_header_extension(),
			fence_language: default_fence_language(),
		}
	}
}

fn default_product() -> String {
	DEFAULT_PRODUCT.to_string()
}

fn default_version_file() -> PathBuf {
	PathBuf::from(DEFAULT_VERSION_FILE)
}

fn default_header_dir() -> PathBuf {
	PathBuf::from(DEFAULT_HEADER_DIR)
}

fn default_header_extension() -> String {
	DEFAULT_HEADER_EXTENSION.to_string()
}

fn default_fence_language() -> String {
	DEFAULT_FENCE_LANGUAGE.to_string()
}

impl ApiSyncConfig {
	/// Resolve the first config file candidate that exists at `root`.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> ApiSyncResult<Option<ApiSyncConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path).map_err(|e| {
			ApiSyncError::ReadFile {
				path: config_path.display().to_string(),
				reason: e.to_string(),
			}
		})?;
		let config: ApiSyncConfig =
			toml::from_str(&content).map_err(|e| ApiSyncError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to the defaults when no config
	/// file exists.
	pub fn load_or_default(root: &Path) -> ApiSyncResult<ApiSyncConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Path of the header declaring `class_name`.
	pub fn header_path(&self, root: &Path, class_name: &str) -> PathBuf {
		root.join(&self.header_dir)
			.join(format!("{class_name}.{}", self.header_extension))
	}

	/// Path of the version file.
	pub fn version_path(&self, root: &Path) -> PathBuf {
		root.join(&self.version_file)
	}
}
