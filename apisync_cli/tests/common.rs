#![allow(dead_code)]

use std::path::Path;
use std::path::PathBuf;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

pub const VERSION_H: &str = "#pragma once\n\n// UniLib version: 3.3.2-dev\n";

pub const FOO_H: &str = "// header\n\nclass Foo {\npublic:\n  int a();\nprivate:\n  int \
                         b();\npublic:\n  int c();\n};\nmore text";

pub const STALE_API_MD: &str = "# UniLib 3.3.1\n\n## Class `Foo`\n\n```cpp\nclass Foo \
                                {\n};\n```\n\nTrailer.\n";

pub const SYNCED_API_MD: &str = "# UniLib 3.3.2-dev\n\n## Class `Foo`\n\n```cpp\nclass Foo \
                                 {\npublic:\n  int a();\npublic:\n  int c();\n};\n```\n\nTrailer.\n";

pub fn apisync_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("apisync"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// A checkout with the document in `doc/` and headers in `unilib/`.
pub fn source_tree(document: &str) -> std::io::Result<TempDir> {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("doc"))?;
	std::fs::create_dir_all(tmp.path().join("unilib"))?;
	std::fs::write(tmp.path().join("unilib/version.h"), VERSION_H)?;
	std::fs::write(tmp.path().join("unilib/Foo.h"), FOO_H)?;
	std::fs::write(tmp.path().join("doc/API.md"), document)?;
	Ok(tmp)
}

pub fn doc_dir(tmp: &Path) -> PathBuf {
	tmp.join("doc")
}

pub fn read_document(tmp: &Path) -> std::io::Result<String> {
	std::fs::read_to_string(tmp.join("doc/API.md"))
}
