use std::path::Path;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::AnyResult;
use crate::ApiSyncConfig;
use crate::SyncContext;

pub(crate) const VERSION_H: &str = "// This file is part of UniLib.
//
// UniLib version: 3.3.2-dev
// Unicode version: 15.1.0

#pragma once

#include <string>

namespace unilib {

// The `version` class represents the UniLib version according to
// the [Semantic Versioning](http://semver.org/).
class version {
 public:
  unsigned major;
  unsigned minor;
  unsigned patch;
  std::string prerelease;

  // Returns the current version.
  static version current();
};

} // namespace unilib
";

pub(crate) const VERSION_BLOCK: &str = "// The `version` class represents the UniLib version \
                                         according to
// the [Semantic Versioning](http://semver.org/).
class version {
 public:
  unsigned major;
  unsigned minor;
  unsigned patch;
  std::string prerelease;

  // Returns the current version.
  static version current();
};";

pub(crate) const UNICODE_H: &str = "// This file is part of UniLib.

#pragma once

#include <cstdint>

namespace unilib {

// The `unicode` class contains basic information from
// the Unicode Character Database.
class unicode {
  enum : uint8_t {
    _Lu = 1, _Ll = 2, _Lt = 3, _Lm = 4,
    _Pi = 16, _Pf = 17
  };

 public:
  typedef uint32_t category_t;
  enum : category_t {
    Lu = 1 << _Lu, Ll = 1 << _Ll, Lt = 1 << _Lt, LC = Lu | Ll | Lt,
      Lm = 1 << _Lm, L = Lu | Ll | Lt | Lm,
    Pi = 1 << _Pi,
      Pf = 1 << _Pf, P = Pi | Pf
  };

  static inline category_t category(char32_t chr);

 private:
  inline static const char32_t CHARS = 0x110000;
  static const uint8_t category_index[];
};

} // namespace unilib
";

pub(crate) const FOO_H: &str = "// header

class Foo {
public:
  int a();
private:
  int b();
public:
  int c();
};
more text";

pub(crate) const FOO_BLOCK: &str = "class Foo {
public:
  int a();
public:
  int c();
};";

pub(crate) const API_MD: &str = "# UniLib 3.3.1

UniLib is a small library.

## Class `version`

```cpp
old content
```

## Class `unicode`

Stale text directly after the marker.

```cpp
class unicode {
};
```

## Trailer

Final words.
";

/// A temporary layout mirroring a checkout: the document lives in `doc/`
/// and the headers in `unilib/`, matching the default config paths.
pub(crate) struct SourceTree {
	pub dir: TempDir,
}

impl SourceTree {
	pub fn new() -> AnyResult<Self> {
		let dir = tempfile::tempdir()?;
		std::fs::create_dir_all(dir.path().join("doc"))?;
		std::fs::create_dir_all(dir.path().join("unilib"))?;
		Ok(Self { dir })
	}

	/// The standard tree: `version.h`, `unicode.h` and `doc/API.md`.
	pub fn standard() -> AnyResult<Self> {
		let tree = Self::new()?;
		tree.header("version", VERSION_H)?;
		tree.header("unicode", UNICODE_H)?;
		tree.document(API_MD)?;
		Ok(tree)
	}

	pub fn root(&self) -> PathBuf {
		self.dir.path().join("doc")
	}

	pub fn document_path(&self) -> PathBuf {
		self.root().join("API.md")
	}

	pub fn header(&self, class_name: &str, content: &str) -> AnyResult<()> {
		let path = self.dir.path().join("unilib").join(format!("{class_name}.h"));
		std::fs::write(path, content)?;
		Ok(())
	}

	pub fn document(&self, content: &str) -> AnyResult<()> {
		std::fs::write(self.document_path(), content)?;
		Ok(())
	}

	pub fn read_document(&self) -> AnyResult<String> {
		Ok(std::fs::read_to_string(self.document_path())?)
	}

	pub fn context(&self) -> SyncContext {
		SyncContext::new(self.root(), ApiSyncConfig::default())
	}

	pub fn path(&self) -> &Path {
		self.dir.path()
	}
}
