use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// A post-processing step applied to the stripped text of one class.
pub type CosmeticHook = fn(&str) -> String;

/// Enumerant values written as `= 1 << _Xx` in the category bitmask.
static CATEGORY_SHIFT: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r" = 1 << _[A-Z][a-z]").unwrap_or_else(|e| panic!("invalid shift pattern: {e}"))
});

/// Line breaks after the `Lt,` and `Pi,` categories, which wrap their group.
static CATEGORY_CONTINUATION: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(Lt,|Pi,)\n\s*")
		.unwrap_or_else(|e| panic!("invalid continuation pattern: {e}"))
});

/// Per-class cosmetic substitutions keyed by class name.
///
/// Hooks run after the private regions were stripped, in registration order.
/// Classes without hooks are rendered unchanged.
#[derive(Debug, Clone)]
pub struct CosmeticRegistry {
	hooks: HashMap<String, Vec<CosmeticHook>>,
}

impl Default for CosmeticRegistry {
	fn default() -> Self {
		let mut registry = Self::empty();
		registry.register("unicode", compact_category_enum);
		registry
	}
}

impl CosmeticRegistry {
	/// A registry without any hooks.
	pub fn empty() -> Self {
		Self {
			hooks: HashMap::new(),
		}
	}

	/// Add `hook` for `class_name`.
	pub fn register(&mut self, class_name: impl Into<String>, hook: CosmeticHook) {
		self.hooks.entry(class_name.into()).or_default().push(hook);
	}

	/// Whether any hook is registered for `class_name`.
	pub fn has_hooks(&self, class_name: &str) -> bool {
		self.hooks.contains_key(class_name)
	}

	/// Run the hooks registered for `class_name` over `text`.
	pub fn apply(&self, class_name: &str, text: &str) -> String {
		let Some(hooks) = self.hooks.get(class_name) else {
			return text.to_string();
		};

		hooks
			.iter()
			.fold(text.to_string(), |current, hook| hook(&current))
	}
}

/// Compact the category bitmask of the `unicode` class: drop the
/// `= 1 << _Xx` values and keep the `Lt,` and `Pi,` groups on one line.
pub fn compact_category_enum(text: &str) -> String {
	let without_values = CATEGORY_SHIFT.replace_all(text, "");
	CATEGORY_CONTINUATION
		.replace_all(&without_values, "${1} ")
		.into_owned()
}
