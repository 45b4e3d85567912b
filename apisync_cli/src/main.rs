use std::path::Path;
use std::path::PathBuf;
use std::process;

use apisync_cli::ApiSyncCli;
use apisync_core::ApiSyncResult;
use apisync_core::RenderedClass;
use apisync_core::SyncContext;
use apisync_core::SyncOutcome;
use apisync_core::sync_file;
use apisync_core::write_outcome;
use clap::Parser;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = ApiSyncCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	match run(&args) {
		Ok(true) => {}
		Ok(false) => process::exit(1),
		Err(e) => {
			let report: miette::Report = e.into();
			eprintln!("{report:?}");
			process::exit(2);
		}
	}
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "info" } else { "warn" };
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(format!("apisync_core={default_level}")));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.with_ansi(use_color)
		.init();
}

fn resolve_root(args: &ApiSyncCli) -> PathBuf {
	args.root
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Synchronize (or check) the document. Returns `false` when `--check` found
/// the document out of date.
fn run(args: &ApiSyncCli) -> ApiSyncResult<bool> {
	let root = resolve_root(args);
	let ctx = SyncContext::from_root(&root)?;
	let outcome = sync_file(&args.document, &ctx)?;

	if args.verbose {
		print_classes(&outcome.classes, &root);
	}

	if args.check {
		return Ok(run_check(args, &outcome));
	}

	let display = args.document.display();
	if write_outcome(&args.document, &outcome)? {
		println!(
			"Updated {display}: version {}, {} class block(s).",
			outcome.version,
			outcome.classes.len()
		);
	} else {
		println!("{display} is already up to date.");
	}

	Ok(true)
}

fn run_check(args: &ApiSyncCli, outcome: &SyncOutcome) -> bool {
	let display = args.document.display();

	if !outcome.is_changed() {
		println!("Check passed: {display} is up to date.");
		return true;
	}

	eprintln!(
		"{} {display} is out of date with its headers (version {}).",
		colored!("error:", red),
		outcome.version
	);

	if args.diff {
		print_diff(&outcome.original, &outcome.updated);
	}

	eprintln!("Run `apisync {display}` to synchronize it.");
	false
}

fn print_classes(classes: &[RenderedClass], root: &Path) {
	if classes.is_empty() {
		println!("No class markers found.");
		return;
	}

	println!("{}", colored!("Classes:", bold));
	for class in classes {
		println!(
			"  {} {} ({} line(s), {} private region(s) removed)",
			class.name,
			make_relative(&class.header, root),
			class.line_count,
			class.removed_regions
		);
	}
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
