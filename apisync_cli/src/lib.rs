use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Synchronize an API reference document with the headers it describes.",
	long_about = "apisync rewrites the version banner of an API reference document from the \
	              project's version file and regenerates the fenced block after every \
	              ## Class `<Name>` marker from the public part of that class's header.\n\nThe \
	              document is only written when every class was rendered successfully; any \
	              problem aborts the run and leaves the file untouched.\n\nExamples:\n  apisync \
	              API.md           Synchronize API.md in place\n  apisync --check API.md   \
	              Fail if API.md is out of date\n  apisync --check --diff   Show what would \
	              change"
)]
pub struct ApiSyncCli {
	/// Path to the documentation file to synchronize in place.
	pub document: PathBuf,

	/// Directory the config file and the relative version/header paths are
	/// resolved against. Defaults to the current directory.
	#[arg(long, short)]
	pub root: Option<PathBuf>,

	/// Do not write the document. Exit with a non-zero status code if it is
	/// out of date.
	#[arg(long, default_value_t = false)]
	pub check: bool,

	/// With `--check`, print a diff between the current and the
	/// synchronized document.
	#[arg(long, default_value_t = false, requires = "check")]
	pub diff: bool,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}
