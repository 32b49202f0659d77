use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use provfind::app_dirs;
use provfind_catalog::SortOrder;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = env!("CARGO_PKG_VERSION").to_string();
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = write!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "provfind",
	version,
	long_version = long_version(),
	about = "Browse and filter local service providers",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `provfind` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PROVFIND_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load providers from a JSON or TOML file (default: built-in sample data)"
	)]
	pub(crate) providers: Option<PathBuf>,
	#[arg(
		short = 'q',
		long = "search",
		value_name = "TEXT",
		help = "Initial search text matched against names and categories (default: empty)"
	)]
	pub(crate) search: Option<String>,
	#[arg(
		short = 'g',
		long,
		value_name = "NAME",
		help = "Initial category, or 'all' for every category (default: all)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		short = 'd',
		long = "max-distance",
		value_name = "MILES",
		help = "Initial maximum distance (default: 10)"
	)]
	pub(crate) max_distance: Option<f64>,
	#[arg(
		short = 'r',
		long = "min-rating",
		value_name = "STARS",
		help = "Initial minimum rating (default: 4)"
	)]
	pub(crate) min_rating: Option<f64>,
	#[arg(
		short = 's',
		long,
		value_enum,
		help = "Order of the result list (default: listing)"
	)]
	pub(crate) sort: Option<SortArg>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the page title (default: Find Service Providers)"
	)]
	pub(crate) title: Option<String>,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: slate)")]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log level for the in-app console (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'l',
		long = "list",
		help = "Print the filtered providers instead of opening the finder (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(long = "list-categories", help = "List the selectable categories and exit")]
	pub(crate) list_categories: bool,
	#[arg(long = "list-themes", help = "List supported themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Sort orders accepted via the command line.
pub(crate) enum SortArg {
	Listing,
	TopRated,
	Nearest,
	Price,
}

impl From<SortArg> for SortOrder {
	fn from(value: SortArg) -> Self {
		match value {
			SortArg::Listing => SortOrder::Listing,
			SortArg::TopRated => SortOrder::TopRated,
			SortArg::Nearest => SortOrder::Nearest,
			SortArg::Price => SortOrder::Price,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
