//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the build script doesn't
//! trip all over itself.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "dirusage [OPTIONS] [PATH]";

/// The arguments for dirusage.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[arg(
        value_name = "PATH",
        default_value = ".",
        help = "The path to measure.",
        long_help = "The path to measure. Capacity is reported for the filesystem the path lives on, \
                    and the size is the sum of every file under it. Defaults to the current directory."
    )]
    pub path: PathBuf,

    #[command(flatten)]
    pub report_args: ReportArgs,

    #[command(flatten)]
    pub output_args: OutputArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Report Options")]
pub struct ReportArgs {
    #[arg(
        short = 'c',
        long,
        conflicts_with = "size",
        help = "Only reports filesystem capacity.",
        long_help = "Only reports the available, used, and total bytes of the filesystem the path is on, \
                    skipping the walk of the directory tree."
    )]
    pub capacity: bool,

    #[arg(
        short = 's',
        long,
        help = "Only reports the recursive size.",
        long_help = "Only reports the total size of every file under the path, skipping the capacity query."
    )]
    pub size: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Output Options")]
pub struct OutputArgs {
    #[arg(
        short = 'b',
        long,
        help = "Prints exact byte counts.",
        long_help = "Prints exact byte counts instead of values with binary prefixes (e.g. 1.5GiB). \
                    JSON output always uses exact byte counts."
    )]
    pub bytes: bool,

    #[arg(
        short = 'j',
        long,
        help = "Prints a JSON object.",
        long_help = indoc! {
            "Prints a single JSON object instead of text. Keys that weren't requested are left out.

            {\"avail_size\": 819200, \"used_size\": 3276800, \"all_size\": 4096000, \"size\": 150}"
        }
    )]
    pub json: bool,

    #[cfg(feature = "logging")]
    #[arg(
        long,
        value_name = "PATH",
        help = "Writes debug logs to a file.",
        long_help = "Writes debug logs, such as each directory visited and any failure, to the given file."
    )]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use '--help'.)")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns the [`Command`] for dirusage, for completions and manpages.
pub fn build_cmd() -> Command {
    Args::command()
}

/// Returns an [`Args`].
pub fn get_args() -> Args {
    Args::parse()
}
