//! How dirusage should run, built from its arguments.

pub mod args;

use std::path::PathBuf;

use args::Args;

/// How a report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `key: value` line per field. Values use binary prefixes unless
    /// `raw_bytes` is set.
    Text { raw_bytes: bool },
    /// A single JSON object with exact byte counts.
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text { raw_bytes: false }
    }
}

/// What to measure, and how to print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub path: PathBuf,
    pub report_capacity: bool,
    pub report_size: bool,
    pub format: OutputFormat,
}

impl Options {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            report_capacity: true,
            report_size: true,
            format: OutputFormat::default(),
        }
    }

    /// Builds options from parsed arguments. Asking for neither report means
    /// both.
    pub fn from_args(args: &Args) -> Self {
        let report = &args.report_args;
        let (report_capacity, report_size) = match (report.capacity, report.size) {
            (false, false) => (true, true),
            requested => requested,
        };

        let format = if args.output_args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text {
                raw_bytes: args.output_args.bytes,
            }
        };

        Self {
            path: args.path.clone(),
            report_capacity,
            report_size,
            format,
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    fn options(argv: &[&str]) -> Options {
        Options::from_args(&Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults_report_everything_as_text() {
        let opts = options(&["dirusage", "some/dir"]);

        assert_eq!(opts, Options::new("some/dir"));
    }

    #[test]
    fn single_report() {
        let opts = options(&["dirusage", "--capacity"]);
        assert!(opts.report_capacity);
        assert!(!opts.report_size);

        let opts = options(&["dirusage", "--size"]);
        assert!(!opts.report_capacity);
        assert!(opts.report_size);
    }

    #[test]
    fn output_formats() {
        assert_eq!(
            options(&["dirusage", "--bytes"]).format,
            OutputFormat::Text { raw_bytes: true }
        );
        assert_eq!(
            options(&["dirusage", "--json", "--bytes"]).format,
            OutputFormat::Json
        );
    }
}
