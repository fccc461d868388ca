//! Gathering the requested measurements and turning them into output.

use std::fmt::Write;

use serde::Serialize;

use crate::{
    collection::{FsUsage, dir_size, fs_usage},
    options::{Options, OutputFormat},
    utils::{data_units::binary_byte_string, error::Result},
};

/// The measurements for one path. Fields that weren't requested are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub capacity: Option<FsUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

/// Takes every measurement `options` asks for. Fails on the first error.
pub fn collect_report(options: &Options) -> Result<Report> {
    let capacity = if options.report_capacity {
        Some(fs_usage(&options.path)?)
    } else {
        None
    };

    let size = if options.report_size {
        Some(dir_size(&options.path)?)
    } else {
        None
    };

    Ok(Report { capacity, size })
}

/// Renders `report` in the given format, without a trailing newline.
pub fn render_report(report: &Report, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(report),
        OutputFormat::Text { raw_bytes } => Ok(text_report(report, raw_bytes)),
    }
}

fn text_report(report: &Report, raw_bytes: bool) -> String {
    let fmt_bytes = |bytes: u64| {
        if raw_bytes {
            bytes.to_string()
        } else {
            binary_byte_string(bytes)
        }
    };

    let mut lines = Vec::with_capacity(4);
    if let Some(usage) = &report.capacity {
        lines.push(("available", fmt_bytes(usage.available_size)));
        lines.push(("used", fmt_bytes(usage.used_size)));
        lines.push(("total", fmt_bytes(usage.all_size)));
    }
    if let Some(size) = report.size {
        lines.push(("size", fmt_bytes(u64::try_from(size).unwrap_or_default())));
    }

    let mut out = String::new();
    for (i, (label, value)) in lines.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{label}: {value}");
    }

    out
}
