use anyhow::{Context, Result};
use dirusage::{
    options::{Options, args},
    report::{collect_report, render_report},
};

fn main() -> Result<()> {
    let args = args::get_args();

    #[cfg(feature = "logging")]
    {
        if let Some(log_file) = &args.output_args.log_file {
            dirusage::utils::logging::init_logger(log::LevelFilter::Debug, log_file.as_os_str())
                .context("Unable to set up the log file.")?;
        }
    }

    let options = Options::from_args(&args);
    let report = collect_report(&options)
        .with_context(|| format!("Unable to measure {:?}.", options.path))?;
    let output = render_report(&report, options.format).context("Unable to format the report.")?;

    println!("{output}");

    Ok(())
}
