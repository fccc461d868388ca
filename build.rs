#[allow(dead_code)]
#[path = "src/options/args.rs"]
mod args;

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

const COMPLETION_DIR: &str = "./target/tmp/dirusage/completion/";
const MANPAGE_DIR: &str = "./target/tmp/dirusage/manpage/";

fn create_dir(dir: &Path) -> io::Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!("Failed to create a directory at location {dir:?}, encountered error {err:?}. Aborting...");
    }

    res
}

fn generate_completions(out_dir: &Path) -> io::Result<()> {
    let mut cmd = args::build_cmd();

    for shell in [
        Shell::Bash,
        Shell::Zsh,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Elvish,
    ] {
        generate_to(shell, &mut cmd, "dirusage", out_dir)?;
    }

    Ok(())
}

fn generate_manpage(out_dir: &Path) -> io::Result<()> {
    let man = Man::new(args::build_cmd());
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    fs::write(out_dir.join("dirusage.1"), buffer)
}

fn main() -> io::Result<()> {
    if env::var_os("DIRUSAGE_GENERATE").is_some_and(|var| !var.is_empty()) {
        let completion_out_dir = PathBuf::from(COMPLETION_DIR);
        let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

        create_dir(&completion_out_dir)?;
        create_dir(&manpage_out_dir)?;

        generate_completions(&completion_out_dir)?;
        generate_manpage(&manpage_out_dir)?;
    }

    println!("cargo:rerun-if-env-changed=DIRUSAGE_GENERATE");

    Ok(())
}
