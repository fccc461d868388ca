use std::{env, fs, path::Path, process::Command};

/// Returns a QEMU runner target given an architecture.
fn get_qemu_target(arch: &str) -> &str {
    match arch {
        "armv7" => "arm",
        "i686" => "i386",
        "powerpc" => "ppc",
        "powerpc64le" => "ppc64le",
        _ => arch,
    }
}

/// This is required since running binary tests via cross can cause be tricky!
/// We need to basically "magically" grab the correct runner in some cases,
/// which can be done by inspecting env variables that should only show up while
/// using cross.
fn cross_runner() -> Option<String> {
    let mut target_runner = None;
    let mut cross_runner = None;

    for (k, v) in env::vars() {
        if v.is_empty() {
            continue;
        }

        if k.starts_with("CARGO_TARGET_") && k.ends_with("_RUNNER") {
            target_runner = Some(v);
        } else if k == "CROSS_RUNNER" {
            cross_runner = Some(v);
        }
    }

    match cross_runner.as_deref() {
        Some("qemu-user") => target_runner.and_then(|runner| {
            runner
                .split_ascii_whitespace()
                .last()
                .map(|arch| format!("qemu-{}", get_qemu_target(arch)))
        }),
        Some(_) => None,
        None => target_runner,
    }
}

const DIRUSAGE_EXE_PATH: &str = env!("CARGO_BIN_EXE_dirusage");

/// Returns the [`Command`] of a binary invocation of dirusage.
pub fn dirusage_command(args: &[&str]) -> Command {
    let mut cmd = match cross_runner() {
        None => Command::new(DIRUSAGE_EXE_PATH),
        Some(runner) => {
            let mut cmd = Command::new(runner);
            cmd.arg(DIRUSAGE_EXE_PATH);
            cmd
        }
    };

    cmd.args(args);
    cmd
}

/// Writes a file of exactly `size` bytes, creating parent directories.
pub fn write_file(path: &Path, size: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'z'; size]).unwrap();
}
