use std::{
    io,
    path::Path,
    sync::mpsc,
};

use anyhow::Context;
use clap::{CommandFactory, Parser};

use net_rate::cli::Args;
use net_rate::network::{list_interfaces, resolve_measures};
use net_rate::{Monitor, Outcome};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let (stop_tx, stop_rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })
    .context("failed to install Ctrl-C handler")?;

    let resolution = resolve_measures(&args.sysfs_root, &args.measures);
    for rejection in &resolution.rejected {
        eprintln!("{}", rejection);
    }
    if resolution.is_empty() {
        // Nothing to watch is not a failure
        return print_usage(&args.sysfs_root);
    }

    let mut monitor = Monitor::new(resolution, args.interval, args.count);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if monitor.run(&mut out, &stop_rx)? == Outcome::Interrupted {
        log::debug!("interrupted");
    }
    Ok(())
}

fn print_usage(sysfs_root: &Path) -> anyhow::Result<()> {
    println!();
    Args::command().print_help()?;

    let interfaces = list_interfaces(sysfs_root);
    if !interfaces.is_empty() {
        println!(
            "\nInterfaces under {}: {}",
            sysfs_root.display(),
            interfaces.join(", ")
        );
    }
    Ok(())
}
