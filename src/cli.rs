use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::constants::DEFAULT_SYSFS_ROOT;

/// Print per-second rates of kernel network interface counters.
#[derive(Parser, Debug)]
#[command(name = "net_rate", version)]
pub struct Args {
    /// Measure interval in seconds
    #[arg(short, long, default_value = "1", value_parser = parse_interval)]
    pub interval: Duration,

    /// Exit after this many printed rows; 0 runs until interrupted
    #[arg(short, long, default_value_t = 0)]
    pub count: u64,

    /// Directory holding one entry per network interface
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SYSFS_ROOT)]
    pub sysfs_root: PathBuf,

    /// Measures in 'iface:stat:mul' form, e.g. eth0:rx_bytes:8
    #[arg(required = true, value_name = "MEASURES")]
    pub measures: Vec<String>,
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", s))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("interval must be a finite, non-negative number of seconds, got '{}'", s))
}
