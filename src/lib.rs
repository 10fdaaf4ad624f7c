//! Sample `/sys/class/net/<iface>/statistics/<stat>` counters and print
//! their per-second rates.

pub mod app;
pub mod cli;
pub mod constants;
pub mod error;
pub mod network;
pub mod util;

pub use app::{Monitor, Outcome, RateSampler};
pub use error::{Error, Rejection, Result};
pub use network::{resolve_measures, MeasureSpec, Resolution};
