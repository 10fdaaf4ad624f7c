use std::{
    collections::HashMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::mpsc::{Receiver, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};
use chrono::{DateTime, Local};

use crate::error::{Error, Result};
use crate::network::{MeasureSpec, Resolution};
use crate::util::{format_header, format_row};

pub fn read_counter(path: &Path) -> Result<f64> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    content.trim().parse().map_err(|_| Error::Parse {
        path: path.to_path_buf(),
        content,
    })
}

// A path has no rate until its second read; rate_of reports 0 until then
#[derive(Debug, Default)]
pub struct RateSampler {
    last: HashMap<PathBuf, (Instant, f64)>,
    rates: HashMap<PathBuf, f64>,
}

impl RateSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, path: &Path) -> Result<()> {
        let value = read_counter(path)?;
        let at = Instant::now();
        log::trace!("{} = {}", path.display(), value);
        self.record(path, value, at);
        Ok(())
    }

    // Negative rates (counter reset or wrap) are kept as-is
    pub fn record(&mut self, path: &Path, value: f64, at: Instant) {
        let Some(prev) = self.last.get_mut(path) else {
            self.last.insert(path.to_path_buf(), (at, value));
            return;
        };

        let elapsed = at.saturating_duration_since(prev.0).as_secs_f64();
        if elapsed == 0.0 {
            log::warn!(
                "two samples of {} at the same instant, keeping the earlier one",
                path.display()
            );
            return;
        }

        let rate = (value - prev.1) / elapsed;
        *prev = (at, value);
        self.rates.insert(path.to_path_buf(), rate);
    }

    pub fn rate_of(&self, path: &Path) -> f64 {
        self.rates.get(path).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Interrupted,
}

/// The polling loop: header, one silent priming round, then one row per interval.
pub struct Monitor {
    measures: Vec<MeasureSpec>,
    paths: Vec<PathBuf>,
    sampler: RateSampler,
    interval: Duration,
    count: u64,
}

impl Monitor {
    pub fn new(resolution: Resolution, interval: Duration, count: u64) -> Self {
        let paths = resolution.paths();
        log::debug!("sampling {} distinct counter file(s)", paths.len());
        Self {
            measures: resolution.measures,
            paths,
            sampler: RateSampler::new(),
            interval,
            count,
        }
    }

    pub fn header(&self) -> String {
        format_header(self.measures.iter().map(|m| m.label.as_str()))
    }

    pub fn poll(&mut self) -> Result<()> {
        for path in &self.paths {
            self.sampler.sample(path)?;
        }
        Ok(())
    }

    pub fn rates(&self) -> Vec<f64> {
        self.measures
            .iter()
            .map(|m| m.scale(self.sampler.rate_of(&m.path)))
            .collect()
    }

    pub fn row(&self, stamp: &DateTime<Local>) -> String {
        format_row(stamp, self.rates())
    }

    pub fn run<W: Write>(&mut self, out: &mut W, stop: &Receiver<()>) -> Result<Outcome> {
        writeln!(out, "{}", self.header())?;
        out.flush()?;

        self.poll()?;

        let mut printed: u64 = 0;
        loop {
            if self.wait(stop) {
                writeln!(out)?;
                out.flush()?;
                return Ok(Outcome::Interrupted);
            }
            self.poll()?;
            writeln!(out, "{}", self.row(&Local::now()))?;
            out.flush()?;

            printed += 1;
            if self.count > 0 && printed >= self.count {
                return Ok(Outcome::Completed);
            }
        }
    }

    /// Sleep for one interval; true if a stop signal cut it short.
    fn wait(&self, stop: &Receiver<()>) -> bool {
        match stop.recv_timeout(self.interval) {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                // Nobody can signal anymore, plain sleep
                thread::sleep(self.interval);
                false
            }
        }
    }
}
