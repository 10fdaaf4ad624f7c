use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use crate::constants::STATISTICS_DIR;
use crate::error::Rejection;

#[derive(Debug, Clone, PartialEq)]
pub struct MeasureSpec {
    // As typed on the command line
    pub label: String,
    pub path: PathBuf,
    // 0 means no scaling
    pub multiplier: f64,
}

impl MeasureSpec {
    pub fn scale(&self, rate: f64) -> f64 {
        if self.multiplier > 0.0 {
            rate * self.multiplier
        } else {
            rate
        }
    }
}

#[derive(Debug, Default)]
pub struct Resolution {
    pub measures: Vec<MeasureSpec>,
    pub rejected: Vec<Rejection>,
}

impl Resolution {
    // Several measures may share one counter file
    pub fn paths(&self) -> Vec<PathBuf> {
        self.measures
            .iter()
            .map(|m| m.path.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }
}

/// `<root>/<iface>/statistics/<stat>`
pub fn counter_path(root: &Path, iface: &str, stat: &str) -> PathBuf {
    root.join(iface).join(STATISTICS_DIR).join(stat)
}

pub fn resolve_measures<S: AsRef<str>>(root: &Path, raw: &[S]) -> Resolution {
    let mut resolution = Resolution::default();
    for spec in raw {
        match resolve_one(root, spec.as_ref()) {
            Ok(measure) => {
                log::debug!(
                    "measure '{}' -> {} (x{})",
                    measure.label,
                    measure.path.display(),
                    measure.multiplier
                );
                resolution.measures.push(measure);
            }
            Err(rejection) => resolution.rejected.push(rejection),
        }
    }
    resolution
}

fn resolve_one(root: &Path, spec: &str) -> Result<MeasureSpec, Rejection> {
    // Missing trailing fields default to empty; anything past the third is ignored
    let mut fields = spec.split(':');
    let iface = fields.next().unwrap_or("");
    let stat = fields.next().unwrap_or("");
    let mul_field = fields.next().unwrap_or("");

    let multiplier = parse_multiplier(mul_field).ok_or_else(|| Rejection::BadMultiplier {
        spec: spec.to_string(),
        value: mul_field.to_string(),
    })?;

    let path = counter_path(root, iface, stat);
    if !path.is_file() {
        return Err(Rejection::MissingFile {
            spec: spec.to_string(),
            path,
        });
    }

    Ok(MeasureSpec {
        label: spec.to_string(),
        path,
        multiplier,
    })
}

fn parse_multiplier(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() {
        return Some(0.0);
    }
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => None,
    }
}

pub fn list_interfaces(root: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().join(STATISTICS_DIR).is_dir())
        .filter_map(|e| e.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}
