use chrono::{DateTime, Local};

use crate::constants::{COLUMN_WIDTH, SCALE_STEP, SUFFIXES, TIME_FORMAT, TIME_LABEL};

// 1500.0 -> "1.500K"; unscaled values get a trailing space so columns line up
pub fn format_rate(value: f64) -> String {
    let (steps, last) = SUFFIXES.split_at(SUFFIXES.len() - 1);
    let mut scaled = value;
    for suffix in steps {
        if scaled.abs() < SCALE_STEP {
            return format!("{:.3}{}", scaled, suffix);
        }
        scaled /= SCALE_STEP;
    }
    format!("{:.3}{}", scaled, last[0])
}

fn pad(cell: &str) -> String {
    format!("{:>width$}", cell, width = COLUMN_WIDTH)
}

pub fn format_header<'a, I>(labels: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let cells: Vec<String> = labels.into_iter().map(pad).collect();
    // "time" padded to the width of an HH:MM:SS stamp
    format!("{:<8} {}", TIME_LABEL, cells.join(" "))
}

pub fn format_row<I>(stamp: &DateTime<Local>, rates: I) -> String
where
    I: IntoIterator<Item = f64>,
{
    let cells: Vec<String> = rates
        .into_iter()
        .map(|rate| pad(&format_rate(rate)))
        .collect();
    format!("{} {}", stamp.format(TIME_FORMAT), cells.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unscaled_keeps_space_marker() {
        assert_eq!(format_rate(999.999), "999.999 ");
        assert_eq!(format_rate(0.0), "0.000 ");
    }

    #[test]
    fn scales_through_suffixes() {
        assert_eq!(format_rate(1000.0), "1.000K");
        assert_eq!(format_rate(2_500_000.0), "2.500M");
        assert_eq!(format_rate(7.25e9), "7.250G");
    }

    #[test]
    fn negative_rates_scale_by_magnitude() {
        assert_eq!(format_rate(-1500.0), "-1.500K");
        assert_eq!(format_rate(-12.5), "-12.500 ");
    }

    #[test]
    fn caps_at_largest_suffix() {
        let s = format_rate(1e27);
        assert!(s.ends_with('Y'), "{}", s);
        assert!(s.starts_with("1000.000"), "{}", s);

        let s = format_rate(1e30);
        assert!(s.ends_with('Y'), "{}", s);
        assert!(s.starts_with("1000000."), "{}", s);
    }

    #[test]
    fn header_layout() {
        let header = format_header(["lo:rx_bytes:8", "lo:tx_bytes"]);
        assert_eq!(
            header,
            format!("time     {:>20} {:>20}", "lo:rx_bytes:8", "lo:tx_bytes")
        );
    }

    #[test]
    fn row_layout() {
        let stamp = Local.with_ymd_and_hms(2024, 5, 1, 9, 3, 7).earliest().unwrap();
        let row = format_row(&stamp, [8000.0, 12.0]);
        assert_eq!(row, format!("09:03:07 {:>20} {:>20}", "8.000K", "12.000 "));
        assert_eq!(row.len(), 8 + 2 * (COLUMN_WIDTH + 1));
    }
}
