pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/net";
pub const STATISTICS_DIR: &str = "statistics";

pub const COLUMN_WIDTH: usize = 20;
pub const TIME_LABEL: &str = "time";
pub const TIME_FORMAT: &str = "%H:%M:%S";

// Unscaled first, capped at Y
pub const SUFFIXES: [char; 9] = [' ', 'K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y'];
pub const SCALE_STEP: f64 = 1000.0;
