use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "workout-planner", version, about = "Plan your weekly workout schedule")]
pub struct Config {
    /// Directory the schedule is saved in.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    #[arg(long, default_value_t = 900.0)]
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["workout-planner"]);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.width, 1280.0);
        assert_eq!(config.height, 900.0);
    }

    #[test]
    fn overrides() {
        let config = Config::parse_from([
            "workout-planner",
            "--data-dir",
            "/tmp/planner",
            "--log-level",
            "debug",
            "--width",
            "800",
        ]);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/planner"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.width, 800.0);
    }
}
