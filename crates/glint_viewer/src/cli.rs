use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::ViewerConfig;

/// Log levels selectable from the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "glint_viewer")]
#[command(about = "Interactive CPU ray tracer: type edit commands, get re-rendered frames")]
pub struct Args {
    /// Triangle list to load (nine numbers per line); the demo scene is used if omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Where every rendered frame is written (PNG)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Render one frame, save it and exit
    #[arg(long)]
    pub batch: bool,

    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub log_level: LogLevel,
}

impl Args {
    /// Let flags given on the command line win over the config file.
    pub fn apply_overrides(&self, config: &mut ViewerConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let args = Args::parse_from(["glint_viewer", "--width", "320", "-o", "frame.png", "--batch"]);
        let mut config = ViewerConfig::default();
        args.apply_overrides(&mut config);

        assert!(args.batch);
        assert_eq!(config.width, 320);
        assert_eq!(config.height, ViewerConfig::default().height);
        assert_eq!(config.output, PathBuf::from("frame.png"));
    }

    #[test]
    fn test_log_level() {
        let args = Args::parse_from(["glint_viewer", "--log-level", "debug"]);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }
}
