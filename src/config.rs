//! Command-line configuration

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Stack rows shown when `--rows` is not given
pub const DEFAULT_DISPLAY_ROWS: usize = 4;

/// Upper bound on displayed stack rows
pub const MAX_DISPLAY_ROWS: usize = 256;

/// Significant digits of the stack display
pub const DISPLAY_PRECISION: usize = 6;

/// Keypad button size
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl ButtonSize {
    /// Button width in terminal columns
    pub fn width(self) -> u16 {
        match self {
            ButtonSize::Small => 5,
            ButtonSize::Normal => 8,
            ButtonSize::Large => 9,
        }
    }

    /// Button height in terminal rows
    pub fn height(self) -> u16 {
        match self {
            ButtonSize::Small | ButtonSize::Normal => 1,
            ButtonSize::Large => 3,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rpncalc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "An RPN calculator for the terminal", long_about = None)]
pub struct Args {
    /// Number of stack rows to display
    #[arg(short, long, default_value_t = DEFAULT_DISPLAY_ROWS)]
    pub rows: usize,

    /// Keypad button size
    #[arg(long, value_enum, default_value_t = ButtonSize::Normal)]
    pub size: ButtonSize,

    /// Hide the keypad
    #[arg(long)]
    pub no_keypad: bool,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Settings used by the front end
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub display_rows: usize,
    pub button_size: ButtonSize,
    pub show_keypad: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display_rows: DEFAULT_DISPLAY_ROWS,
            button_size: ButtonSize::Normal,
            show_keypad: true,
            log_file: None,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            display_rows: args.rows.clamp(1, MAX_DISPLAY_ROWS),
            button_size: args.size,
            show_keypad: !args.no_keypad,
            log_file: args.log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["rpncalc"]);
        assert_eq!(Config::from(args), Config::default());
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from(["rpncalc", "--rows", "8", "--size", "large", "--no-keypad"]);
        let config = Config::from(args);
        assert_eq!(config.display_rows, 8);
        assert_eq!(config.button_size, ButtonSize::Large);
        assert!(!config.show_keypad);
    }

    #[test]
    fn test_zero_rows_clamped() {
        let config = Config::from(Args::parse_from(["rpncalc", "-r", "0"]));
        assert_eq!(config.display_rows, 1);
    }

    #[test]
    fn test_huge_rows_clamped() {
        let config = Config::from(Args::parse_from(["rpncalc", "--rows", "65535"]));
        assert_eq!(config.display_rows, MAX_DISPLAY_ROWS);
    }
}
