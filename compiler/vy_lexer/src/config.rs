//! Lexer configuration.

use thiserror::Error;

/// Invalid lexer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("indent unit must be at least 1")]
    ZeroIndentUnit,
    #[error("tab size must be at least 1")]
    ZeroTabSize,
    #[error("invalid value '{value}' for {flag}: expected a positive integer")]
    InvalidNumber { flag: &'static str, value: String },
}

/// Width settings shared by scanning and indentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Columns per indentation step.
    pub indent_unit: u32,
    /// Columns a tab advances to (next multiple of).
    pub tab_size: u32,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            indent_unit: 4,
            tab_size: 4,
        }
    }
}

impl LexerConfig {
    const INDENT_UNIT_FLAG: &'static str = "--indent-unit";
    const TAB_SIZE_FLAG: &'static str = "--tab-size";

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_unit == 0 {
            return Err(ConfigError::ZeroIndentUnit);
        }
        if self.tab_size == 0 {
            return Err(ConfigError::ZeroTabSize);
        }
        Ok(())
    }

    /// Apply a `--indent-unit=N` or `--tab-size=N` argument.
    ///
    /// Returns `Ok(false)` if `arg` is not a configuration flag.
    pub fn apply_flag(&mut self, arg: &str) -> Result<bool, ConfigError> {
        let Some((flag, value)) = arg.split_once('=') else {
            return Ok(false);
        };
        let (flag, slot) = match flag {
            Self::INDENT_UNIT_FLAG => (Self::INDENT_UNIT_FLAG, &mut self.indent_unit),
            Self::TAB_SIZE_FLAG => (Self::TAB_SIZE_FLAG, &mut self.tab_size),
            _ => return Ok(false),
        };
        *slot = parse_width(flag, value)?;
        Ok(true)
    }
}

fn parse_width(flag: &'static str, value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            flag,
            value: value.to_string(),
        }),
    }
}
