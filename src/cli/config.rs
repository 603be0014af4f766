//! Configuration for the console game

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

/// Settings for an interactive session.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```
/// use noughts::cli::config::GameConfig;
///
/// let config: GameConfig = serde_json::from_str(r#"{ "human_symbol": "H" }"#).unwrap();
/// assert_eq!(config.human_symbol, 'H');
/// assert_eq!(config.computer_symbol, 'O');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Character drawn for the human's marks
    pub human_symbol: char,

    /// Character drawn for the computer's marks
    pub computer_symbol: char,

    /// Print every candidate's minimax score before the computer moves
    pub show_scores: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_symbol: 'X',
            computer_symbol: 'O',
            show_scores: false,
        }
    }
}

impl GameConfig {
    /// Load and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or fails
    /// [`GameConfig::validate`].
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the symbols can be told apart on a rendered board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if either symbol is
    /// whitespace or both symbols are the same.
    pub fn validate(&self) -> crate::Result<()> {
        if self.human_symbol.is_whitespace() || self.computer_symbol.is_whitespace() {
            return Err(crate::Error::InvalidConfiguration {
                message: "board symbols must not be whitespace".to_string(),
            });
        }
        if self.human_symbol == self.computer_symbol {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "human and computer symbols must differ (both are '{}')",
                    self.human_symbol
                ),
            });
        }
        Ok(())
    }
}
