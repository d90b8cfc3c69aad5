#![forbid(unsafe_code)]

//! Board editor configuration.
//!
//! With the `serde` feature, [`EditorConfig`] can be loaded from JSON. Missing
//! fields take their defaults and the result is validated before use.

use crate::board::MAX_ENCODED_SIZE;
use crate::error::{Error, Result};

/// Settings for a [`BoardEditor`](crate::BoardEditor).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Board sizes offered to the user, smallest first.
    pub sizes: Vec<usize>,
    /// Size of the board a new editor starts with.
    pub default_size: usize,
    /// Maximum undo snapshots kept (`None` = unbounded).
    pub history_limit: Option<usize>,
    /// Start in rectangle-marking mode instead of freehand.
    pub area_mode: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            sizes: vec![5, 7, 11, 19],
            default_size: 11,
            history_limit: None,
            area_mode: false,
        }
    }
}

impl EditorConfig {
    /// Check that the sizes are usable and include the default size.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidConfig("no board sizes configured".into()));
        }
        if let Some(&bad) = self
            .sizes
            .iter()
            .find(|&&size| size == 0 || size > MAX_ENCODED_SIZE)
        {
            return Err(Error::InvalidConfig(format!(
                "board size {bad} outside 1..={MAX_ENCODED_SIZE}"
            )));
        }
        if !self.sizes.contains(&self.default_size) {
            return Err(Error::InvalidConfig(format!(
                "default size {} is not one of {:?}",
                self.default_size, self.sizes
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}
