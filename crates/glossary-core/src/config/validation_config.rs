use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::ELLIPSIS;

/// Canonical schema limits, measured in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_acronym_len: usize,
    pub max_name_len: usize,
    pub max_description_len: usize,
}

impl ValidationConfig {
    /// Length a too-long description is cut to before the ellipsis is appended.
    pub fn truncated_description_len(&self) -> usize {
        self.max_description_len.saturating_sub(ELLIPSIS.len())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_acronym_len: defaults::DEFAULT_MAX_ACRONYM_LEN,
            max_name_len: defaults::DEFAULT_MAX_NAME_LEN,
            max_description_len: defaults::DEFAULT_MAX_DESCRIPTION_LEN,
        }
    }
}
