use serde::{Deserialize, Serialize};

/// Letter case applied to suggestions when they are displayed or committed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextCase {
    #[default]
    Lower,
    Upper,
}
