//! Semantic color roles understood by the stylesheet

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Base,
    Danger,
    Secondary,
}

impl ColorRole {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Danger => "danger",
            Self::Secondary => "secondary",
        }
    }

    /// Class applying the role as foreground (text and icon) color
    pub fn text_class(&self) -> String {
        format!("color-{}", self.name())
    }

    /// Class applying the role as background color
    pub fn background_class(&self) -> String {
        format!("bg-{}", self.name())
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
