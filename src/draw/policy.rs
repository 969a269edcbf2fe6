use serde::{Deserialize, Serialize};

use crate::foundation::error::SoftpixResult;

/// Rasterization switches threaded through line and circle drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderingPolicy {
    /// Wu lines and antialiased circle outlines instead of exact ones.
    pub antialiasing: bool,
    /// Whether antialiased lines paint their final endpoint.
    pub draw_endpoint: bool,
}

impl Default for RenderingPolicy {
    fn default() -> Self {
        Self {
            antialiasing: true,
            draw_endpoint: false,
        }
    }
}

impl RenderingPolicy {
    /// No antialiasing.
    pub fn exact() -> Self {
        Self {
            antialiasing: false,
            ..Self::default()
        }
    }

    pub fn with_antialiasing(self, antialiasing: bool) -> Self {
        Self {
            antialiasing,
            ..self
        }
    }

    pub fn with_draw_endpoint(self, draw_endpoint: bool) -> Self {
        Self {
            draw_endpoint,
            ..self
        }
    }

    pub fn from_json_str(s: &str) -> SoftpixResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
