//! Tunables for the card, optionally overridden by an inline JSON block:
//!
//! ```html
//! <script id="card-config" type="application/json">{ "min_distance": 120 }</script>
//! ```

use serde::{Deserialize, Serialize};

use crate::state::EvadeParams;
use crate::util::{clog, cwarn};

pub const CONFIG_ELEMENT_ID: &str = "card-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Inset of the safe region from the button area's edges (px).
    pub margin: f64,
    /// Minimum distance between trigger point and the new spot (px).
    pub min_distance: f64,
    pub max_attempts: u32,
    pub growth_step: f64,
    pub growth_max: f64,
    /// Yes-button scale once accepted.
    pub accepted_scale: f64,
    /// Gap between the no button and the right edge on initial placement (px).
    pub initial_right_inset: f64,
    pub reveal_layout_delay_ms: u32,
    pub sparkle_ms: u32,
    pub music_volume: f64,
    pub music_src: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            margin: 5.0,
            min_distance: 80.0,
            max_attempts: 50,
            growth_step: 0.15,
            growth_max: 2.0,
            accepted_scale: 2.2,
            initial_right_inset: 10.0,
            reveal_layout_delay_ms: 200,
            sparkle_ms: 1000,
            music_volume: 0.5,
            music_src: "assets/music.mp3".to_string(),
        }
    }
}

impl CardConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(raw).map(Self::sanitized)
    }

    /// Reads the inline config block; defaults when absent or malformed.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            clog("card config: using defaults");
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => {
                clog(&format!("card config: loaded {:?}", cfg));
                cfg
            }
            Err(e) => {
                cwarn(&format!("card config: invalid JSON ({}), using defaults", e));
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        let non_neg = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        self.margin = non_neg(self.margin);
        self.min_distance = non_neg(self.min_distance);
        self.growth_step = non_neg(self.growth_step);
        self.max_attempts = self.max_attempts.max(1);
        if !self.growth_max.is_finite() || self.growth_max < 1.0 {
            self.growth_max = 1.0;
        }
        if !self.accepted_scale.is_finite() || self.accepted_scale <= 0.0 {
            self.accepted_scale = Self::default().accepted_scale;
        }
        self.music_volume = if self.music_volume.is_finite() {
            self.music_volume.clamp(0.0, 1.0)
        } else {
            Self::default().music_volume
        };
        self
    }

    pub fn evade_params(&self) -> EvadeParams {
        EvadeParams {
            margin: self.margin,
            min_distance: self.min_distance,
            max_attempts: self.max_attempts,
        }
    }
}
