use crate::foundation::error::{MorphError, MorphResult};

/// Weighting constants of the feature-line field.
///
/// A line's influence on a pixel is `(length^size_strength / (smoothness + dist))^line_strength`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WarpParams {
    /// `a`: keeps the weight finite as the distance to a line approaches zero.
    pub smoothness: f64,
    /// `b`: how quickly a line's influence falls off with distance.
    pub line_strength: f64,
    /// `p`: how much longer lines dominate shorter ones.
    pub size_strength: f64,
}

impl Default for WarpParams {
    fn default() -> Self {
        Self {
            smoothness: 0.5,
            line_strength: 1.25,
            size_strength: 0.25,
        }
    }
}

impl WarpParams {
    /// Reject constants that would make weights non-finite or negative.
    pub fn validate(&self) -> MorphResult<()> {
        if !self.smoothness.is_finite() || self.smoothness <= 0.0 {
            return Err(MorphError::validation(
                "warp smoothness must be finite and > 0",
            ));
        }
        if !self.line_strength.is_finite() || self.line_strength < 0.0 {
            return Err(MorphError::validation(
                "warp line_strength must be finite and >= 0",
            ));
        }
        if !self.size_strength.is_finite() || self.size_strength < 0.0 {
            return Err(MorphError::validation(
                "warp size_strength must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Influence of a line of `length` on a pixel at distance `dist` from it.
    #[inline]
    pub fn weight(&self, length: f64, dist: f64) -> f64 {
        self.weight_with_term(self.length_term(length), dist)
    }

    /// `length^size_strength`, constant per line for a whole frame.
    #[inline]
    pub fn length_term(&self, length: f64) -> f64 {
        length.powf(self.size_strength)
    }

    /// [`WarpParams::weight`] with the line's [`WarpParams::length_term`] already applied.
    #[inline]
    pub fn weight_with_term(&self, length_term: f64, dist: f64) -> f64 {
        (length_term / (self.smoothness + dist)).powf(self.line_strength)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/weight.rs"]
mod tests;
