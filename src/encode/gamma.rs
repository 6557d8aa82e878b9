use crate::foundation::error::{ZorroError, ZorroResult};

/// Exponent used when nothing else is configured.
pub const DEFAULT_GAMMA_EXPONENT: f64 = 0.45;

/// Power-law gamma curve over 8-bit values: `round(255 * (v / 255)^exponent)`.
///
/// The mask half is pre-compensated with this curve so that the luminance a renderer reads back
/// (after its own display gamma) matches the source alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gamma {
    exponent: f64,
}

impl Default for Gamma {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_GAMMA_EXPONENT,
        }
    }
}

impl Gamma {
    /// Identity curve (exponent 1.0); reproduces the ungamma'd encodings.
    pub const IDENTITY: Self = Self { exponent: 1.0 };

    /// Create a curve with a finite, positive exponent.
    pub fn new(exponent: f64) -> ZorroResult<Self> {
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ZorroError::validation(format!(
                "gamma exponent must be finite and > 0, got {exponent}"
            )));
        }
        Ok(Self { exponent })
    }

    /// Curve exponent.
    pub fn exponent(self) -> f64 {
        self.exponent
    }

    /// Return `true` for the identity curve.
    pub fn is_identity(self) -> bool {
        self.exponent == 1.0
    }

    /// Apply the curve.
    pub fn encode(self, v: u8) -> u8 {
        apply_power(v, self.exponent)
    }

    /// Apply the inverse curve.
    pub fn decode(self, v: u8) -> u8 {
        apply_power(v, 1.0 / self.exponent)
    }

    /// Inverse curve without the final quantization, on the 0..=1 scale.
    pub fn decode_unit(self, v: u8) -> f64 {
        (f64::from(v) / 255.0).powf(1.0 / self.exponent)
    }

    /// Lookup table for [`Gamma::encode`].
    pub fn lut(self) -> [u8; 256] {
        let mut table = [0u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = self.encode(i as u8);
        }
        table
    }

    /// Lookup table for [`Gamma::decode`].
    pub fn inverse_lut(self) -> [u8; 256] {
        let mut table = [0u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = self.decode(i as u8);
        }
        table
    }
}

fn apply_power(v: u8, exponent: f64) -> u8 {
    let unit = f64::from(v) / 255.0;
    (255.0 * unit.powf(exponent)).round().clamp(0.0, 255.0) as u8
}

/// Which halves of the composite raster receive the gamma curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GammaTarget {
    /// Neither half.
    None,
    /// Color half only.
    Color,
    /// Mask half only.
    Mask,
    /// Both halves.
    #[default]
    Both,
}

impl GammaTarget {
    /// Return `true` when the color half is gamma-encoded.
    pub fn color(self) -> bool {
        matches!(self, Self::Color | Self::Both)
    }

    /// Return `true` when the mask half is gamma-encoded.
    pub fn mask(self) -> bool {
        matches!(self, Self::Mask | Self::Both)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gamma.rs"]
mod tests;
