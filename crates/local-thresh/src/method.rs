use std::fmt;
use std::str::FromStr;

use local_thresh_core::ThresholdError;
use serde::{Deserialize, Serialize};

/// The nine published local thresholding rules.
///
/// A closed enumeration (rather than string dispatch) lets the
/// orchestration compute each required statistics layer exactly once per
/// call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Bernsen (1986): midgray decision with a low-contrast fallback.
    Bernsen,
    /// Landini's contrast toggle: nearest of local min/max wins.
    Contrast,
    /// Pixel against local mean minus an offset.
    Mean,
    /// Pixel against local median minus an offset.
    Median,
    /// Pixel against local midgray `(min+max)/2` minus an offset.
    MidGrey,
    /// Niblack (1986): mean plus `k`·stddev minus an offset.
    Niblack,
    /// Otsu between-class-variance split of the window's own histogram.
    Otsu,
    /// Phansalkar et al. (2011): Sauvola variant for low-contrast stains.
    Phansalkar,
    /// Sauvola & Pietikäinen (2000): document binarization rule.
    Sauvola,
}

impl Method {
    /// All nine rules, in presentation order.
    pub const ALL: [Method; 9] = [
        Method::Bernsen,
        Method::Contrast,
        Method::Mean,
        Method::Median,
        Method::MidGrey,
        Method::Niblack,
        Method::Otsu,
        Method::Phansalkar,
        Method::Sauvola,
    ];

    /// Published method name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Method::Bernsen => "Bernsen",
            Method::Contrast => "Contrast",
            Method::Mean => "Mean",
            Method::Median => "Median",
            Method::MidGrey => "MidGrey",
            Method::Niblack => "Niblack",
            Method::Otsu => "Otsu",
            Method::Phansalkar => "Phansalkar",
            Method::Sauvola => "Sauvola",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .find(|m| m.name() == s)
            .copied()
            .ok_or_else(|| ThresholdError::UnsupportedMethod(s.to_owned()))
    }
}
