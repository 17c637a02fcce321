use serde::{Deserialize, Serialize};

/// Expected object polarity.
///
/// Polarity selects which raw byte encodes an OBJECT label; the comparison
/// direction of every rule stays fixed. Niblack additionally derives its
/// default `k` sign from the polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Bright objects on a dark background; OBJECT renders as 255.
    WhiteObjects,
    /// Dark objects on a bright background; OBJECT renders as 0.
    BlackObjects,
}

impl Polarity {
    #[inline]
    pub(crate) fn object(self) -> u8 {
        match self {
            Polarity::WhiteObjects => 0xff,
            Polarity::BlackObjects => 0x00,
        }
    }

    #[inline]
    pub(crate) fn background(self) -> u8 {
        match self {
            Polarity::WhiteObjects => 0x00,
            Polarity::BlackObjects => 0xff,
        }
    }
}

/// Binary label produced by a decision rule, before polarity encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Object,
    Background,
}

impl Label {
    #[inline]
    pub(crate) fn of(is_object: bool) -> Self {
        if is_object {
            Label::Object
        } else {
            Label::Background
        }
    }

    /// Raw output byte under the given polarity.
    #[inline]
    pub fn encode(self, polarity: Polarity) -> u8 {
        match self {
            Label::Object => polarity.object(),
            Label::Background => polarity.background(),
        }
    }
}

/// Parameters for one thresholding call.
///
/// `par1` and `par2` are method-specific; `None` selects the rule's
/// published default. An explicit `Some(0.0)` is honored as a real
/// override (legal for the offset-style parameters), unlike the legacy
/// convention where 0 doubled as the "unset" sentinel.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ThresholdParams {
    /// Disk radius in pixels. Must be positive.
    pub radius: u32,
    pub par1: Option<f64>,
    pub par2: Option<f64>,
    pub polarity: Polarity,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            radius: 15,
            par1: None,
            par2: None,
            polarity: Polarity::WhiteObjects,
        }
    }
}

impl ThresholdParams {
    /// Defaults with the given radius.
    pub fn new(radius: u32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Map a raw parameter record using the legacy convention where
    /// `0.0` means "use the published default".
    pub fn from_raw(radius: u32, par1: f64, par2: f64, white_objects: bool) -> Self {
        let unset = |v: f64| if v == 0.0 { None } else { Some(v) };
        Self {
            radius,
            par1: unset(par1),
            par2: unset(par2),
            polarity: if white_objects {
                Polarity::WhiteObjects
            } else {
                Polarity::BlackObjects
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_maps_zero_to_unset() {
        let p = ThresholdParams::from_raw(7, 0.0, 128.0, false);
        assert_eq!(p.radius, 7);
        assert_eq!(p.par1, None);
        assert_eq!(p.par2, Some(128.0));
        assert_eq!(p.polarity, Polarity::BlackObjects);
    }

    #[test]
    fn label_encoding_follows_polarity() {
        assert_eq!(Label::Object.encode(Polarity::WhiteObjects), 255);
        assert_eq!(Label::Object.encode(Polarity::BlackObjects), 0);
        assert_eq!(Label::Background.encode(Polarity::WhiteObjects), 0);
        assert_eq!(Label::Background.encode(Polarity::BlackObjects), 255);
    }

    #[test]
    fn params_round_trip_as_json() {
        let p = ThresholdParams::from_raw(15, 0.3, 0.0, true);
        let json = serde_json::to_string(&p).unwrap();
        let back: ThresholdParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.radius, p.radius);
        assert_eq!(back.par1, p.par1);
        assert_eq!(back.par2, p.par2);
        assert_eq!(back.polarity, p.polarity);
    }
}
