//! Die face values and their fixed pip geometry.
//!
//! [`FaceValue`] is a validated 1..=6 integer carrying the fixed
//! luminance quantization law; [`FaceValue::pips`] exposes the classic
//! pip arrangement for each face as normalized unit-square coordinates.

use crate::error::GridError;

/// A pip center on the unit die face, both coordinates in `[0, 1]`.
///
/// Renderers scale these by the cell size in pixels to place pips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pip {
    pub x: f32,
    pub y: f32,
}

impl Pip {
    const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// Classic six-face convention. Anchors sit at 0.3 / 0.5 / 0.7 so pips
// keep clear of the face border at small cell sizes.
const FACE_ONE: [Pip; 1] = [Pip::new(0.5, 0.5)];
const FACE_TWO: [Pip; 2] = [Pip::new(0.3, 0.3), Pip::new(0.7, 0.7)];
const FACE_THREE: [Pip; 3] = [Pip::new(0.3, 0.3), Pip::new(0.5, 0.5), Pip::new(0.7, 0.7)];
const FACE_FOUR: [Pip; 4] = [
    Pip::new(0.3, 0.3),
    Pip::new(0.3, 0.7),
    Pip::new(0.7, 0.3),
    Pip::new(0.7, 0.7),
];
const FACE_FIVE: [Pip; 5] = [
    Pip::new(0.3, 0.3),
    Pip::new(0.3, 0.7),
    Pip::new(0.5, 0.5),
    Pip::new(0.7, 0.3),
    Pip::new(0.7, 0.7),
];
const FACE_SIX: [Pip; 6] = [
    Pip::new(0.3, 0.3),
    Pip::new(0.3, 0.5),
    Pip::new(0.3, 0.7),
    Pip::new(0.7, 0.3),
    Pip::new(0.7, 0.5),
    Pip::new(0.7, 0.7),
];

/// A die face value in `1..=6`.
///
/// The range invariant holds for every constructed value, so renderers
/// and counters can index by face without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceValue(u8);

impl FaceValue {
    /// The lightest face (one pip).
    pub const MIN: FaceValue = FaceValue(1);

    /// The darkest face (six pips).
    pub const MAX: FaceValue = FaceValue(6);

    /// All six faces in ascending pip order.
    pub const ALL: [FaceValue; 6] = [
        FaceValue(1),
        FaceValue(2),
        FaceValue(3),
        FaceValue(4),
        FaceValue(5),
        FaceValue(6),
    ];

    /// Validate an untrusted integer (deserialization path).
    ///
    /// `row` and `col` locate the value in its source grid for the
    /// error message.
    pub fn new(value: u8, row: usize, col: usize) -> Result<Self, GridError> {
        if (1..=6).contains(&value) {
            Ok(FaceValue(value))
        } else {
            Err(GridError::FaceOutOfRange { row, col, value })
        }
    }

    /// Map a luminance sample to a face value.
    ///
    /// The law is `6 - floor(l * 6 / 256)`, clamped to `1..=6` -- the
    /// exact integer form of `6 - floor(l / (256/6))`. Luminance 0
    /// (black) yields six pips, 255 (white) yields one. The divisor and
    /// the floor-then-clamp order are load-bearing: saved projects and
    /// printed build sheets depend on these bucket boundaries, so the
    /// law must not be re-tuned.
    pub fn from_luminance(luminance: u8) -> Self {
        let bucket = (u16::from(luminance) * 6 / 256) as u8;
        FaceValue((6 - bucket).clamp(1, 6))
    }

    /// The face value as a plain integer in `1..=6`.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The fixed pip layout for this face.
    ///
    /// Returns between one and six pip centers in unit-square
    /// coordinates.
    pub fn pips(self) -> &'static [Pip] {
        match self.0 {
            1 => &FACE_ONE,
            2 => &FACE_TWO,
            3 => &FACE_THREE,
            4 => &FACE_FOUR,
            5 => &FACE_FIVE,
            _ => &FACE_SIX,
        }
    }
}

impl std::fmt::Display for FaceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_range() {
        for v in 1..=6 {
            let face = FaceValue::new(v, 0, 0).expect("1..=6 should be accepted");
            assert_eq!(face.get(), v);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        for v in [0u8, 7, 42, 255] {
            let err = FaceValue::new(v, 3, 5).unwrap_err();
            assert_eq!(
                err,
                GridError::FaceOutOfRange {
                    row: 3,
                    col: 5,
                    value: v
                }
            );
        }
    }

    #[test]
    fn test_from_luminance_endpoints() {
        assert_eq!(FaceValue::from_luminance(0).get(), 6, "black maps to six pips");
        assert_eq!(FaceValue::from_luminance(255).get(), 1, "white maps to one pip");
    }

    #[test]
    fn test_from_luminance_midpoint() {
        // floor(128 * 6 / 256) = 3, so 6 - 3 = 3
        assert_eq!(FaceValue::from_luminance(128).get(), 3);
    }

    #[test]
    fn test_from_luminance_bucket_boundaries() {
        // Buckets are [0,43), [43,86), [86,128), [128,171), [171,214), [214,256)
        assert_eq!(FaceValue::from_luminance(42).get(), 6);
        assert_eq!(FaceValue::from_luminance(43).get(), 5);
        assert_eq!(FaceValue::from_luminance(85).get(), 5);
        assert_eq!(FaceValue::from_luminance(86).get(), 4);
        assert_eq!(FaceValue::from_luminance(127).get(), 4);
        assert_eq!(FaceValue::from_luminance(170).get(), 3);
        assert_eq!(FaceValue::from_luminance(171).get(), 2);
        assert_eq!(FaceValue::from_luminance(213).get(), 2);
        assert_eq!(FaceValue::from_luminance(214).get(), 1);
    }

    #[test]
    fn test_pips_count_matches_face() {
        for face in FaceValue::ALL {
            assert_eq!(
                face.pips().len(),
                face.get() as usize,
                "face {} should expose {} pips",
                face,
                face.get()
            );
        }
    }

    #[test]
    fn test_pips_within_unit_square() {
        for face in FaceValue::ALL {
            for pip in face.pips() {
                assert!((0.0..=1.0).contains(&pip.x), "pip x {} out of range", pip.x);
                assert!((0.0..=1.0).contains(&pip.y), "pip y {} out of range", pip.y);
            }
        }
    }

    #[test]
    fn test_pip_layout_convention() {
        // Spot-check the classic arrangement: one is centered, six is
        // two columns of three.
        assert_eq!(FaceValue::MIN.pips(), [Pip::new(0.5, 0.5)].as_slice());
        let six = FaceValue::MAX.pips();
        let left = six.iter().filter(|p| (p.x - 0.3).abs() < f32::EPSILON).count();
        let right = six.iter().filter(|p| (p.x - 0.7).abs() < f32::EPSILON).count();
        assert_eq!((left, right), (3, 3));
    }
}
