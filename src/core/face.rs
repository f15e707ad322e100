//! Die faces.
//!
//! A `Face` is always a value in 1..=6. Empty grid cells are represented
//! as `Option::<Face>::None`, so the empty sentinel can never collide with
//! a legal face.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A single six-sided die face (1-6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    /// Lowest face value.
    pub const MIN: u8 = 1;

    /// Highest face value.
    pub const MAX: u8 = 6;

    /// Number of faces on a die.
    pub const COUNT: usize = 6;

    /// Every face, in ascending order.
    pub const ALL: [Face; Self::COUNT] = [Face(1), Face(2), Face(3), Face(4), Face(5), Face(6)];

    /// Create a face, rejecting values outside 1..=6.
    ///
    /// ```
    /// use dice_clash::core::Face;
    ///
    /// assert_eq!(Face::new(4).unwrap().value(), 4);
    /// assert!(Face::new(0).is_err());
    /// assert!(Face::new(7).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, GameError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidFace(value))
        }
    }

    /// The pip count of this face.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index into `Face::ALL` (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for Face {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::new(value)
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_bounds() {
        for value in 1..=6 {
            assert_eq!(Face::new(value).unwrap().value(), value);
        }
        assert_eq!(Face::new(0), Err(GameError::InvalidFace(0)));
        assert_eq!(Face::new(7), Err(GameError::InvalidFace(7)));
    }

    #[test]
    fn test_face_all_matches_index() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(face.value() as usize, i + 1);
        }
    }

    #[test]
    fn test_face_serde_rejects_out_of_range() {
        let face: Face = serde_json::from_str("5").unwrap();
        assert_eq!(face, Face::ALL[4]);
        assert_eq!(serde_json::to_string(&face).unwrap(), "5");

        assert!(serde_json::from_str::<Face>("0").is_err());
        assert!(serde_json::from_str::<Face>("9").is_err());
    }
}
