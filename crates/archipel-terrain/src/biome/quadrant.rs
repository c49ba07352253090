//! Compass quadrants around an island center.
//!
//! North is negative Z and east is positive X. A zero component counts as the
//! negative side, so points on the axes fall into the north or west half.

/// One of the four directional zones around an island center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `dx > 0`, `dz <= 0`.
    NorthEast,
    /// `dx <= 0`, `dz <= 0`.
    NorthWest,
    /// `dx > 0`, `dz > 0`.
    SouthEast,
    /// `dx <= 0`, `dz > 0`.
    SouthWest,
}

impl Quadrant {
    /// All quadrants, in table order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// Classifies the offset `(dx, dz)` of a point from its island center.
    pub fn classify(dx: i64, dz: i64) -> Self {
        match (dx > 0, dz > 0) {
            (false, false) => Quadrant::NorthWest,
            (true, false) => Quadrant::NorthEast,
            (false, true) => Quadrant::SouthWest,
            (true, true) => Quadrant::SouthEast,
        }
    }

    /// The quadrant reached by reflecting through the center.
    pub fn opposite(self) -> Self {
        match self {
            Quadrant::NorthEast => Quadrant::SouthWest,
            Quadrant::NorthWest => Quadrant::SouthEast,
            Quadrant::SouthEast => Quadrant::NorthWest,
            Quadrant::SouthWest => Quadrant::NorthEast,
        }
    }

    /// Dense index into per-quadrant arrays; matches the order of [`Quadrant::ALL`].
    pub fn index(self) -> usize {
        match self {
            Quadrant::NorthEast => 0,
            Quadrant::NorthWest => 1,
            Quadrant::SouthEast => 2,
            Quadrant::SouthWest => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_quadrants() {
        assert_eq!(Quadrant::classify(5, -5), Quadrant::NorthEast);
        assert_eq!(Quadrant::classify(-5, -5), Quadrant::NorthWest);
        assert_eq!(Quadrant::classify(5, 5), Quadrant::SouthEast);
        assert_eq!(Quadrant::classify(-5, 5), Quadrant::SouthWest);
    }

    #[test]
    fn test_zero_counts_as_negative_side() {
        assert_eq!(Quadrant::classify(0, 0), Quadrant::NorthWest);
        assert_eq!(Quadrant::classify(0, 3), Quadrant::SouthWest);
        assert_eq!(Quadrant::classify(3, 0), Quadrant::NorthEast);
        assert_eq!(Quadrant::classify(-3, 0), Quadrant::NorthWest);
    }

    #[test]
    fn test_point_reflection_swaps_opposites() {
        for dx in -20_i64..=20 {
            for dz in -20_i64..=20 {
                if dx == 0 || dz == 0 {
                    continue;
                }
                let q = Quadrant::classify(dx, dz);
                assert_eq!(
                    Quadrant::classify(-dx, -dz),
                    q.opposite(),
                    "reflection of ({dx}, {dz}) from {q:?}"
                );
            }
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, q) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(q.index(), i);
            assert_eq!(q.opposite().opposite(), *q);
        }
    }
}
