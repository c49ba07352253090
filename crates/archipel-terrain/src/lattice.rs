//! Island lattice addressing.
//!
//! Island centers sit on a square grid with pitch `2 * distance`, shifted by a
//! constant offset. Any block coordinate belongs to the center it rounds to.

use archipel_config::{IslandConfig, RoundingRule};

/// Errors raised while building a lattice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LatticeError {
    /// The island distance must be strictly positive.
    #[error("island distance must be positive, got {0}")]
    NonPositiveSpacing(i32),
}

/// Block coordinates of an island center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IslandCenter {
    /// Block X coordinate.
    pub x: i64,
    /// Block Z coordinate.
    pub z: i64,
}

impl IslandCenter {
    /// Creates a center at `(x, z)`.
    pub fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }
}

/// The regular grid of island centers.
///
/// Immutable after construction; `Copy` so every resolver and worker can hold
/// its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IslandLattice {
    distance: i32,
    offset_x: i32,
    offset_z: i32,
    rounding: RoundingRule,
}

impl IslandLattice {
    /// Creates a lattice with island radius `distance` and the given origin shift.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::NonPositiveSpacing`] if `distance <= 0`.
    pub fn new(
        distance: i32,
        offset_x: i32,
        offset_z: i32,
        rounding: RoundingRule,
    ) -> Result<Self, LatticeError> {
        if distance <= 0 {
            return Err(LatticeError::NonPositiveSpacing(distance));
        }
        Ok(Self {
            distance,
            offset_x,
            offset_z,
            rounding,
        })
    }

    /// Builds the lattice described by the island settings.
    pub fn from_config(config: &IslandConfig) -> Result<Self, LatticeError> {
        Self::new(
            config.distance,
            config.offset_x,
            config.offset_z,
            config.rounding,
        )
    }

    /// Island radius in blocks.
    pub fn distance(&self) -> i32 {
        self.distance
    }

    /// Distance between neighbouring centers along one axis (`2 * distance`).
    pub fn pitch(&self) -> i64 {
        2 * i64::from(self.distance)
    }

    /// Lattice origin shift `(offset_x, offset_z)`.
    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_z)
    }

    /// Tie-break rule used when snapping.
    pub fn rounding(&self) -> RoundingRule {
        self.rounding
    }

    /// Returns the center of the island owning block `(x, z)`.
    ///
    /// `center = round(v / pitch) * pitch + offset` per axis. The offset is
    /// applied after rounding, so for a non-zero offset the owning center is
    /// not necessarily the geometrically closest one.
    pub fn nearest_island_center(&self, x: i64, z: i64) -> IslandCenter {
        let pitch = self.pitch();
        IslandCenter {
            x: round_div(x, pitch, self.rounding) * pitch + i64::from(self.offset_x),
            z: round_div(z, pitch, self.rounding) * pitch + i64::from(self.offset_z),
        }
    }
}

/// `round(value / divisor)` in exact integer arithmetic. `divisor` must be positive.
fn round_div(value: i64, divisor: i64, rule: RoundingRule) -> i64 {
    match rule {
        // floor(v / d + 1/2) == floor((2v + d) / 2d)
        RoundingRule::HalfUp => (2 * value + divisor).div_euclid(2 * divisor),
        RoundingRule::HalfEven => {
            let quotient = value.div_euclid(divisor);
            let twice_rem = 2 * value.rem_euclid(divisor);
            if twice_rem > divisor || (twice_rem == divisor && quotient % 2 != 0) {
                quotient + 1
            } else {
                quotient
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lattice(distance: i32, ox: i32, oz: i32) -> IslandLattice {
        IslandLattice::new(distance, ox, oz, RoundingRule::HalfUp).unwrap()
    }

    #[test]
    fn test_zero_distance_rejected() {
        assert_eq!(
            IslandLattice::new(0, 0, 0, RoundingRule::HalfUp),
            Err(LatticeError::NonPositiveSpacing(0))
        );
        assert!(IslandLattice::new(-5, 0, 0, RoundingRule::HalfEven).is_err());
    }

    #[test]
    fn test_from_default_config() {
        let lattice = IslandLattice::from_config(&IslandConfig::default()).unwrap();
        assert_eq!(lattice.distance(), 64);
        assert_eq!(lattice.pitch(), 128);
    }

    #[test]
    fn test_reference_point_snaps_to_400() {
        let lattice = lattice(100, 0, 0);
        assert_eq!(lattice.nearest_island_center(448, 448), IslandCenter::new(400, 400));
    }

    #[test]
    fn test_origin_is_a_center() {
        let lattice = lattice(100, 0, 0);
        assert_eq!(lattice.nearest_island_center(0, 0), IslandCenter::new(0, 0));
        assert_eq!(lattice.nearest_island_center(-99, 99), IslandCenter::new(0, 0));
    }

    #[test]
    fn test_half_up_tie_goes_positive() {
        let lattice = lattice(100, 0, 0);
        // 100 / 200 = 0.5 -> 1, -100 / 200 = -0.5 -> 0
        assert_eq!(lattice.nearest_island_center(100, -100), IslandCenter::new(200, 0));
        assert_eq!(lattice.nearest_island_center(-300, 300), IslandCenter::new(-200, 400));
    }

    #[test]
    fn test_half_even_tie_goes_to_even_multiple() {
        let lattice = IslandLattice::new(100, 0, 0, RoundingRule::HalfEven).unwrap();
        // 0.5 -> 0, 1.5 -> 2, -0.5 -> 0, -1.5 -> -2
        assert_eq!(lattice.nearest_island_center(100, 300), IslandCenter::new(0, 400));
        assert_eq!(lattice.nearest_island_center(-100, -300), IslandCenter::new(0, -400));
    }

    #[test]
    fn test_rules_agree_away_from_ties() {
        let up = lattice(37, 0, 0);
        let even = IslandLattice::new(37, 0, 0, RoundingRule::HalfEven).unwrap();
        for x in (-1000..1000).step_by(7) {
            if x % 37 == 0 && (x / 37) % 2 != 0 {
                continue;
            }
            assert_eq!(
                up.nearest_island_center(x, 0),
                even.nearest_island_center(x, 0),
                "rules disagree at x={x}"
            );
        }
    }

    #[test]
    fn test_offset_applied_after_rounding() {
        let lattice = lattice(100, 16, -32);
        assert_eq!(lattice.nearest_island_center(0, 0), IslandCenter::new(16, -32));
        assert_eq!(lattice.nearest_island_center(450, 450), IslandCenter::new(416, 368));
    }

    #[test]
    fn test_centers_congruent_to_offset() {
        let lattice = lattice(50, 7, -3);
        for x in (-2000..2000).step_by(13) {
            for z in (-2000..2000).step_by(17) {
                let c = lattice.nearest_island_center(x, z);
                assert_eq!((c.x - 7).rem_euclid(100), 0, "x={x} z={z} -> {c:?}");
                assert_eq!((c.z + 3).rem_euclid(100), 0, "x={x} z={z} -> {c:?}");
            }
        }
    }

    #[test]
    fn test_no_lattice_point_strictly_closer() {
        let lattice = lattice(50, 0, 0);
        let pitch = lattice.pitch();
        for x in (-1500..1500).step_by(11) {
            for z in (-1500..1500).step_by(19) {
                let c = lattice.nearest_island_center(x, z);
                let own = (x - c.x).pow(2) + (z - c.z).pow(2);
                for dx in [-pitch, 0, pitch] {
                    for dz in [-pitch, 0, pitch] {
                        let other = (x - c.x - dx).pow(2) + (z - c.z - dz).pow(2);
                        assert!(
                            own <= other,
                            "({x}, {z}) owned by {c:?} but ({}, {}) is closer",
                            c.x + dx,
                            c.z + dz
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_matches_float_rounding() {
        // floor(v / d + 0.5) computed in f64, the legacy formulation.
        let lattice = lattice(64, 0, 0);
        for x in -5000_i64..5000 {
            let expected = ((x as f64 / 128.0) + 0.5).floor() as i64 * 128;
            assert_eq!(lattice.nearest_island_center(x, 0).x, expected, "x={x}");
        }
    }
}
