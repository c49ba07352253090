//! Multi-octave fractal Brownian motion (fBm) heightmap sampler.
//!
//! Drives the surface of the template world: each sample composites several
//! octaves of 2D simplex noise around a base height.

use noise::{NoiseFn, Simplex};

/// Configuration for the template world's surface noise.
#[derive(Clone, Debug)]
pub struct HeightmapParams {
    /// World seed for deterministic generation.
    pub seed: u64,
    /// Number of noise octaves to composite.
    pub octaves: u32,
    /// Frequency ratio between octaves.
    pub lacunarity: f64,
    /// Amplitude ratio between octaves.
    pub persistence: f64,
    /// Frequency of the first (lowest) octave, in cycles per block.
    pub base_frequency: f64,
    /// Amplitude of the first octave, in blocks.
    pub amplitude: f64,
    /// Height the noise is centered on, in blocks.
    pub base_height: f64,
}

impl Default for HeightmapParams {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 5,
            lacunarity: 2.0,
            persistence: 0.5,
            base_frequency: 0.008,
            amplitude: 24.0,
            base_height: 64.0,
        }
    }
}

/// fBm surface sampler for template terrain.
pub struct HeightmapSampler {
    noise: Simplex,
    params: HeightmapParams,
}

impl HeightmapSampler {
    pub fn new(params: HeightmapParams) -> Self {
        // Simplex seeds are 32-bit; fold the high half in so distinct u64
        // world seeds rarely collide.
        let folded = (params.seed ^ (params.seed >> 32)) as u32;
        Self {
            noise: Simplex::new(folded),
            params,
        }
    }

    /// Frequency and amplitude of each octave, lowest first.
    fn octaves(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let p = &self.params;
        std::iter::successors(Some((p.base_frequency, p.amplitude)), |&(f, a)| {
            Some((f * p.lacunarity, a * p.persistence))
        })
        .take(p.octaves as usize)
    }

    /// Height offset from `base_height` at block `(x, z)`.
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        self.octaves()
            .map(|(f, a)| self.noise.get([x * f, z * f]) * a)
            .sum()
    }

    /// Y of the top solid block of column `(x, z)`.
    pub fn surface_height(&self, x: i64, z: i64) -> i32 {
        (self.params.base_height + self.sample(x as f64, z as f64)).floor() as i32
    }

    /// Bound on `|sample|`.
    pub fn max_amplitude(&self) -> f64 {
        self.octaves().map(|(_, a)| a.abs()).sum()
    }

    pub fn params(&self) -> &HeightmapParams {
        &self.params
    }
}
