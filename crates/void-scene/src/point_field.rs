//! Procedural star placement: a flat `[x, y, z, x, y, z, ...]` position buffer
//! biased into the distance in front of the camera, generated once per scene.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::SceneError;

/// Number of stars in the default scene.
pub const DEFAULT_STAR_COUNT: usize = 1800;

/// Full width of the field along X. Points land in `[-X_SPAN / 2, X_SPAN / 2]`.
pub const X_SPAN: f32 = 120.0;
/// Full height of the field along Y. Points land in `[-Y_SPAN / 2, Y_SPAN / 2]`.
pub const Y_SPAN: f32 = 70.0;
/// Depth of the field. Points land in `[-Z_DEPTH, 0]`, always in front of the origin.
pub const Z_DEPTH: f32 = 180.0;

/// Immutable packed star positions, three `f32` components per point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointBuffer {
    positions: Box<[f32]>,
}

impl PointBuffer {
    /// Components per point.
    pub const STRIDE: usize = 3;

    /// Number of `f32` components, always `3 * point_count()`.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` when the buffer holds no points.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of points in the buffer.
    pub fn point_count(&self) -> usize {
        self.positions.len() / Self::STRIDE
    }

    /// Raw interleaved components.
    pub fn as_slice(&self) -> &[f32] {
        &self.positions
    }

    /// Raw bytes, ready for a vertex buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Iterate the points as vectors.
    pub fn points(&self) -> impl ExactSizeIterator<Item = glam::Vec3> + '_ {
        self.positions
            .chunks_exact(Self::STRIDE)
            .map(glam::Vec3::from_slice)
    }
}

/// A point count validated from an untyped source.
///
/// Counts arriving as signed or floating-point values (scripting hosts, config
/// files) go through here so a negative, fractional, non-finite, or oversized
/// value is reported instead of producing a malformed buffer or a panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointCount(usize);

impl PointCount {
    /// Largest count whose packed buffer still fits in a single allocation.
    pub const MAX: usize =
        isize::MAX as usize / (PointBuffer::STRIDE * std::mem::size_of::<f32>());

    fn checked(count: usize) -> Result<Self, SceneError> {
        if count > Self::MAX {
            return Err(SceneError::InvalidArgument(format!(
                "point count {count} exceeds the maximum of {}",
                Self::MAX
            )));
        }
        Ok(Self(count))
    }

    /// The validated count.
    pub fn get(self) -> usize {
        self.0
    }

    /// A generator for this many points.
    pub fn generator(self) -> StarfieldGenerator {
        StarfieldGenerator::new(self.0)
    }
}

impl From<usize> for PointCount {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for PointCount {
    type Error = SceneError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        let count = usize::try_from(count).map_err(|_| {
            SceneError::InvalidArgument(format!("point count {count} is negative"))
        })?;
        Self::checked(count)
    }
}

impl TryFrom<f64> for PointCount {
    type Error = SceneError;

    fn try_from(count: f64) -> Result<Self, Self::Error> {
        if !count.is_finite() {
            return Err(SceneError::InvalidArgument(format!(
                "point count {count} is not finite"
            )));
        }
        if count < 0.0 {
            return Err(SceneError::InvalidArgument(format!(
                "point count {count} is negative"
            )));
        }
        if count.fract() != 0.0 {
            return Err(SceneError::InvalidArgument(format!(
                "point count {count} is not an integer"
            )));
        }
        // usize::MAX rounds up to 2^64 as f64, so the bound is exclusive.
        if count >= usize::MAX as f64 {
            return Err(SceneError::InvalidArgument(format!(
                "point count {count} exceeds the maximum of {}",
                Self::MAX
            )));
        }
        Self::checked(count as usize)
    }
}

/// Generates the sparse distant star field.
///
/// Without a seed every call draws from the thread RNG, so two buffers of the
/// same count share only their shape. With a seed the output is reproducible.
#[derive(Clone, Debug)]
pub struct StarfieldGenerator {
    count: usize,
    seed: Option<u64>,
}

impl StarfieldGenerator {
    /// Create a generator for `count` points.
    ///
    /// Counts above [`PointCount::MAX`] cannot be allocated; validate untrusted
    /// counts through [`PointCount`] first.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
        }
    }

    /// Use a deterministic ChaCha8 stream instead of the thread RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of points this generator produces.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Generate the buffer.
    pub fn generate(&self) -> PointBuffer {
        match self.seed {
            Some(seed) => self.generate_with(&mut ChaCha8Rng::seed_from_u64(seed)),
            None => self.generate_with(&mut rand::rng()),
        }
    }

    /// Generate the buffer from a caller-supplied random source.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> PointBuffer {
        let mut positions = Vec::with_capacity(self.count * PointBuffer::STRIDE);

        for _ in 0..self.count {
            positions.push((rng.random::<f32>() - 0.5) * X_SPAN);
            positions.push((rng.random::<f32>() - 0.5) * Y_SPAN);
            positions.push(-rng.random::<f32>() * Z_DEPTH);
        }

        log::debug!("generated starfield with {} points", self.count);

        PointBuffer {
            positions: positions.into_boxed_slice(),
        }
    }
}

/// Owns a scene's star buffer and regenerates it only when the requested count changes.
#[derive(Debug)]
pub struct PointFieldCache {
    seed: Option<u64>,
    count: usize,
    buffer: PointBuffer,
    generations: u32,
}

impl PointFieldCache {
    /// Generate the initial buffer for `count` points.
    pub fn new(count: usize, seed: Option<u64>) -> Self {
        Self {
            seed,
            count,
            buffer: Self::generator(count, seed).generate(),
            generations: 1,
        }
    }

    fn generator(count: usize, seed: Option<u64>) -> StarfieldGenerator {
        let generator = StarfieldGenerator::new(count);
        match seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        }
    }

    /// Return the cached buffer, regenerating first if `count` differs from the cached count.
    pub fn get_or_generate(&mut self, count: usize) -> &PointBuffer {
        if count != self.count {
            log::debug!("star count changed {} -> {count}, regenerating", self.count);
            self.buffer = Self::generator(count, self.seed).generate();
            self.count = count;
            self.generations += 1;
        }
        &self.buffer
    }

    /// The cached buffer.
    pub fn buffer(&self) -> &PointBuffer {
        &self.buffer
    }

    /// Count the cached buffer was generated for.
    pub fn count(&self) -> usize {
        self.count
    }

    /// How many times a buffer has been generated, including the initial one.
    pub fn generation_count(&self) -> u32 {
        self.generations
    }
}
