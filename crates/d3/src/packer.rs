//! Randomized sphere packer.
//!
//! Each of `max_spheres` slots gets a bounded number of placement attempts.
//! An attempt samples a radius from [`RadiusRange`], then a center uniformly
//! from the positions that keep the sphere inside the volume, and accepts the
//! candidate if it overlaps none of the spheres placed so far. A slot whose
//! budget runs out simply contributes nothing.
//!
//! Overlap checks are brute force against every accepted sphere, so a run
//! costs `O(max_spheres * attempts_per_sphere * placed)`.

use crate::sphere::Sphere;
use crate::validation::validate_packing;
use crate::volume::Volume;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use rayon::prelude::*;
use sphere_pack_core::geometry::Boundary;
use sphere_pack_core::solver::{Config, ProgressCallback, ProgressInfo, Solver};
use sphere_pack_core::{Error, Result, SolveResult};

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Candidate radii for one packing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusRange {
    /// Smallest candidate radius.
    pub min: f64,
    /// Largest candidate radius (the grid size).
    pub max: f64,
}

impl RadiusRange {
    /// Creates a range from explicit bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Derives the range for `volume`.
    ///
    /// The grid size `min(width, height, depth) / grid_divisor` is the largest
    /// radius and `grid_size * min_radius_ratio` the smallest. It is computed
    /// once per run and does not shrink as the volume fills.
    pub fn for_volume(volume: &Volume, config: &Config) -> Self {
        let grid_size = volume.min_dimension() / config.grid_divisor;
        Self {
            min: grid_size * config.min_radius_ratio,
            max: grid_size,
        }
    }

    /// Samples a radius uniformly from the range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }

    /// Returns true if `radius` lies inside the range.
    pub fn contains(&self, radius: f64) -> bool {
        self.min <= radius && radius <= self.max
    }

    /// Rejects ranges that cannot be sampled: both bounds must be positive
    /// and finite, with `min <= max`.
    pub fn validate(&self) -> Result<()> {
        let bounds_ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.min <= self.max;
        if !bounds_ok {
            return Err(Error::ConfigError(format!(
                "radius range [{}, {}] must be positive and finite",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Running totals over placement attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttemptCounters {
    /// Candidates tried.
    pub attempts: u64,
    /// Candidates rejected for overlapping an accepted sphere.
    pub rejected_overlap: u64,
    /// Candidates rejected because they could not be contained.
    pub rejected_out_of_range: u64,
}

/// Valid center coordinates along one axis, or `None` if the sphere is
/// wider than the axis.
fn center_range(extent: f64, radius: f64) -> Option<RangeInclusive<f64>> {
    let high = extent - radius;
    (radius <= high).then(|| radius..=high)
}

/// Samples one candidate sphere.
///
/// Returns `None` without sampling a center when the drawn radius cannot fit
/// along some axis.
fn sample_candidate<R: Rng>(
    volume: &Volume,
    radii: &RadiusRange,
    rng: &mut R,
) -> Option<Sphere> {
    let radius = radii.sample(rng);
    if radius <= 0.0 {
        return None;
    }

    let x_range = center_range(volume.width(), radius)?;
    let y_range = center_range(volume.height(), radius)?;
    let z_range = center_range(volume.depth(), radius)?;

    Some(Sphere::new(
        rng.gen_range(x_range),
        rng.gen_range(y_range),
        rng.gen_range(z_range),
        radius,
    ))
}

/// Fills one slot.
///
/// Tries up to `attempts` candidates and returns the first one that is
/// contained in `volume` and overlaps nothing in `placed`. Returns `None`
/// once the budget is spent; that is a normal outcome, not an error.
pub fn try_place<R: Rng>(
    volume: &Volume,
    radii: &RadiusRange,
    placed: &[Sphere],
    attempts: usize,
    rng: &mut R,
    counters: &mut AttemptCounters,
) -> Option<Sphere> {
    for _ in 0..attempts {
        counters.attempts += 1;

        let candidate = match sample_candidate(volume, radii, rng) {
            Some(candidate) if candidate.is_contained_in(volume) => candidate,
            _ => {
                counters.rejected_out_of_range += 1;
                continue;
            }
        };

        if placed.iter().any(|existing| candidate.overlaps(existing)) {
            counters.rejected_overlap += 1;
            continue;
        }

        return Some(candidate);
    }

    None
}

/// Randomized sphere packer.
pub struct SpherePacker {
    config: Config,
    cancelled: Arc<AtomicBool>,
}

impl SpherePacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a handle that cancels the current run when set.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }

    /// Packs `volume` with a caller-supplied random source.
    ///
    /// Runs a single pass; `restarts` and `seed` from the configuration are
    /// ignored since the caller owns the randomness.
    pub fn solve_with_rng<R: Rng>(
        &self,
        volume: &Volume,
        rng: &mut R,
    ) -> Result<SolveResult<Sphere>> {
        self.prepare(volume)?;
        Ok(self.run_once(volume, rng, None))
    }

    /// Validates inputs and clears the cancellation flag.
    fn prepare(&self, volume: &Volume) -> Result<()> {
        volume.validate()?;
        self.config.validate()?;
        RadiusRange::for_volume(volume, &self.config).validate()?;
        self.cancelled.store(false, Ordering::Relaxed);
        Ok(())
    }

    fn rng_for_restart(&self, index: usize) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => StdRng::from_entropy(),
        }
    }

    fn solve_inner(
        &self,
        volume: &Volume,
        progress: Option<&ProgressCallback>,
    ) -> Result<SolveResult<Sphere>> {
        self.prepare(volume)?;

        if self.config.restarts > 1 {
            return Ok(self.run_restarts(volume, progress));
        }

        let mut rng = self.rng_for_restart(0);
        Ok(self.run_once(volume, &mut rng, progress))
    }

    /// One packing pass over all slots.
    fn run_once<R: Rng>(
        &self,
        volume: &Volume,
        rng: &mut R,
        progress: Option<&ProgressCallback>,
    ) -> SolveResult<Sphere> {
        let start = Instant::now();
        let deadline = (self.config.time_limit_ms > 0)
            .then(|| start + Duration::from_millis(self.config.time_limit_ms));

        let total_slots = self.config.max_spheres;
        let attempts = self.config.attempts_per_sphere;
        let radii = RadiusRange::for_volume(volume, &self.config);

        let mut result = SolveResult::new(total_slots);
        let mut counters = AttemptCounters::default();

        if total_slots > 0 && !volume.admits_radius(radii.min) {
            log::warn!(
                "Radius range [{}, {}] does not fit a {}x{}x{} volume, no sphere can be placed",
                radii.min,
                radii.max,
                volume.width(),
                volume.height(),
                volume.depth()
            );
        }

        for slot in 0..total_slots {
            if self.cancelled.load(Ordering::Relaxed) {
                result.cancelled = true;
                break;
            }

            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                result.timed_out = true;
                break;
            }

            match try_place(
                volume,
                &radii,
                &result.placements,
                attempts,
                rng,
                &mut counters,
            ) {
                Some(sphere) => result.placements.push(sphere),
                None => {
                    result.exhausted_slots += 1;
                    log::trace!("Slot {} exhausted after {} attempts", slot, attempts);
                }
            }

            if let Some(callback) = progress {
                callback(ProgressInfo {
                    slot: slot + 1,
                    total_slots,
                    placed: result.placements.len(),
                    elapsed_ms: start.elapsed().as_millis() as u64,
                    running: true,
                });
            }
        }

        result.attempts = counters.attempts;
        result.rejected_overlap = counters.rejected_overlap;
        result.rejected_out_of_range = counters.rejected_out_of_range;

        result.utilization = result
            .placements
            .iter()
            .map(|s| s.volume_fraction(volume))
            .sum();
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        if let Some(callback) = progress {
            callback(ProgressInfo {
                slot: result.slots_processed(),
                total_slots,
                placed: result.placements.len(),
                elapsed_ms: result.computation_time_ms,
                running: false,
            });
        }

        log::debug!(
            "Packed {}/{} spheres ({} exhausted) in {} attempts, utilization {}",
            result.placements.len(),
            total_slots,
            result.exhausted_slots,
            result.attempts,
            result.utilization_percent()
        );

        result
    }

    /// Runs independent passes in parallel and keeps the densest one.
    ///
    /// Every pass owns its random source and result. Progress is reported
    /// for the first pass only.
    fn run_restarts(
        &self,
        volume: &Volume,
        progress: Option<&ProgressCallback>,
    ) -> SolveResult<Sphere> {
        let start = Instant::now();
        let restarts = self.config.restarts;

        let mut results: Vec<SolveResult<Sphere>> = (0..restarts)
            .into_par_iter()
            .map(|index| {
                let mut rng = self.rng_for_restart(index);
                let progress = if index == 0 { progress } else { None };
                self.run_once(volume, &mut rng, progress)
            })
            .collect();

        // Stable sort: the lowest restart index wins ties.
        results.sort_by(|a, b| {
            b.utilization
                .total_cmp(&a.utilization)
                .then_with(|| b.placements.len().cmp(&a.placements.len()))
        });

        let best = results
            .into_iter()
            .find(|candidate| match validate_packing(volume, &candidate.placements) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Discarding restart result: {}", e);
                    false
                }
            });

        let mut best = best.unwrap_or_else(|| SolveResult::new(self.config.max_spheres));
        best.restarts = restarts;
        best.computation_time_ms = start.elapsed().as_millis() as u64;

        log::debug!(
            "Selected packing with {} spheres out of {} restarts",
            best.placements.len(),
            restarts
        );

        best
    }
}

impl Solver for SpherePacker {
    type Boundary = Volume;
    type Item = Sphere;

    fn solve(&self, boundary: &Self::Boundary) -> Result<SolveResult<Sphere>> {
        self.solve_inner(boundary, None)
    }

    fn solve_with_progress(
        &self,
        boundary: &Self::Boundary,
        callback: ProgressCallback,
    ) -> Result<SolveResult<Sphere>> {
        self.solve_inner(boundary, Some(&callback))
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

/// Converts a signed count to `usize`, requiring it to be at least `min`.
pub fn checked_count(name: &str, value: i64, min: usize) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|&n| n >= min)
        .ok_or_else(|| {
            Error::InvalidCount(format!("{} must be at least {}, got {}", name, min, value))
        })
}

/// Packs up to `max_spheres` spheres into a `width x height x depth` box
/// using the thread-local random source.
///
/// Inputs are validated before any sampling: non-positive dimensions yield
/// [`Error::InvalidDimension`], a negative `max_spheres` or an
/// `attempts_per_sphere` below one yields [`Error::InvalidCount`].
///
/// # Example
///
/// ```
/// use sphere_pack_d3::pack;
///
/// let spheres = pack(100.0, 50.0, 30.0, 100, 200).unwrap();
/// assert!(spheres.len() <= 100);
/// for s in &spheres {
///     assert!(s.radius() >= 1.5 && s.radius() <= 3.0);
/// }
/// ```
pub fn pack(
    width: f64,
    height: f64,
    depth: f64,
    max_spheres: i64,
    attempts_per_sphere: i64,
) -> Result<Vec<Sphere>> {
    pack_with_rng(
        width,
        height,
        depth,
        max_spheres,
        attempts_per_sphere,
        &mut thread_rng(),
    )
}

/// Same as [`pack`] with an explicit random source.
pub fn pack_with_rng<R: Rng>(
    width: f64,
    height: f64,
    depth: f64,
    max_spheres: i64,
    attempts_per_sphere: i64,
    rng: &mut R,
) -> Result<Vec<Sphere>> {
    let volume = Volume::try_new(width, height, depth)?;
    let config = Config::default()
        .with_max_spheres(checked_count("max_spheres", max_spheres, 0)?)
        .with_attempts_per_sphere(checked_count(
            "attempts_per_sphere",
            attempts_per_sphere,
            1,
        )?);

    let result = SpherePacker::new(config).solve_with_rng(&volume, rng)?;
    Ok(result.placements)
}
