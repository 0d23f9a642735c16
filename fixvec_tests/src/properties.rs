//! Numeric contract of `fixvec_core` as reusable checks.
//!
//! Each check returns `Ok(())` or the first counterexample as a message.
//! Sampled checks draw from a seeded [`Sampler`], so a failing run can be
//! replayed from the seed in its report.

use std::time::Instant;

use fixvec_core::prelude::*;
use fixvec_core::FixedError;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::ConformanceConfig;
use crate::report::{ConformanceReport, PropertyResult, ReportBuilder};

pub type Check = Result<(), String>;

const CONVERSION: &str = "Conversion";
const FIXED2: &str = "FixedVec2";
const FIXED3: &str = "FixedVec3";
const FLOAT3: &str = "Vec3";

/// Largest float component drawn for [`Vec3`] samples.
const FLOAT_SAMPLE_RANGE: f32 = 10_000.0;

/// Inputs from the truncation contract: (real, expected raw).
pub const TRUNCATION_TABLE: &[(f64, i32)] = &[
    (0.0, 0),
    (0.0009, 0),
    (-0.0009, 0),
    (0.0015, 1),
    (-0.0015, -1),
    (1.5, 1500),
    (-2.25, -2250),
    (1.9999, 1999),
    (-1.9999, -1999),
];

/// Seeded generator of conversion inputs and vectors.
pub struct Sampler {
    rng: StdRng,
    max_abs_real: f64,
    max_abs_raw: i32,
}

impl Sampler {
    pub fn new(cfg: &ConformanceConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(cfg.seed),
            max_abs_real: cfg.max_abs_real.abs(),
            max_abs_raw: cfg.max_abs_raw.saturating_abs(),
        }
    }

    pub fn real(&mut self) -> f64 {
        self.rng.gen_range(-self.max_abs_real..=self.max_abs_real)
    }

    pub fn raw(&mut self) -> i32 {
        self.rng.gen_range(-self.max_abs_raw..=self.max_abs_raw)
    }

    pub fn fixed2(&mut self) -> FixedVec2 {
        FixedVec2::new(self.raw(), self.raw())
    }

    pub fn fixed3(&mut self) -> FixedVec3 {
        FixedVec3::new(self.raw(), self.raw(), self.raw())
    }

    pub fn float3(&mut self) -> Vec3 {
        let mut c = || self.rng.gen_range(-FLOAT_SAMPLE_RANGE..=FLOAT_SAMPLE_RANGE);
        Vec3::new(c(), c(), c())
    }
}

fn tolerance() -> f64 {
    1.0 / f64::from(SCALE)
}

fn for_pairs<T: Copy>(
    s: &mut Sampler,
    n: usize,
    mut draw: impl FnMut(&mut Sampler) -> T,
    mut check: impl FnMut(T, T) -> Check,
) -> Check {
    for _ in 0..n {
        let a = draw(s);
        let b = draw(s);
        check(a, b)?;
    }
    Ok(())
}

/// `|fixed_to_float(float_to_fixed(f)) - f| <= 1/1000`.
pub fn roundtrip_bound(s: &mut Sampler, n: usize) -> Check {
    for _ in 0..n {
        let f = s.real();
        let back = fixed_to_float(float_to_fixed(f));
        if (back - f).abs() > tolerance() {
            return Err(format!("{f} roundtrips to {back}"));
        }
    }
    Ok(())
}

/// Conversion truncates toward zero, never rounds to nearest.
pub fn truncates_toward_zero() -> Check {
    for &(f, expected) in TRUNCATION_TABLE {
        let got = float_to_fixed(f);
        if got != expected {
            return Err(format!("float_to_fixed({f}) = {got}, expected {expected}"));
        }
    }
    Ok(())
}

/// Unchecked conversion saturates; checked conversion rejects.
pub fn overflow_policy() -> Check {
    let cases = [
        (1.0e12, i32::MAX),
        (-1.0e12, i32::MIN),
        (f64::INFINITY, i32::MAX),
        (f64::NAN, 0),
    ];
    for (f, expected) in cases {
        let got = float_to_fixed(f);
        if got != expected {
            return Err(format!("float_to_fixed({f}) = {got}, expected {expected}"));
        }
    }
    match try_float_to_fixed(1.0e12) {
        Err(FixedError::OutOfRange(_)) => {}
        other => return Err(format!("try_float_to_fixed(1e12) = {other:?}")),
    }
    match try_float_to_fixed(f64::NAN) {
        Err(FixedError::NotFinite(_)) => {}
        other => return Err(format!("try_float_to_fixed(NaN) = {other:?}")),
    }
    Ok(())
}

fn delta_close<const N: usize>(a: [i32; N], b: [i32; N], d: [i32; N]) -> Check {
    for i in 0..N {
        let expected = fixed_to_float(a[i]) - fixed_to_float(b[i]);
        let got = fixed_to_float(d[i]);
        if (got - expected).abs() > tolerance() {
            return Err(format!(
                "axis {i}: delta of {a:?} and {b:?} is {got}, expected {expected}"
            ));
        }
    }
    Ok(())
}

/// `a.delta(b)` matches the float difference of `a` and `b`.
pub fn delta_matches_float_difference2(s: &mut Sampler, n: usize) -> Check {
    for_pairs(s, n, Sampler::fixed2, |a, b| {
        delta_close(a.to_raw(), b.to_raw(), a.delta(b).to_raw())
    })
}

pub fn delta_matches_float_difference3(s: &mut Sampler, n: usize) -> Check {
    for_pairs(s, n, Sampler::fixed3, |a, b| {
        delta_close(a.to_raw(), b.to_raw(), a.delta(b).to_raw())
    })
}

/// Equality is reflexive, symmetric, and exact on raw components.
pub fn equality_is_exact2(s: &mut Sampler, n: usize) -> Check {
    for_pairs(s, n, Sampler::fixed2, |a, b| {
        if !a.is_equal(a) {
            return Err(format!("{a:?} is not equal to itself"));
        }
        if a.is_equal(b) != b.is_equal(a) {
            return Err(format!("equality of {a:?} and {b:?} is not symmetric"));
        }
        if a.is_equal(b) != (a.to_raw() == b.to_raw()) {
            return Err(format!("equality of {a:?} and {b:?} is not raw equality"));
        }
        Ok(())
    })
}

pub fn equality_is_exact3(s: &mut Sampler, n: usize) -> Check {
    for_pairs(s, n, Sampler::fixed3, |a, b| {
        if !a.is_equal(a) {
            return Err(format!("{a:?} is not equal to itself"));
        }
        if a.is_equal(b) != b.is_equal(a) {
            return Err(format!("equality of {a:?} and {b:?} is not symmetric"));
        }
        if a.is_equal(b) != (a.to_raw() == b.to_raw()) {
            return Err(format!("equality of {a:?} and {b:?} is not raw equality"));
        }
        Ok(())
    })
}

/// Distance and squared distance do not depend on argument order.
pub fn distance_symmetric<T: Spatial>(a: T, b: T) -> Check {
    if a.squared_distance(b) != b.squared_distance(a) {
        return Err(format!("squared distance of {a:?} and {b:?} is not symmetric"));
    }
    if a.distance_to(b) != b.distance_to(a) {
        return Err(format!("distance of {a:?} and {b:?} is not symmetric"));
    }
    Ok(())
}

/// A point is at zero distance from itself.
pub fn zero_self_distance<T: Spatial>(a: T) -> Check {
    if a.squared_distance(a) != T::Squared::default() {
        return Err(format!("{a:?} has nonzero squared distance to itself"));
    }
    if a.distance_to(a) != T::Distance::default() {
        return Err(format!("{a:?} has nonzero distance to itself"));
    }
    Ok(())
}

pub fn sampled_symmetry<T: Spatial>(
    s: &mut Sampler,
    n: usize,
    draw: impl FnMut(&mut Sampler) -> T,
) -> Check {
    for_pairs(s, n, draw, distance_symmetric::<T>)
}

pub fn sampled_zero_distance<T: Spatial>(
    s: &mut Sampler,
    n: usize,
    draw: impl FnMut(&mut Sampler) -> T,
) -> Check {
    for_pairs(s, n, draw, |a, b| {
        zero_self_distance(a)?;
        zero_self_distance(b)
    })
}

/// `(0,0)` to `(100000,100000)` is exactly `2 * 10^10` squared.
pub fn large_world_squared_distance() -> Check {
    let got = FixedVec2::ZERO.squared_distance(FixedVec2::new(100_000, 100_000));
    if got != 20_000_000_000 {
        return Err(format!("expected 20000000000, got {got}"));
    }
    Ok(())
}

/// `(3000,4000)` to the origin: 25,000,000 squared, 5000 scaled.
pub fn three_four_five() -> Check {
    let a = FixedVec2::new(3000, 4000);
    let b = FixedVec2::new(0, 0);
    let sq = a.squared_distance(b);
    let d = a.distance_to(b);
    if sq != 25_000_000 || d != 5000 {
        return Err(format!("expected (25000000, 5000), got ({sq}, {d})"));
    }
    Ok(())
}

/// Pretty and raw text forms of `(1.5, -2.25, 0.0)`.
pub fn text_forms() -> Check {
    let v = FixedVec3::from_floats(1.5, -2.25, 0.0);
    let pretty = v.to_string();
    if pretty != "[FixedVec3      1.50,     -2.25,      0.00]" {
        return Err(format!("unexpected pretty form {pretty:?}"));
    }
    let raw = v.debug_string();
    if raw != "[FixedVec3 fixed 1500, -2250, 0]" {
        return Err(format!("unexpected raw form {raw:?}"));
    }
    Ok(())
}

/// Runs a check and records the outcome.
fn run_check<F>(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    samples: usize,
    f: F,
) -> PropertyResult
where
    F: FnOnce() -> Check,
{
    let start = Instant::now();
    let result = f();
    let duration = start.elapsed();

    let check = PropertyResult::new(id, name, category)
        .with_description(description)
        .with_samples(samples);

    match result {
        Ok(()) => {
            debug!(id, ?duration, "Check passed");
            check.pass(duration)
        }
        Err(e) => {
            warn!(id, error = %e, "Check failed");
            check.fail(duration, &e)
        }
    }
}

/// Runs every check with the given config.
pub fn run_all(cfg: &ConformanceConfig) -> ConformanceReport {
    let n = cfg.samples;
    let s = &mut Sampler::new(cfg);
    info!(seed = cfg.seed, samples = n, "Running conformance checks");

    ReportBuilder::new("Fixed-point vector conformance", cfg.seed)
        .metadata("scale", &SCALE.to_string())
        .metadata("samples", &n.to_string())
        .metadata("max_abs_real", &cfg.max_abs_real.to_string())
        .metadata("max_abs_raw", &cfg.max_abs_raw.to_string())
        .add_result(run_check(
            "FX-001",
            "Roundtrip bound",
            CONVERSION,
            "float -> fixed -> float stays within 1/1000",
            n,
            || roundtrip_bound(s, n),
        ))
        .add_result(run_check(
            "FX-002",
            "Truncation toward zero",
            CONVERSION,
            "Fractional thousandths are discarded, not rounded",
            TRUNCATION_TABLE.len(),
            truncates_toward_zero,
        ))
        .add_result(run_check(
            "FX-003",
            "Overflow policy",
            CONVERSION,
            "Unchecked conversion saturates, checked conversion rejects",
            1,
            overflow_policy,
        ))
        .add_result(run_check(
            "V2-001",
            "Delta correctness",
            FIXED2,
            "Delta matches the float difference",
            n,
            || delta_matches_float_difference2(s, n),
        ))
        .add_result(run_check(
            "V2-002",
            "Exact equality",
            FIXED2,
            "Equality is reflexive, symmetric and raw",
            n,
            || equality_is_exact2(s, n),
        ))
        .add_result(run_check(
            "V2-003",
            "Distance symmetry",
            FIXED2,
            "Distance does not depend on argument order",
            n,
            || sampled_symmetry(s, n, Sampler::fixed2),
        ))
        .add_result(run_check(
            "V2-004",
            "Zero self-distance",
            FIXED2,
            "A point is at distance 0 from itself",
            n,
            || sampled_zero_distance(s, n, Sampler::fixed2),
        ))
        .add_result(run_check(
            "V2-005",
            "Large world squared distance",
            FIXED2,
            "Squared distance is widened to 64 bits",
            1,
            large_world_squared_distance,
        ))
        .add_result(run_check(
            "V2-006",
            "3-4-5 triangle",
            FIXED2,
            "Distance stays in scaled units",
            1,
            three_four_five,
        ))
        .add_result(run_check(
            "V3-001",
            "Delta correctness",
            FIXED3,
            "Delta matches the float difference",
            n,
            || delta_matches_float_difference3(s, n),
        ))
        .add_result(run_check(
            "V3-002",
            "Exact equality",
            FIXED3,
            "Equality is reflexive, symmetric and raw",
            n,
            || equality_is_exact3(s, n),
        ))
        .add_result(run_check(
            "V3-003",
            "Distance symmetry",
            FIXED3,
            "Distance does not depend on argument order",
            n,
            || sampled_symmetry(s, n, Sampler::fixed3),
        ))
        .add_result(run_check(
            "V3-004",
            "Zero self-distance",
            FIXED3,
            "A point is at distance 0 from itself",
            n,
            || sampled_zero_distance(s, n, Sampler::fixed3),
        ))
        .add_result(run_check(
            "V3-005",
            "Text forms",
            FIXED3,
            "Pretty form shows reals, debug form shows raw integers",
            1,
            text_forms,
        ))
        .add_result(run_check(
            "F3-001",
            "Distance symmetry",
            FLOAT3,
            "Distance does not depend on argument order",
            n,
            || sampled_symmetry(s, n, Sampler::float3),
        ))
        .add_result(run_check(
            "F3-002",
            "Zero self-distance",
            FLOAT3,
            "A point is at distance 0 from itself",
            n,
            || sampled_zero_distance(s, n, Sampler::float3),
        ))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ConformanceConfig {
        ConformanceConfig {
            samples: 200,
            ..ConformanceConfig::default()
        }
    }

    #[test]
    fn fixed_table_checks_pass() {
        assert_eq!(truncates_toward_zero(), Ok(()));
        assert_eq!(overflow_policy(), Ok(()));
        assert_eq!(large_world_squared_distance(), Ok(()));
        assert_eq!(three_four_five(), Ok(()));
        assert_eq!(text_forms(), Ok(()));
    }

    #[test]
    fn same_seed_same_samples() {
        let cfg = small_config();
        let mut a = Sampler::new(&cfg);
        let mut b = Sampler::new(&cfg);
        for _ in 0..16 {
            assert_eq!(a.fixed3(), b.fixed3());
            assert_eq!(a.real().to_bits(), b.real().to_bits());
        }
    }

    #[test]
    fn samples_respect_bounds() {
        let cfg = ConformanceConfig {
            max_abs_real: 5.0,
            max_abs_raw: 10,
            ..small_config()
        };
        let mut s = Sampler::new(&cfg);
        for _ in 0..500 {
            assert!(s.real().abs() <= 5.0);
            assert!(s.raw().abs() <= 10);
        }
    }

    #[test]
    fn roundtrip_fails_past_i32_range() {
        let cfg = ConformanceConfig {
            max_abs_real: 1.0e9,
            ..small_config()
        };
        let mut s = Sampler::new(&cfg);
        assert!(roundtrip_bound(&mut s, 200).is_err());
    }

    #[test]
    fn symmetry_detects_each_family() {
        assert_eq!(
            distance_symmetric(FixedVec2::new(1, 2), FixedVec2::new(-3, 4)),
            Ok(())
        );
        assert_eq!(zero_self_distance(Vec3::new(1.0, 2.0, 3.0)), Ok(()));
    }

    #[test]
    fn run_all_passes_with_defaults() {
        let report = run_all(&small_config());
        let failures: Vec<_> = report.failures().map(|r| r.id.clone()).collect();
        assert!(failures.is_empty(), "failed: {failures:?}");
        assert_eq!(report.results.len(), 16);
        assert_eq!(report.stats_by_category().len(), 4);
    }
}
