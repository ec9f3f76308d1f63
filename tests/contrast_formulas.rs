//! Unit tests for the scalar contrast formulas against known values.

use iqmetrics::{difference, michelson, ratio, rms, weber, IqMetricsError};

#[test]
fn ratio_matches_known_values() {
    assert_eq!(ratio(1.0, 0.5).unwrap(), 2.0);
    assert_eq!(ratio(0.5, 1.0).unwrap(), 0.5);
}

#[test]
fn ratio_is_reciprocal_under_argument_swap() {
    let forward = ratio(3.0, 7.0).unwrap();
    let backward = ratio(7.0, 3.0).unwrap();
    assert!((forward - 1.0 / backward).abs() < 1e-12);
}

#[test]
fn ratio_rejects_zero_denominator() {
    assert_eq!(
        ratio(1.0, 0.0).err().unwrap(),
        IqMetricsError::ZeroDenominator { metric: "ratio" }
    );
}

#[test]
fn weber_matches_known_values() {
    assert_eq!(weber(1.0, 0.5).unwrap(), 1.0);
    assert_eq!(weber(0.5, 1.0).unwrap(), 0.5);
}

#[test]
fn weber_is_symmetric_around_the_background() {
    // Deviations of equal size above and below the background agree.
    assert_eq!(weber(1.5, 1.0).unwrap(), 0.5);
    assert_eq!(weber(0.5, 1.0).unwrap(), 0.5);
}

#[test]
fn weber_rejects_zero_background() {
    assert_eq!(
        weber(1.0, 0.0).err().unwrap(),
        IqMetricsError::ZeroDenominator { metric: "weber" }
    );
}

#[test]
fn difference_is_commutative() {
    assert_eq!(difference(20.0, 10.0), 10.0);
    assert_eq!(difference(10.0, 20.0), 10.0);
    assert_eq!(difference(-2.0, -1.0), 1.0);
}

#[test]
fn michelson_matches_known_values() {
    assert_eq!(michelson(&[0.0, 1.0, 3.0]).unwrap(), 1.0);
    assert_eq!(michelson(&[15.0, 20.0, 18.0]).unwrap(), 5.0 / 35.0);
    assert_eq!(michelson(&[3.0, 3.0, 3.0]).unwrap(), 0.0);
}

#[test]
fn michelson_rejects_zero_extreme_sum() {
    assert_eq!(
        michelson(&[-1.0, 0.0, 1.0]).err().unwrap(),
        IqMetricsError::ZeroDenominator {
            metric: "michelson"
        }
    );
}

#[test]
fn michelson_rejects_empty_sample() {
    assert_eq!(
        michelson(&[]).err().unwrap(),
        IqMetricsError::EmptySample {
            metric: "michelson"
        }
    );
}

#[test]
fn rms_matches_known_values() {
    assert!((rms(&[0.0, 0.5, 1.0]).unwrap() - 0.40825).abs() < 1e-5);
    assert!((rms(&[0.3, 0.4, 0.5]).unwrap() - 0.08165).abs() < 1e-5);
}

#[test]
fn rms_of_constant_sample_is_zero() {
    assert_eq!(rms(&[0.5, 0.5, 0.5]).unwrap(), 0.0);
}

#[test]
fn rms_rejects_values_outside_unit_interval() {
    assert_eq!(
        rms(&[3.0, 4.0, 5.0]).err().unwrap(),
        IqMetricsError::ValueOutOfRange {
            metric: "rms",
            value: 3.0,
        }
    );
    assert_eq!(
        rms(&[-1.0, 0.0, 1.0]).err().unwrap(),
        IqMetricsError::ValueOutOfRange {
            metric: "rms",
            value: -1.0,
        }
    );
}

#[test]
fn rms_accepts_the_interval_endpoints() {
    assert!(rms(&[0.0, 1.0]).is_ok());
}

#[test]
fn rms_rejects_empty_sample() {
    assert_eq!(
        rms(&[]).err().unwrap(),
        IqMetricsError::EmptySample { metric: "rms" }
    );
}
