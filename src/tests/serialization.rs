#![cfg(feature = "serde")]

use crate::core::*;
use crate::st::UnsyncBuckets;
use serde_json::json;

#[test]
fn lp_float_is_a_plain_number() {
    assert_eq!("1.5", serde_json::to_string(&LpFloat::from(1.5)).unwrap());
    assert_eq!("-0.25", serde_json::to_string(&LpFloat::from(-0.25)).unwrap());
}

#[test]
fn deserializing_quantizes() {
    let lp: LpFloat = serde_json::from_str("100.3").unwrap();
    assert_eq!(LpFloat::from(100.3), lp);
    assert_eq!(100.25, lp.to_f64());

    let values: Vec<LpFloat> = serde_json::from_str("[1, 2.0, -3.75]").unwrap();
    assert_eq!(vec![LpFloat::ONE, LpFloat::from(2.0), LpFloat::from(-3.75)], values);
}

#[test]
fn bucket_layout() {
    let bucket = Bucket::new(LpFloat::from(2.5), 4);
    let value = serde_json::to_value(&bucket).unwrap();
    assert_eq!(json!({"value": 2.5, "count": 4}), value);
    assert_eq!(bucket, serde_json::from_value::<Bucket>(value).unwrap());
}

#[test]
fn summary_layout() {
    let mut buckets = UnsyncBuckets::<u64>::new();
    buckets.extend(vec![1.0, 2.0, 2.0, 3.0]);
    let summary = buckets.summary_with(&[50.0]).unwrap();
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        json!({
            "total": 4,
            "sum": 8.0,
            "avg": 2.0,
            "min": 1.0,
            "max": 3.0,
            "percentiles": [{"percentile": 50.0, "threshold": 2.0}],
        }),
        value
    );
    assert_eq!(summary, serde_json::from_value::<Summary>(value).unwrap());
}

#[test]
fn percentiles_are_validated_on_load() {
    let percentiles: Percentiles = serde_json::from_str("[99, 50, 90]").unwrap();
    assert_eq!(&[50.0, 90.0, 99.0][..], percentiles.as_slice());
    assert_eq!("[50.0,90.0,99.0]", serde_json::to_string(&percentiles).unwrap());

    let err = serde_json::from_str::<Percentiles>("[50, 100]").unwrap_err();
    assert!(err.to_string().contains("percentile 100"), "{}", err);
}
