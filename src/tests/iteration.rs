use crate::concurrent::SyncBuckets;
use crate::core::*;
use crate::st::UnsyncBuckets;
use crate::tests::util::*;

fn values<B: ReadableBuckets>(buckets: &B) -> Vec<f64> {
    buckets.buckets().iter().map(|bucket| bucket.value.to_f64()).collect()
}

#[test]
fn ascending_across_signs_and_exponents() {
    let data = vec![3.0, -0.25, 1000.0, -3.0, 0.0, -1000.0, 0.25, -3.5, 3.5];
    let mut unsync = UnsyncBuckets::<u64>::new();
    unsync.extend(data.iter().cloned());
    let expected = vec![-1000.0, -3.5, -3.0, -0.25, 0.0, 0.25, 3.0, 3.5, 1000.0];
    assert_eq!(expected, values(&unsync));

    let sync = SyncBuckets::new();
    for &value in data.iter() {
        sync.record(value);
    }
    assert_eq!(expected, values(&sync));
}

#[test]
fn reverse_range_mirrors_range() {
    let data = random_data(50_000, -1e4, 1e4, 9);
    let mut unsync = UnsyncBuckets::<u64>::new();
    let sync = SyncBuckets::new();
    for &value in data.iter() {
        unsync.record(value);
        sync.record(value);
    }

    let mut forward = Vec::new();
    unsync.range(|bucket| forward.push(bucket));
    let mut backward = Vec::new();
    unsync.reverse_range(|bucket| backward.push(bucket));
    backward.reverse();
    assert_eq!(forward, backward);

    let mut sync_backward = Vec::new();
    sync.reverse_range(|bucket| sync_backward.push(bucket));
    sync_backward.reverse();
    assert_eq!(forward, sync_backward);

    for pair in forward.windows(2) {
        assert!(pair[0].value < pair[1].value, "{} !< {}", pair[0].value, pair[1].value);
        assert!(pair[0].value.to_f64() < pair[1].value.to_f64());
    }
}

#[test]
fn iterator_is_double_ended() {
    let mut buckets = UnsyncBuckets::<u32>::new();
    buckets.extend(vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0]);
    let mut iter = buckets.iter();
    assert_eq!(Some(Bucket::new(LpFloat::from(1.0), 1)), iter.next());
    assert_eq!(Some(Bucket::new(LpFloat::from(4.0), 1)), iter.next_back());
    assert_eq!(Some(Bucket::new(LpFloat::from(3.0), 3)), iter.next_back());
    assert_eq!(Some(Bucket::new(LpFloat::from(2.0), 2)), iter.next());
    assert_eq!(None, iter.next());
    assert_eq!(None, iter.next_back());

    let descending = buckets.iter().rev().map(|bucket| bucket.count).collect::<Vec<_>>();
    assert_eq!(vec![1, 3, 2, 1], descending);
}

#[test]
fn empty_buckets_are_skipped() {
    let mut buckets = UnsyncBuckets::<u64>::new();
    assert_eq!(None, buckets.iter().next());
    buckets.record(5.0);
    buckets.erase(5.0);
    // the layer is still there, but holds nothing
    assert_eq!(1, buckets.layer_count());
    assert_eq!(None, buckets.iter().next());
    assert_eq!(None, buckets.iter().next_back());

    let mut visited = 0;
    buckets.range(|_| visited += 1);
    buckets.reverse_range(|_| visited += 1);
    assert_eq!(0, visited);
}

#[test]
fn returned_buckets_are_copies() {
    let sync = SyncBuckets::new();
    sync.record(1.0);
    let before = sync.buckets();
    sync.record(1.0);
    assert_eq!(vec![Bucket::new(LpFloat::ONE, 1)], before);
    assert_eq!(vec![Bucket::new(LpFloat::ONE, 2)], sync.buckets());
}
