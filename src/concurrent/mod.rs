mod atomic_layer;
pub mod concurrent_util;
pub mod sync_buckets;

pub use self::sync_buckets::SyncBuckets;
