pub mod buckets;
mod counts_layer;

pub use self::buckets::UnsyncBuckets;
