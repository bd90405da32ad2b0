pub mod bucket_iterator;

pub use self::bucket_iterator::BucketIterator;
