pub mod bucket;
pub mod constants;
pub mod counter;
pub mod errors;
pub mod layer;
pub mod lp_float;
pub mod percentiles;
pub mod readable_buckets;
pub mod summary;

pub use self::bucket::Bucket;
pub use self::counter::Counter;
pub use self::errors::*;
pub use self::lp_float::LpFloat;
pub use self::percentiles::{check_percentiles, Percentiles};
pub use self::readable_buckets::{ReadableBuckets, RecordableBuckets};
pub use self::summary::{PercentilePair, Summary};
