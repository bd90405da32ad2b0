use snafu::Snafu;

#[derive(Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum PercentilesError {
    #[snafu(display("percentile {} is not strictly between 0 and 100", percentile))]
    OutOfRange { percentile: f64 },
}
