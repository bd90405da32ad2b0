#[macro_use]
mod util;

mod iteration;
mod serialization;
