mod ratio;
mod normalize;

pub use ratio::*;
pub use normalize::*;

pub type BigRatio = Ratio<num_bigint::BigInt>;
