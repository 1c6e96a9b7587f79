use clap::ValueEnum;
use derive_more::Display;

/// The scalar type entries are parsed into.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="verbatim")]
pub enum CType { 
    /// `f64`, normalized with a tolerance.
    #[default] R, 
    /// Exact rationals.
    Q
}

pub type Q = gauss::num::BigRatio;
