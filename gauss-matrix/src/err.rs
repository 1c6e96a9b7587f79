use derive_more::Display;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum DimError { 
    #[display("matrix has no entries")]
    Empty,

    #[display("row {row} has {len} entries, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },
}

impl std::error::Error for DimError {}
