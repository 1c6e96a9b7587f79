pub mod check;
pub mod reduce;
