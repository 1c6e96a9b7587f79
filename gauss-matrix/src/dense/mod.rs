pub use crate::MatTrait;

mod mat;
mod row_ops;
pub use mat::*;

mod rref;
mod check;
pub use rref::*;
pub use check::*;
