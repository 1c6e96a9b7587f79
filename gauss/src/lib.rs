mod abst;
pub use abst::*;

pub mod num;
pub mod util;
