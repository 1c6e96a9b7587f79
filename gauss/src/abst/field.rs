use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{One, Zero};

// Fields 

pub trait Field: 
    Clone + 
    PartialEq + 
    Debug + 
    Display + 
    Zero + 
    One + 
    Neg<Output = Self> + 
    Add<Output = Self> + 
    Sub<Output = Self> + 
    Mul<Output = Self> + 
    Div<Output = Self>
{
    /// The multiplicative inverse, `None` exactly when `self` is zero.
    fn inv(&self) -> Option<Self>;
    fn math_symbol() -> String;
}

impl Field for f64 {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() { 
            None
        } else { 
            Some(1.0 / self)
        }
    }

    fn math_symbol() -> String {
        String::from("R")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
 
    #[test]
    fn inv_f64() { 
        assert_eq!(2.0_f64.inv(), Some(0.5));
        assert_eq!((-4.0_f64).inv(), Some(-0.25));
        assert_eq!(0.0_f64.inv(), None);
        assert_eq!((-0.0_f64).inv(), None);
    }

    #[test]
    fn symbol() { 
        assert_eq!(f64::math_symbol(), "R");
    }
}
