use std::fmt::Display;
use std::str::FromStr;
use std::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign, DivAssign};
use num_traits::{Zero, One, Signed};
use num_integer::Integer;
use auto_impl_ops::auto_ops;
use crate::Field;

/// A fraction `numer / denom`, kept reduced with `denom > 0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

impl<T> Ratio<T> {
    #[inline]
    const fn new_raw(numer: T, denom: T) -> Ratio<T> {
        Ratio { numer, denom }
    }

    #[inline]
    pub const fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub const fn denom(&self) -> &T {
        &self.denom
    }
}

impl<T> Ratio<T>
where T: Integer + Signed + Clone {
    pub fn new(numer: T, denom: T) -> Ratio<T> {
        assert!(!denom.is_zero());

        let mut ret = Ratio::new_raw(numer, denom);
        ret.reduce();
        ret
    }

    pub fn from_numer(a: T) -> Self {
        Self::new_raw(a, T::one())
    }

    pub fn is_numer(&self) -> bool { 
        self.denom.is_one()
    }

    fn reduce(&mut self) {
        if self.numer.is_zero() {
            if !self.denom.is_one() { 
                self.denom = T::one();
            }
            return;
        }

        if self.denom.is_negative() { 
            self.numer = -self.numer.clone();
            self.denom = -self.denom.clone();
        }

        if self.denom.is_one() { 
            return
        }

        let g = self.numer.gcd(&self.denom); // positive

        if !g.is_one() {
            self.numer = self.numer.clone() / g.clone();
            self.denom = self.denom.clone() / g;
        }
    }
}

impl<T> From<T> for Ratio<T>
where T: Integer + Signed + Clone {
    fn from(a: T) -> Self {
        Self::from_numer(a)
    }
}

impl<T> FromStr for Ratio<T>
where T: Integer + Signed + Clone + FromStr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(a) = s.parse::<T>() {
            return Ok(Self::from_numer(a))
        } 
        
        let r = regex::Regex::new(r"^(.+)/(.+)$").unwrap();
        if let Some(c) = r.captures(s) { 
            let (s1, s2) = (c[1].trim(), c[2].trim());
            if let (Ok(a), Ok(b)) = (s1.parse::<T>(), s2.parse::<T>()) {
                if !b.is_zero() { 
                    return Ok(Self::new(a, b))
                }
            }
        }

        // finite decimals, e.g. "-1.25" = -125/100
        let r = regex::Regex::new(r"^([+-]?)(\d*)\.(\d+)$").unwrap();
        if let Some(c) = r.captures(s) { 
            let digits = format!("{}{}", &c[2], &c[3]);
            let scale = format!("1{}", "0".repeat(c[3].len()));
            if let (Ok(a), Ok(b)) = (digits.parse::<T>(), scale.parse::<T>()) {
                let x = Self::new(a, b);
                return Ok(if &c[1] == "-" { -x } else { x })
            }
        }

        Err(format!("cannot parse string: '{s}'"))
    }
}

impl<T> Display for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denom.is_one() { 
            write!(f, "{}", self.numer)
        } else { 
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<T> Zero for Ratio<T>
where T: Integer + Signed + Clone {
    fn zero() -> Self {
        Self::from_numer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T> One for Ratio<T>
where T: Integer + Signed + Clone {
    fn one() -> Self {
        Self::from_numer(T::one())
    }

    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

macro_rules! impl_add_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        #[auto_ops]
        impl<T> $trait<&Ratio<T>> for Ratio<T>
        where T: Integer + Signed + Clone {
            fn $method(&mut self, rhs: &Ratio<T>) {
                if rhs.is_zero() { 
                    return
                }

                let (a, b) = (&self.numer, &self.denom);
                let (c, d) = ( &rhs.numer,  &rhs.denom);

                let l = b.lcm(d); // l = xb = yd
                let x = l.clone() / b.clone();
                let y = l.clone() / d.clone();
                let numer = a.clone() * x $op c.clone() * y;

                *self = Ratio::new(numer, l);
            }
        }
    };
}

impl_add_assign_op!(AddAssign, add_assign, +);
impl_add_assign_op!(SubAssign, sub_assign, -);

impl<T> Neg for Ratio<T>
where T: Integer + Signed + Clone {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-self.numer, self.denom)
    }
}

impl<T> Neg for &Ratio<T>
where T: Integer + Signed + Clone {
    type Output = Ratio<T>;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-self.numer.clone(), self.denom.clone())
    }
}

#[auto_ops]
impl<T> MulAssign<&Ratio<T>> for Ratio<T>
where T: Integer + Signed + Clone {
    fn mul_assign(&mut self, rhs: &Ratio<T>) {
        let (a, b) = (&self.numer, &self.denom);
        let (c, d) = ( &rhs.numer,  &rhs.denom);

        // cancel crosswise first to keep the entries small.
        let k = a.gcd(d); // a = ka', d = kd'
        let l = b.gcd(c); // b = lb', c = lc'

        let numer = (a.clone() / k.clone()) * (c.clone() / l.clone());
        let denom = (b.clone() / l) * (d.clone() / k);

        *self = Ratio::new(numer, denom);
    }
}

#[auto_ops]
impl<T> DivAssign<&Ratio<T>> for Ratio<T>
where T: Integer + Signed + Clone {
    fn div_assign(&mut self, rhs: &Ratio<T>) {
        assert!(!rhs.is_zero());
        let inv = Ratio::new(rhs.denom.clone(), rhs.numer.clone());
        *self *= &inv;
    }
}

impl<T> Field for Ratio<T>
where T: Integer + Signed + Clone + Display + std::fmt::Debug {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() { 
            None
        } else { 
            Some(Self::new(self.denom.clone(), self.numer.clone()))
        }
    }

    fn math_symbol() -> String {
        String::from("Q")
    }
}
