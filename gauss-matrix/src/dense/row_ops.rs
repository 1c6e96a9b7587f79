use nalgebra::Scalar;
use gauss::Field;
use gauss::num::Normalizer;
use crate::MatTrait;
use super::Mat;

// Arithmetic row operations. Every written entry passes through the 
// normalizer; `swap_rows` moves values only and needs none.

impl<R> Mat<R>
where R: Field + Scalar { 
    /// `R_i <- c * R_i`
    pub fn scale_row<N>(&mut self, i: usize, c: &R, normalizer: &N)
    where N: Normalizer<R> {
        for j in 0 .. self.ncols() { 
            let a = c.clone() * self[(i, j)].clone();
            self[(i, j)] = normalizer.normalize(a);
        }
    }

    /// `R_target <- R_target + c * R_source`
    pub fn add_scaled_row<N>(&mut self, target: usize, source: usize, c: &R, normalizer: &N)
    where N: Normalizer<R> { 
        for j in 0 .. self.ncols() { 
            let a = self[(target, j)].clone() + c.clone() * self[(source, j)].clone();
            self[(target, j)] = normalizer.normalize(a);
        }
    }
}

#[cfg(test)]
mod tests { 
    use gauss::num::{Exact, Ratio, Tolerance};
    use super::*;

    #[test]
    fn scale_row() { 
        let mut a = Mat::from_data((3, 3), [1.,2.,3.,4.,5.,6.,7.,8.,9.]);
        a.scale_row(1, &10.0, &Tolerance::default());
        assert_eq!(a, Mat::from_data((3, 3), [1.,2.,3.,40.,50.,60.,7.,8.,9.]));
    }

    #[test]
    fn scale_row_normalized() { 
        let mut a = Mat::from_data((1, 3), [3.0, 1.0, -2.0]);
        a.scale_row(0, &(1.0 / 3.0), &Tolerance::default());
        assert_eq!(a, Mat::from_data((1, 3), [1.0, 0.3333, -0.6667]));
    }

    #[test]
    fn scale_row_by_zero() { 
        let mut a = Mat::from_data((2, 2), [1.,2.,3.,4.]);
        a.scale_row(0, &0.0, &Tolerance::default());
        assert_eq!(a, Mat::from_data((2, 2), [0.,0.,3.,4.]));
        assert!(a[(0, 0)].is_sign_positive());
    }

    #[test]
    fn add_scaled_row() { 
        let mut a = Mat::from_data((3, 3), [1.,2.,3.,4.,5.,6.,7.,8.,9.]);
        a.add_scaled_row(1, 0, &10.0, &Tolerance::default());
        assert_eq!(a, Mat::from_data((3, 3), [1.,2.,3.,14.,25.,36.,7.,8.,9.]));
    }

    #[test]
    fn add_scaled_row_cancels() { 
        let mut a = Mat::from_data((2, 3), [1.0, 1.5, 0.0, 0.1, 0.2, 0.3]);
        a.add_scaled_row(1, 0, &-0.1, &Tolerance::default());
        assert_eq!(a, Mat::from_data((2, 3), [1.0, 1.5, 0.0, 0.0, 0.05, 0.3]));
    }

    #[test]
    fn exact_rows() { 
        let q = |p: i64, q: i64| Ratio::new(p, q);
        let mut a = Mat::from_data((2, 2), [q(3, 1), q(1, 1), q(1, 2), q(1, 3)]);

        a.scale_row(0, &q(1, 3), &Exact);
        assert_eq!(a, Mat::from_data((2, 2), [q(1, 1), q(1, 3), q(1, 2), q(1, 3)]));

        a.add_scaled_row(1, 0, &q(-1, 2), &Exact);
        assert_eq!(a, Mat::from_data((2, 2), [q(1, 1), q(1, 3), q(0, 1), q(1, 6)]));
    }
}
