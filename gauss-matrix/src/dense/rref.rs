use log::{debug, trace};
use nalgebra::Scalar;
use gauss::Field;
use gauss::num::Normalizer;
use crate::{DimError, MatTrait};
use super::Mat;

/// Reduces `target` to RREF in place and returns it.
pub fn reduce<'a, R, N>(target: &'a mut Mat<R>, normalizer: &N) -> Result<&'a mut Mat<R>, DimError>
where R: Field + Scalar, N: Normalizer<R> {
    RrefCalc::new(&mut *target, normalizer)?.process();
    Ok(target)
}

pub fn rref<R, N>(target: &Mat<R>, normalizer: &N) -> Result<RrefResult<R>, DimError>
where R: Field + Scalar, N: Normalizer<R> {
    let copy = target.clone();
    rref_in_place(copy, normalizer)
}

pub fn rref_in_place<R, N>(mut target: Mat<R>, normalizer: &N) -> Result<RrefResult<R>, DimError>
where R: Field + Scalar, N: Normalizer<R> {
    let mut calc = RrefCalc::new(&mut target, normalizer)?;
    calc.process();

    let pivots = calc.pivots;
    Ok(RrefResult { result: target, pivots })
}

#[derive(Debug)]
pub struct RrefResult<R> { 
    result: Mat<R>,
    pivots: Vec<usize>
}

impl<R> RrefResult<R> { 
    pub fn result(&self) -> &Mat<R> { 
        &self.result
    }

    pub fn into_result(self) -> Mat<R> { 
        self.result
    }

    /// Pivot columns, the `i`-th being the column of the leading 1 in row `i`.
    pub fn pivots(&self) -> &[usize] { 
        &self.pivots
    }

    pub fn rank(&self) -> usize { 
        self.pivots.len()
    }
}

/// What happened to one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RrefStep { 
    pub col: usize,
    /// `(from, to)`: the pivot row found, and the row it was moved to.
    pub pivot: Option<(usize, usize)>
}

/// Gauss-Jordan elimination, one column per step. 
/// 
/// Rows `0 .. row` hold isolated leading 1's in increasing columns, 
/// all `< col`.
pub struct RrefCalc<'a, R, N> { 
    target: &'a mut Mat<R>,
    normalizer: &'a N,
    row: usize,
    col: usize,
    pivots: Vec<usize>
}

impl<'a, R, N> RrefCalc<'a, R, N>
where R: Field + Scalar, N: Normalizer<R> {
    pub fn new(target: &'a mut Mat<R>, normalizer: &'a N) -> Result<Self, DimError> { 
        target.check_shape()?;

        debug!("start rref: {:?}, R = {}.", target.shape(), R::math_symbol());
        trace!("\n{}", target);

        Ok(RrefCalc { target, normalizer, row: 0, col: 0, pivots: vec![] })
    }

    pub fn target(&self) -> &Mat<R> { 
        &*self.target
    }

    pub fn pivots(&self) -> &[usize] { 
        &self.pivots
    }

    pub fn is_done(&self) -> bool { 
        let (m, n) = self.target.shape();
        self.row >= m || self.col >= n
    }

    pub fn process(&mut self) { 
        self.process_with(|_, _| ())
    }

    /// Runs to the end, calling `f` after each column.
    pub fn process_with<F>(&mut self, mut f: F)
    where F: FnMut(&RrefStep, &Mat<R>) { 
        while let Some(step) = self.step() { 
            f(&step, self.target());
        }

        debug!("rref done, rank: {}.", self.pivots.len());
        trace!("\n{}", self.target);
    }

    pub fn step(&mut self) -> Option<RrefStep> { 
        if self.is_done() { 
            return None
        }

        let (i, j) = (self.row, self.col);
        let pivot = self.reduce_column(i, j).map(|p| (p, i));

        if pivot.is_some() { 
            self.pivots.push(j);
            self.row += 1;
        }
        self.col += 1;

        Some(RrefStep { col: j, pivot })
    }

    // Returns the pivot row, or None if column `j` is zero from row `i` down.
    fn reduce_column(&mut self, i: usize, j: usize) -> Option<usize> { 
        let (p, u) = self.select_pivot(i, j)?;

        trace!("select-pivot: ({p}, {j})");

        // make a leading 1
        self.target.scale_row(p, &u, self.normalizer);

        // clear the rest of the column
        let m = self.target.nrows();
        for k in (0 .. m).filter(|&k| k != p) { 
            let a = &self.target[(k, j)];
            if a.is_zero() { 
                continue
            }
            let c = -a.clone();
            self.target.add_scaled_row(k, p, &c, self.normalizer);
        }

        if p != i { 
            self.target.swap_rows(i, p);
        }

        Some(p)
    }

    // The first invertible, i.e. non-zero, entry from row `i` down.
    fn select_pivot(&self, i: usize, j: usize) -> Option<(usize, R)> { 
        let m = self.target.nrows();
        (i .. m).find_map(|k| 
            self.target[(k, j)].inv().map(|u| (k, u))
        )
    }
}
