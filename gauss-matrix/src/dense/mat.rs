use std::ops::{Index, IndexMut};
use std::fmt::Display;
use nalgebra::{DMatrix, Scalar};
use delegate::delegate;
use gauss::util::format::grid;
use crate::{DimError, MatTrait};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mat<R> {
    inner: DMatrix<R>
}

impl<R> MatTrait for Mat<R> {
    fn shape(&self) -> (usize, usize) {
        (self.inner.nrows(), self.inner.ncols())
    }
}

impl<R> Mat<R> {
    pub fn inner(&self) -> &DMatrix<R> {
        &self.inner
    }

    pub fn row(&self, i: usize) -> impl Iterator<Item = &R> { 
        let n = self.ncols();
        (0 .. n).map(move |j| &self.inner[(i, j)])
    }
}

impl<R> Mat<R>
where R: Scalar {
    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> { 
        DMatrix::from_row_iterator(shape.0, shape.1, data).into()
    }

    /// Builds a matrix from its rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self, DimError> { 
        let m = rows.len();
        let n = rows.first().map(|r| r.len()).unwrap_or(0);

        if m == 0 || n == 0 { 
            return Err(DimError::Empty)
        }

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) { 
            return Err(DimError::Ragged { row, len: r.len(), expected: n })
        }

        Ok(Self::from_data((m, n), rows.into_iter().flatten()))
    }

    pub fn rows(&self) -> Vec<Vec<R>> { 
        (0 .. self.nrows()).map(|i| 
            self.row(i).cloned().collect()
        ).collect()
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.inner.swap_rows(i, j);
    }
}

impl<R> From<DMatrix<R>> for Mat<R> {
    fn from(inner: DMatrix<R>) -> Self {
        Self { inner }
    }
}
 
impl<R> Index<(usize, usize)> for Mat<R> {
    type Output = R;
    delegate! { 
        to self.inner { 
            fn index(&self, index: (usize, usize)) -> &R;
        }
    }
}

impl<R> IndexMut<(usize, usize)> for Mat<R> {
    delegate! { 
        to self.inner { 
            fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output;
        }
    }
}

impl<R> Display for Mat<R>
where R: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = grid((0 .. self.nrows()).map(|i| self.row(i)));
        write!(f, "{s}")
    }
}
