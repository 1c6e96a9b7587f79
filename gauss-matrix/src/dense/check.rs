use derive_more::Display;
use log::trace;
use nalgebra::Scalar;
use gauss::Field;
use crate::{DimError, MatTrait};
use super::Mat;

/// The leading position of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lead { 
    One(usize),
    NotOne(usize),
    Zero
}

impl Lead { 
    pub fn of<R>(target: &Mat<R>, i: usize) -> Lead
    where R: Field { 
        let j = target.row(i).position(|a| !a.is_zero());
        match j { 
            Some(j) if target[(i, j)].is_one() => Lead::One(j),
            Some(j) => Lead::NotOne(j),
            None    => Lead::Zero
        }
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum RrefViolation { 
    #[display("row {row}: leading entry at column {col} is not 1")]
    NotLeadingOne { row: usize, col: usize },

    #[display("row {row}: leading 1 is not right of the one above")]
    Unordered { row: usize },

    #[display("row {row}: column {col} has another non-zero entry at row {other}")]
    NotIsolated { row: usize, col: usize, other: usize },
}

pub fn is_rref<R>(target: &Mat<R>) -> Result<bool, DimError>
where R: Field + Scalar { 
    find_violation(target).map(|v| v.is_none())
}

/// Checks `target` against the RREF conditions in order: leading entries
/// are 1, leading 1's move strictly right with zero rows last, and each 
/// leading 1 is alone in its column.
pub fn find_violation<R>(target: &Mat<R>) -> Result<Option<RrefViolation>, DimError>
where R: Field + Scalar { 
    target.check_shape()?;

    let leads: Vec<_> = (0 .. target.nrows()).map(|i| 
        Lead::of(target, i)
    ).collect();

    let v = check_leading_ones(&leads)
        .or_else(|| check_order(&leads))
        .or_else(|| check_isolated(target, &leads));

    if let Some(v) = &v { 
        trace!("not rref: {v}");
    }

    Ok(v)
}

fn check_leading_ones(leads: &[Lead]) -> Option<RrefViolation> { 
    leads.iter().enumerate().find_map(|(row, l)| 
        match l { 
            Lead::NotOne(col) => Some(RrefViolation::NotLeadingOne { row, col: *col }),
            _ => None
        }
    )
}

fn check_order(leads: &[Lead]) -> Option<RrefViolation> { 
    leads.windows(2).enumerate().find_map(|(i, w)| { 
        let ok = match (w[0], w[1]) { 
            (Lead::One(j0), Lead::One(j1)) => j0 < j1,
            (_, Lead::Zero) => true,
            _ => false
        };
        if ok { None } else { Some(RrefViolation::Unordered { row: i + 1 }) }
    })
}

fn check_isolated<R>(target: &Mat<R>, leads: &[Lead]) -> Option<RrefViolation>
where R: Field { 
    let m = target.nrows();

    // leads are ordered here, so the first zero row ends the search.
    for (row, l) in leads.iter().enumerate() { 
        let Lead::One(col) = *l else { 
            break
        };

        let other = (0 .. m).find(|&k| 
            k != row && !target[(k, col)].is_zero()
        );

        if let Some(other) = other { 
            return Some(RrefViolation::NotIsolated { row, col, other })
        }
    }

    None
}

#[cfg(test)]
mod tests { 
    use super::*;

    fn mat(rows: Vec<Vec<f64>>) -> Mat<f64> { 
        Mat::from_rows(rows).unwrap()
    }

    fn check(rows: Vec<Vec<f64>>) -> Option<RrefViolation> { 
        find_violation(&mat(rows)).unwrap()
    }

    #[test]
    fn lead() { 
        let a = mat(vec![
            vec![0., 1., 5.],
            vec![0., 0., 2.],
            vec![0., 0., 0.],
        ]);
        assert_eq!(Lead::of(&a, 0), Lead::One(1));
        assert_eq!(Lead::of(&a, 1), Lead::NotOne(2));
        assert_eq!(Lead::of(&a, 2), Lead::Zero);
    }

    #[test]
    fn zero_matrix() { 
        let a = mat(vec![vec![0.; 3]; 3]);
        assert_eq!(is_rref(&a), Ok(true));
    }

    #[test]
    fn identity() { 
        let a = mat(vec![
            vec![1., 0.],
            vec![0., 1.],
        ]);
        assert_eq!(is_rref(&a), Ok(true));
    }

    #[test]
    fn free_columns() { 
        assert_eq!(check(vec![
            vec![1., 2., 0., 1.],
            vec![0., 0., 1., 0.],
            vec![0., 0., 0., 0.],
        ]), None);
        assert_eq!(check(vec![
            vec![0., 1., 0., -5.],
            vec![0., 0., 1., 4.],
        ]), None);
        assert_eq!(check(vec![vec![1., 0.5, -0.25]]), None);
    }

    #[test]
    fn not_isolated() { 
        assert_eq!(check(vec![
            vec![1., 1., 0.],
            vec![0., 1., 0.],
            vec![0., 0., 1.],
        ]), Some(RrefViolation::NotIsolated { row: 1, col: 1, other: 0 }));
    }

    #[test]
    fn not_isolated_below() { 
        // fails on order before isolation is looked at.
        assert_eq!(check(vec![
            vec![1., 0.],
            vec![1., 0.],
        ]), Some(RrefViolation::Unordered { row: 1 }));
    }

    #[test]
    fn unordered() { 
        assert_eq!(check(vec![
            vec![0., 0., 1.],
            vec![1., 0., 0.],
            vec![0., 0., 0.],
        ]), Some(RrefViolation::Unordered { row: 1 }));
    }

    #[test]
    fn zero_row_above() { 
        assert_eq!(check(vec![
            vec![0., 0.],
            vec![1., 0.],
        ]), Some(RrefViolation::Unordered { row: 1 }));
    }

    #[test]
    fn not_leading_one() { 
        assert_eq!(check(vec![
            vec![1., 0.],
            vec![0., 2.],
        ]), Some(RrefViolation::NotLeadingOne { row: 1, col: 1 }));

        // reported before any ordering problem.
        assert_eq!(check(vec![
            vec![0., 1.],
            vec![-1., 0.],
        ]), Some(RrefViolation::NotLeadingOne { row: 1, col: 0 }));
    }

    #[test]
    fn nearly_one() { 
        assert_eq!(check(vec![vec![0.9999, 0.]]), Some(RrefViolation::NotLeadingOne { row: 0, col: 0 }));
    }

    #[test]
    fn empty() { 
        let a = Mat::<f64>::from_data((2, 0), []);
        assert_eq!(is_rref(&a), Err(DimError::Empty));
    }

    #[test]
    fn display() { 
        let v = RrefViolation::NotIsolated { row: 1, col: 1, other: 0 };
        assert_eq!(v.to_string(), "row 1: column 1 has another non-zero entry at row 0");
    }
}
