use crate::DimError;

pub trait MatTrait {
    fn shape(&self) -> (usize, usize);
    fn nrows(&self) -> usize { self.shape().0 }
    fn ncols(&self) -> usize { self.shape().1 }
    fn is_square(&self) -> bool { 
        let (m, n) = self.shape();
        m == n
    }
    fn is_empty(&self) -> bool { 
        let (m, n) = self.shape();
        m == 0 || n == 0
    }
    fn check_shape(&self) -> Result<(), DimError> { 
        if self.is_empty() { 
            Err(DimError::Empty)
        } else { 
            Ok(())
        }
    }
}
