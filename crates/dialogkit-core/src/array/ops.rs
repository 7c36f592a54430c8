use crate::error::ArrayError;
use ndarray::{Array1, ArrayBase, Data, Dimension};

/// Vector of `length` zeros with a single one at `hot_idx`
pub fn one_hot<A: Clone + From<u8>>(
    hot_idx: usize,
    length: usize,
) -> Result<Array1<A>, ArrayError> {
    if hot_idx >= length {
        return Err(ArrayError::OneHotOutOfRange {
            index: hot_idx,
            length,
        });
    }
    let mut r = Array1::from_elem(length, A::from(0));
    r[hot_idx] = A::from(1);
    Ok(r)
}

/// Check if the training matrix does not contain any samples
pub fn is_training_data_empty<S: Data, D: Dimension>(x: &ArrayBase<S, D>) -> bool {
    x.shape().first().is_some_and(|rows| *rows == 0)
}
