//! Input/output index selection for MIMO operations

use crate::error::{Result, ZpkError};

/// Selection of inputs or outputs of a MIMO system
///
/// `All` stands for the full range `0..len`; `Indices` lists the selected
/// indices in the order the results should appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Indices(Vec<usize>),
}

impl Selection {
    /// Resolve into a concrete ordered index list for an axis of length `len`
    ///
    /// # Errors
    /// `OutOfRange` if an explicit index is `>= len`.
    pub fn resolve(&self, len: usize, axis: &'static str) -> Result<Vec<usize>> {
        match self {
            Selection::All => Ok((0..len).collect()),
            Selection::Indices(indices) => {
                if let Some(&index) = indices.iter().find(|&&i| i >= len) {
                    return Err(ZpkError::OutOfRange {
                        axis,
                        index: index as isize,
                        len,
                    });
                }
                Ok(indices.clone())
            }
        }
    }
}

impl From<Vec<usize>> for Selection {
    fn from(indices: Vec<usize>) -> Self {
        Selection::Indices(indices)
    }
}

impl From<&[usize]> for Selection {
    fn from(indices: &[usize]) -> Self {
        Selection::Indices(indices.to_vec())
    }
}

impl From<Option<Vec<usize>>> for Selection {
    fn from(indices: Option<Vec<usize>>) -> Self {
        indices.map_or(Selection::All, Selection::Indices)
    }
}
