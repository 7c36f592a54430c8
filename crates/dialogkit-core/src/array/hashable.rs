//! Hashable wrapper around `ndarray` arrays
//!
//! Arrays are mutable and have no `Hash` impl, so they cannot be used as set
//! members or map keys directly. [`HashableArray`] hashes the contents once,
//! when it is built, and compares by contents afterwards.
//!
//! The wrapped data lives in an [`ArcArray`]. A loose wrapper shares that
//! storage with the caller; writes through another handle copy the storage
//! first, so the cached hash stays valid. A tight wrapper owns a private deep
//! copy from the start and hands out deep copies from [`HashableArray::unwrap`].

use ndarray::{ArcArray, ArrayView, Dimension};
use sha2::{Digest, Sha256};
use std::hash::{Hash, Hasher};

/// Element types that can feed the content hash
pub trait ByteRepr {
    fn write_bytes(&self, hasher: &mut Sha256);
}

macro_rules! int_byte_repr {
    ($($t:ty),*) => {
        $(
            impl ByteRepr for $t {
                fn write_bytes(&self, hasher: &mut Sha256) {
                    hasher.update(self.to_le_bytes());
                }
            }
        )*
    };
}

int_byte_repr!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_byte_repr {
    ($($t:ty),*) => {
        $(
            impl ByteRepr for $t {
                fn write_bytes(&self, hasher: &mut Sha256) {
                    // -0.0 == 0.0, so both must hash alike
                    let value = if *self == 0.0 { 0.0 } else { *self };
                    hasher.update(value.to_le_bytes());
                }
            }
        )*
    };
}

float_byte_repr!(f32, f64);

impl ByteRepr for bool {
    fn write_bytes(&self, hasher: &mut Sha256) {
        hasher.update([*self as u8]);
    }
}

fn content_hash<A: ByteRepr, D: Dimension>(array: &ArcArray<A, D>) -> u64 {
    let mut hasher = Sha256::new();
    for dim in array.shape() {
        hasher.update((*dim as u64).to_le_bytes());
    }
    for element in array.iter() {
        element.write_bytes(&mut hasher);
    }
    let digest = hasher.finalize();
    let mut folded = [0u8; 8];
    folded.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(folded)
}

#[derive(Debug, Clone)]
pub struct HashableArray<A, D: Dimension> {
    wrapped: ArcArray<A, D>,
    tight: bool,
    hash: u64,
}

impl<A: ByteRepr + Clone, D: Dimension> HashableArray<A, D> {
    /// Wrap `wrapped`; with `tight` the wrapper keeps a private deep copy
    pub fn new(wrapped: ArcArray<A, D>, tight: bool) -> Self {
        let hash = content_hash(&wrapped);
        let wrapped = if tight {
            wrapped.to_owned().into_shared()
        } else {
            wrapped
        };
        Self {
            wrapped,
            tight,
            hash,
        }
    }

    /// The wrapped array: a deep copy when tight, a shared handle otherwise
    pub fn unwrap(&self) -> ArcArray<A, D> {
        if self.tight {
            self.wrapped.to_owned().into_shared()
        } else {
            self.wrapped.clone()
        }
    }
}

impl<A, D: Dimension> HashableArray<A, D> {
    pub fn view(&self) -> ArrayView<'_, A, D> {
        self.wrapped.view()
    }

    pub fn is_tight(&self) -> bool {
        self.tight
    }

    pub fn content_hash(&self) -> u64 {
        self.hash
    }
}

impl<A: PartialEq, D: Dimension> PartialEq for HashableArray<A, D> {
    fn eq(&self, other: &Self) -> bool {
        self.wrapped == other.wrapped
    }
}

// Arrays holding NaN are not equal to themselves.
impl<A: PartialEq, D: Dimension> Eq for HashableArray<A, D> {}

impl<A, D: Dimension> Hash for HashableArray<A, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}
