// crates/mpf-core/src/options.rs

use crate::error::{MpfError, Result};
use crate::format::DEFAULT_DIMENSIONALITY;

/// Where the record vector width comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionPolicy {
    /// Enforce this width and ignore the header's declared value.
    Fixed(u32),
    /// Use the dimensionality declared in the header.
    Declared,
}

/// How header text fields are turned into strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextPolicy {
    /// Invalid UTF-8 is shown with replacement characters.
    #[default]
    Lossy,
    /// Invalid UTF-8 is an error.
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    pub dimension: DimensionPolicy,
    pub text: TextPolicy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            dimension: DimensionPolicy::Fixed(DEFAULT_DIMENSIONALITY),
            text: TextPolicy::Lossy,
        }
    }
}

impl DimensionPolicy {
    /// Pick the vector width for a stream whose header declares `declared`.
    pub fn resolve(self, declared: u32) -> Result<u32> {
        let dim = match self {
            DimensionPolicy::Fixed(n) => {
                if n != declared {
                    tracing::warn!(
                        declared,
                        enforced = n,
                        "declared dimensionality ignored in favour of fixed width"
                    );
                }
                n
            }
            DimensionPolicy::Declared => declared,
        };
        if dim == 0 {
            return Err(MpfError::MalformedHeader("dimensionality must be non-zero".into()));
        }
        Ok(dim)
    }
}
