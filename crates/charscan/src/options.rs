use crate::{MAX_UTF8_LEN, OptionsError};

/// Read buffer size used by [`ScannerOptions::default`].
pub const DEFAULT_READ_CAPACITY: usize = 16;

/// Configuration options for the [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use charscan::{Scanner, ScannerOptions};
///
/// let options = ScannerOptions {
///     read_capacity: 64,
///     ..Default::default()
/// };
/// let scanner = Scanner::with_options("abc".as_bytes(), options).unwrap();
/// assert_eq!(scanner.options().read_capacity, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerOptions {
    /// Size of the scratch buffer each physical read fills.
    ///
    /// Larger buffers mean fewer reads against the underlying source but more
    /// bytes carried between calls. Must be at least [`MAX_UTF8_LEN`] so that
    /// any single code point fits.
    ///
    /// # Default
    ///
    /// [`DEFAULT_READ_CAPACITY`]
    pub read_capacity: usize,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            read_capacity: DEFAULT_READ_CAPACITY,
        }
    }
}

impl ScannerOptions {
    pub(crate) fn validate(self) -> Result<Self, OptionsError> {
        if self.read_capacity < MAX_UTF8_LEN {
            return Err(OptionsError::ReadCapacityTooSmall {
                capacity: self.read_capacity,
            });
        }
        Ok(self)
    }
}
