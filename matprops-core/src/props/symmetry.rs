//! Tri-state symmetry flag and its integer encoding

/// Whether a matrix is known to be symmetric
///
/// Callers that lower inferred annotations pass this as a small integer
/// code; it is decoded exactly once, at the transfer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SymmetryFlag {
    /// Known not to be symmetric
    False = 0,
    /// Known to be symmetric
    True = 1,
    /// Not determined
    #[default]
    Unknown = 2,
}

impl SymmetryFlag {
    /// Boundary code for `False`
    pub const CODE_FALSE: i64 = 0;
    /// Boundary code for `True`
    pub const CODE_TRUE: i64 = 1;
    /// Canonical boundary code for `Unknown`
    pub const CODE_UNKNOWN: i64 = 2;

    /// Decode a boundary code
    ///
    /// `0` and `1` are the definite states; every other code reads as
    /// `Unknown`. Upstream callers only produce the three canonical codes,
    /// so no further validation is done.
    pub const fn from_code(code: i64) -> Self {
        match code {
            Self::CODE_FALSE => SymmetryFlag::False,
            Self::CODE_TRUE => SymmetryFlag::True,
            _ => SymmetryFlag::Unknown,
        }
    }

    /// Encode back into the canonical boundary code
    pub const fn code(self) -> i64 {
        match self {
            SymmetryFlag::False => Self::CODE_FALSE,
            SymmetryFlag::True => Self::CODE_TRUE,
            SymmetryFlag::Unknown => Self::CODE_UNKNOWN,
        }
    }
}

impl From<i64> for SymmetryFlag {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<Option<bool>> for SymmetryFlag {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(false) => SymmetryFlag::False,
            Some(true) => SymmetryFlag::True,
            None => SymmetryFlag::Unknown,
        }
    }
}

impl From<SymmetryFlag> for Option<bool> {
    fn from(flag: SymmetryFlag) -> Self {
        match flag {
            SymmetryFlag::False => Some(false),
            SymmetryFlag::True => Some(true),
            SymmetryFlag::Unknown => None,
        }
    }
}

impl core::fmt::Display for SymmetryFlag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SymmetryFlag::False => write!(f, "false"),
            SymmetryFlag::True => write!(f, "true"),
            SymmetryFlag::Unknown => write!(f, "unknown"),
        }
    }
}
