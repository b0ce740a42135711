use std::ops::{Neg, Not};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub const fn from_negative(negative: bool) -> Self {
        if negative {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Reads the sign from the start of a duration string. Only a leading `-`
    /// makes it negative, `+` and no prefix are both positive.
    pub fn from_prefix(input: &str) -> Self {
        Self::from_negative(input.starts_with(Self::Negative.symbol()))
    }

    pub const fn is_negative(&self) -> bool {
        matches!(self, Self::Negative)
    }

    pub const fn symbol(&self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '-',
        }
    }

    pub const fn factor(&self) -> i128 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

impl Not for Sign {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.neg()
    }
}

impl From<bool> for Sign {
    fn from(negative: bool) -> Self {
        Self::from_negative(negative)
    }
}
