use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rewrite rules, in the order they are tried against each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `2+3 = 5`
    /// `2*3 = 6`
    ConstantFold,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a*(b+c) = a*b + a*c`
    DistributiveProperty,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::ConstantFold => "constant folding",
            Self::MultiplyZero => "multiplication by zero",
            Self::AddZero => "addition of zero",
            Self::MultiplyOne => "multiplication by one",
            Self::DistributiveProperty => "distributive property",
        };
        f.write_str(name)
    }
}
