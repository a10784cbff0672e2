use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter};
use thiserror::Error;

/// Number of digits in the canonical account representation, and the index of the
/// divisor in every weight table.
pub const CHECKSUM_DIGITS: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown checksum algorithm tag: '{0}'")]
pub struct UnknownAlgorithmTag(pub String);

/// Selects one of the weight tables published for NZ bank account numbers.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter,
)]
pub enum AlgorithmTag {
    A,
    B,
    // Not referenced by any bank in the standard table.
    C,
    D,
    E,
    F,
    G,
    // Identity algorithm, every account passes.
    X,
}

impl AlgorithmTag {
    pub fn definition(self) -> &'static AlgorithmDefinition {
        weights_for(self)
    }

    /// Whether each weighted product is reduced with two rounds of digit summing
    /// before being added to the checksum.
    pub fn folds_digits(self) -> bool {
        matches!(self, AlgorithmTag::E | AlgorithmTag::G)
    }
}

impl FromStr for AlgorithmTag {
    type Err = UnknownAlgorithmTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(AlgorithmTag::A),
            "B" | "b" => Ok(AlgorithmTag::B),
            "C" | "c" => Ok(AlgorithmTag::C),
            "D" | "d" => Ok(AlgorithmTag::D),
            "E" | "e" => Ok(AlgorithmTag::E),
            "F" | "f" => Ok(AlgorithmTag::F),
            "G" | "g" => Ok(AlgorithmTag::G),
            "X" | "x" => Ok(AlgorithmTag::X),
            _ => Err(UnknownAlgorithmTag(s.to_string())),
        }
    }
}

/// 18 positional weights followed by the divisor of the final modulus check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmDefinition([u32; CHECKSUM_DIGITS + 1]);

impl AlgorithmDefinition {
    pub const fn new(table: [u32; CHECKSUM_DIGITS + 1]) -> Self {
        Self(table)
    }

    pub fn weights(&self) -> &[u32] {
        &self.0[..CHECKSUM_DIGITS]
    }

    pub fn divisor(&self) -> u32 {
        self.0[CHECKSUM_DIGITS]
    }

    pub fn as_array(&self) -> &[u32; CHECKSUM_DIGITS + 1] {
        &self.0
    }
}

#[rustfmt::skip]
const ALGORITHM_A: AlgorithmDefinition =
    AlgorithmDefinition::new([0, 0, 6, 3, 7, 9, 0, 0, 10, 5, 8, 4, 2, 1, 0, 0, 0, 0, 11]);
#[rustfmt::skip]
const ALGORITHM_B: AlgorithmDefinition =
    AlgorithmDefinition::new([0, 0, 0, 0, 0, 0, 0, 0, 10, 5, 8, 4, 2, 1, 0, 0, 0, 0, 11]);
#[rustfmt::skip]
const ALGORITHM_C: AlgorithmDefinition =
    AlgorithmDefinition::new([3, 7, 0, 0, 0, 0, 9, 1, 10, 5, 3, 4, 2, 1, 0, 0, 0, 0, 11]);
#[rustfmt::skip]
const ALGORITHM_D: AlgorithmDefinition =
    AlgorithmDefinition::new([0, 0, 0, 0, 0, 0, 0, 7,  6, 5, 4, 3, 2, 1, 0, 0, 0, 0, 11]);
#[rustfmt::skip]
const ALGORITHM_E: AlgorithmDefinition =
    AlgorithmDefinition::new([0, 0, 0, 0, 0, 0, 0, 0,  0, 0, 5, 4, 3, 2, 0, 0, 0, 1, 11]);
#[rustfmt::skip]
const ALGORITHM_F: AlgorithmDefinition =
    AlgorithmDefinition::new([0, 0, 0, 0, 0, 0, 0, 1,  7, 3, 1, 7, 3, 1, 0, 0, 0, 0, 10]);
#[rustfmt::skip]
const ALGORITHM_G: AlgorithmDefinition =
    AlgorithmDefinition::new([0, 0, 0, 0, 0, 0, 0, 1,  3, 7, 1, 3, 7, 1, 0, 3, 7, 1, 10]);
#[rustfmt::skip]
const ALGORITHM_X: AlgorithmDefinition =
    AlgorithmDefinition::new([0, 0, 0, 0, 0, 0, 0, 0,  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);

pub fn weights_for(tag: AlgorithmTag) -> &'static AlgorithmDefinition {
    match tag {
        AlgorithmTag::A => &ALGORITHM_A,
        AlgorithmTag::B => &ALGORITHM_B,
        AlgorithmTag::C => &ALGORITHM_C,
        AlgorithmTag::D => &ALGORITHM_D,
        AlgorithmTag::E => &ALGORITHM_E,
        AlgorithmTag::F => &ALGORITHM_F,
        AlgorithmTag::G => &ALGORITHM_G,
        AlgorithmTag::X => &ALGORITHM_X,
    }
}
