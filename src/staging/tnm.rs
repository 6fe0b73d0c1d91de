//! TNM category parsing and the prefix predicates used by both trees.
//!
//! Predicates match on the start of the canonical code, so `t2a` is both T2
//! and T2a, and `m1c` counts as distant metastasis.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StagingError};

/// Canonical T codes (AJCC 8th, clinical and pathologic).
pub const T_CODES: &[&str] = &[
    "tx", "t0", "t1", "t1a", "t1b", "t1c", "t2", "t2a", "t2b", "t2c", "t3", "t3a", "t3b", "t4",
];

/// Canonical N codes.
pub const N_CODES: &[&str] = &["nx", "n0", "n1"];

/// Canonical M codes.
pub const M_CODES: &[&str] = &["m0", "m1", "m1a", "m1b", "m1c"];

/// TNM axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    T,
    N,
    M,
}

impl Axis {
    pub fn letter(self) -> char {
        match self {
            Axis::T => 't',
            Axis::N => 'n',
            Axis::M => 'm',
        }
    }

    /// Canonical vocabulary for this axis.
    pub fn codes(self) -> &'static [&'static str] {
        match self {
            Axis::T => T_CODES,
            Axis::N => N_CODES,
            Axis::M => M_CODES,
        }
    }

    fn example(self) -> &'static str {
        match self {
            Axis::T => "2a",
            Axis::N => "0",
            Axis::M => "0",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter().to_ascii_uppercase())
    }
}

/// Whether a category was assigned clinically (`c`) or pathologically (`p`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basis {
    Clinical,
    Pathologic,
}

impl Basis {
    pub fn prefix(self) -> char {
        match self {
            Basis::Clinical => 'c',
            Basis::Pathologic => 'p',
        }
    }
}

/// Strip an optional `c`/`p` prefix and check the axis letter.
pub fn normalize(stage: &str, axis: Axis) -> Result<String> {
    split_basis(stage, axis).map(|(_, code)| code)
}

fn split_basis(stage: &str, axis: Axis) -> Result<(Basis, String)> {
    let lowered = stage.trim().to_lowercase();
    let (basis, rest) = match lowered.strip_prefix('p') {
        Some(rest) => (Basis::Pathologic, rest),
        None => (Basis::Clinical, lowered.strip_prefix('c').unwrap_or(lowered.as_str())),
    };
    if !rest.starts_with(axis.letter()) {
        return Err(StagingError::InvalidStageFormat {
            axis,
            example: axis.example(),
            input: stage.to_string(),
        });
    }
    Ok((basis, rest.to_string()))
}

/// A parsed T, N or M category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TnmCategory {
    axis: Axis,
    basis: Basis,
    code: String,
}

impl TnmCategory {
    pub fn parse(raw: &str, axis: Axis) -> Result<Self> {
        let (basis, code) = split_basis(raw, axis)?;
        Ok(Self { axis, basis, code })
    }

    pub fn t(raw: &str) -> Result<Self> {
        Self::parse(raw, Axis::T)
    }

    pub fn n(raw: &str) -> Result<Self> {
        Self::parse(raw, Axis::N)
    }

    pub fn m(raw: &str) -> Result<Self> {
        Self::parse(raw, Axis::M)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Canonical lower-case code without the basis prefix, e.g. `t2a`.
    pub fn code(&self) -> &str {
        &self.code
    }

    fn starts(&self, prefix: &str) -> bool {
        self.code.starts_with(prefix)
    }

    pub fn is_t1(&self) -> bool {
        self.starts("t1")
    }

    pub fn is_t2(&self) -> bool {
        self.starts("t2")
    }

    pub fn is_t2a(&self) -> bool {
        self.starts("t2a")
    }

    pub fn is_t2b_to_t2c(&self) -> bool {
        self.starts("t2b") || self.starts("t2c")
    }

    pub fn is_t3_to_t4(&self) -> bool {
        self.starts("t3") || self.starts("t4")
    }

    /// Exact TX or T0; the only equality check in the predicate set.
    pub fn is_tx_or_t0(&self) -> bool {
        self.code == "tx" || self.code == "t0"
    }

    pub fn has_regional_nodes(&self) -> bool {
        self.starts("n1")
    }

    pub fn has_distant_metastasis(&self) -> bool {
        self.starts("m1")
    }

    pub fn is_m0(&self) -> bool {
        self.starts("m0")
    }

    pub fn is_n0(&self) -> bool {
        self.starts("n0")
    }
}

impl fmt::Display for TnmCategory {
    /// Conventional spelling: `cT1c`, `pN0`, `cTX`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rest = &self.code[1..];
        let rest = if rest == "x" { "X" } else { rest };
        write!(f, "{}{}{}", self.basis.prefix(), self.axis, rest)
    }
}

/// The three categories of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tnm {
    pub t: TnmCategory,
    pub n: TnmCategory,
    pub m: TnmCategory,
}

impl Tnm {
    pub fn parse(t: &str, n: &str, m: &str) -> Result<Self> {
        Ok(Self {
            t: TnmCategory::t(t)?,
            n: TnmCategory::n(n)?,
            m: TnmCategory::m(m)?,
        })
    }

    /// True when every category carries a clinical basis.
    pub fn is_clinical(&self) -> bool {
        [&self.t, &self.n, &self.m]
            .iter()
            .all(|c| c.basis() == Basis::Clinical)
    }
}

impl fmt::Display for Tnm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.t, self.n, self.m)
    }
}
