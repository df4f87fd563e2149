//! Target percentage list parsing

use std::str::FromStr;

/// Semicolon-delimited list of target cumulative percentages, e.g. `10;50;90`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TargetList(Vec<f64>);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid target percentage {token:?}: expected a number")]
pub(crate) struct MalformedTargetList {
    token: String,
}

impl TargetList {
    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl FromStr for TargetList {
    type Err = MalformedTargetList;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(';')
            .map(|token| {
                token
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|target| !target.is_nan())
                    .ok_or_else(|| MalformedTargetList {
                        token: token.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
