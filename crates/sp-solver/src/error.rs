//! Error types for shortest-path queries.

use std::fmt;

use thiserror::Error;

/// Which end of a query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Reasons a query returns no path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("{endpoint} node is not in the graph")]
    UnknownEndpoint { endpoint: Endpoint },

    #[error("no route connects start to end")]
    NoRoute,
}

pub type PathResult<T> = Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_endpoint() {
        let err = PathError::UnknownEndpoint {
            endpoint: Endpoint::End,
        };
        assert_eq!(err.to_string(), "end node is not in the graph");
        assert_eq!(PathError::NoRoute.to_string(), "no route connects start to end");
    }
}
