use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a run before the first tick.
///
/// The tick loop itself is total; all of these are raised during setup.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration source had no tokens at all.
    #[error("configuration source is empty: expected an atom count")]
    MissingCount,

    /// The leading count token is not a positive integer.
    #[error("invalid atom count `{0}`: expected a positive integer")]
    InvalidCount(String),

    /// The source ran out before atom `index` was complete.
    #[error("atom {index}: source ended before field `{field}`")]
    ShortRecord { index: usize, field: &'static str },

    /// A record field could not be parsed.
    #[error("atom {index}: cannot read `{field}` from `{token}`")]
    BadField {
        index: usize,
        field: &'static str,
        token: String,
    },

    /// Rejection sampling gave up; the arena is too crowded for this draw.
    #[error("could not place atom {index} without overlap after {attempts} attempts")]
    PlacementExhausted { index: usize, attempts: u32 },

    /// Configuration values that make a run impossible.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_error_names_atom_and_budget() {
        let e = Error::PlacementExhausted { index: 4, attempts: 3 };
        let msg = e.to_string();
        assert!(msg.contains("atom 4"));
        assert!(msg.contains("3 attempts"));
    }

    #[test]
    fn bad_field_shows_offending_token() {
        let e = Error::BadField {
            index: 0,
            field: "radius",
            token: "abc".to_string(),
        };
        assert_eq!(e.to_string(), "atom 0: cannot read `radius` from `abc`");
    }
}
