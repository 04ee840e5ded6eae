use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseGeometryError {
    WrongArity { expected: usize, found: usize },
    InvalidNumber(String),
}

impl fmt::Display for ParseGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseGeometryError::WrongArity { expected, found } => write!(
                f,
                "expected {expected} comma separated values, found {found}"
            ),
            ParseGeometryError::InvalidNumber(raw) => write!(f, "`{raw}` is not a number"),
        }
    }
}

impl std::error::Error for ParseGeometryError {}

/// Splits `"a, b, c"` into exactly `N` numbers.
pub(crate) fn parse_components<const N: usize>(s: &str) -> Result<[f64; N], ParseGeometryError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ParseGeometryError::WrongArity {
            expected: N,
            found: parts.len(),
        });
    }

    let mut values = [0.0; N];
    for (slot, part) in values.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|_| ParseGeometryError::InvalidNumber(part.to_string()))?;
    }

    Ok(values)
}
