use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty list for '{0}'. Expected comma-separated numbers (e.g., '1.5,2.0,2.5').")]
    EmptyList(String),

    #[error("Invalid number '{value}' in list for '{key}'.")]
    InvalidNumber { key: String, value: String },

    #[error("Expected {expected} values for '{key}' but found {found}.")]
    WrongLength {
        key: String,
        expected: usize,
        found: usize,
    },
}

/// Parses a comma-separated list of floats such as `1.5, 2.0,2.5`.
///
/// Surrounding brackets are accepted so TOML-style arrays can be passed through `--set`.
pub fn parse_float_list(key: &str, value: &str) -> Result<Vec<f64>, ParseError> {
    let inner = value
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();
    if inner.is_empty() {
        return Err(ParseError::EmptyList(key.to_string()));
    }

    inner
        .split(',')
        .map(str::trim)
        .map(|item| {
            item.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                key: key.to_string(),
                value: item.to_string(),
            })
        })
        .collect()
}

/// Parses exactly three comma-separated floats, as used for box edge lengths.
pub fn parse_triplet(key: &str, value: &str) -> Result<[f64; 3], ParseError> {
    let values = parse_float_list(key, value)?;
    <[f64; 3]>::try_from(values.as_slice()).map_err(|_| ParseError::WrongLength {
        key: key.to_string(),
        expected: 3,
        found: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_bracketed_lists() {
        assert_eq!(
            parse_float_list("sweep.probe-radii", "1.5,2.0, 2.5").unwrap(),
            vec![1.5, 2.0, 2.5]
        );
        assert_eq!(
            parse_float_list("sweep.probe-radii", "[1.75]").unwrap(),
            vec![1.75]
        );
    }

    #[test]
    fn rejects_empty_and_non_numeric_lists() {
        assert_eq!(
            parse_float_list("k", " [ ] "),
            Err(ParseError::EmptyList("k".to_string()))
        );
        assert_eq!(
            parse_float_list("k", "1.0,abc"),
            Err(ParseError::InvalidNumber {
                key: "k".to_string(),
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn triplet_requires_three_values() {
        assert_eq!(
            parse_triplet("cell.dimensions", "16.4721,12.6818,35.3541").unwrap(),
            [16.4721, 12.6818, 35.3541]
        );
        assert_eq!(
            parse_triplet("cell.dimensions", "1,2"),
            Err(ParseError::WrongLength {
                key: "cell.dimensions".to_string(),
                expected: 3,
                found: 2
            })
        );
    }
}
