use crate::error::ParseError;

/// Read integers out of free-form text.
///
/// Tokens are separated by whitespace and/or commas. A single enclosing pair
/// of square brackets is accepted so `[1, 2, 3]` parses the same as `1 2 3`.
/// Blank input yields an empty vector.
pub fn parse_sequence(input: &str) -> Result<Vec<i64>, ParseError> {
    let body = strip_brackets(input.trim());

    body.split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect()
}

fn strip_brackets(s: &str) -> &str {
    s.strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_separated() {
        assert_eq!(parse_sequence("1 1  2\n3\t3").unwrap(), vec![1, 1, 2, 3, 3]);
    }

    #[test]
    fn comma_separated_with_brackets() {
        assert_eq!(parse_sequence("[1,1,2, 2]").unwrap(), vec![1, 1, 2, 2]);
    }

    #[test]
    fn signs_accepted() {
        assert_eq!(parse_sequence("-3,+3,0").unwrap(), vec![-3, 3, 0]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(parse_sequence("").unwrap().is_empty());
        assert!(parse_sequence("  \n ").unwrap().is_empty());
        assert!(parse_sequence("[]").unwrap().is_empty());
    }

    #[test]
    fn trailing_comma_ignored() {
        assert_eq!(parse_sequence("4,4,").unwrap(), vec![4, 4]);
    }

    #[test]
    fn invalid_token_reports_position() {
        let err = parse_sequence("1, 2, three").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidInteger {
                token: "three".to_string(),
                position: 3,
            }
        );
    }

    #[test]
    fn overflow_is_invalid() {
        assert!(parse_sequence("99999999999999999999").is_err());
    }

    #[test]
    fn unbalanced_bracket_is_invalid() {
        assert!(parse_sequence("[1, 2").is_err());
    }
}
