//! Offset cursor arithmetic
//!
//! Cursors are decimal offsets encoded as strings. An empty cursor means the
//! first page on the way in and the end of the collection on the way out.

use std::num::ParseIntError;

/// Parse a cursor into an offset; `None` for the first page
pub fn parse_cursor(cursor: &str) -> Result<Option<u64>, ParseIntError> {
    if cursor.is_empty() {
        return Ok(None);
    }
    cursor.parse::<u64>().map(Some)
}

/// Compute the next cursor from the values the datasource echoed back
///
/// The echoed `limit` is used rather than the requested page size, since the
/// datasource may cap the page below what was asked. Returns `None` when the
/// sum overflows.
pub fn next_cursor(more: bool, limit: i64, offset: i64) -> Option<String> {
    if !more {
        return Some(String::new());
    }
    limit.checked_add(offset).map(|next| next.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cursor() {
        assert_eq!(parse_cursor("").unwrap(), None);
        assert_eq!(parse_cursor("0").unwrap(), Some(0));
        assert_eq!(parse_cursor("9900").unwrap(), Some(9900));
    }

    #[test]
    fn test_parse_cursor_rejects_garbage() {
        assert!(parse_cursor("abc").is_err());
        assert!(parse_cursor("-5").is_err());
        assert!(parse_cursor("1.5").is_err());
        assert!(parse_cursor(" 10").is_err());
    }

    #[test]
    fn test_next_cursor_end_of_collection() {
        assert_eq!(next_cursor(false, 10, 90).unwrap(), "");
    }

    #[test]
    fn test_next_cursor_uses_echoed_values() {
        assert_eq!(next_cursor(true, 10, 0).unwrap(), "10");
        assert_eq!(next_cursor(true, 25, 100).unwrap(), "125");
    }

    #[test]
    fn test_next_cursor_overflow() {
        assert!(next_cursor(true, i64::MAX, 1).is_none());
    }
}
