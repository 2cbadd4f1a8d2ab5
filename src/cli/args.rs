//! Command-line argument value parsers

use clap_num::number_range;

/// Parse a clip offset percentage (0-100)
pub fn parse_percent(s: &str) -> Result<u8, String> {
    number_range(s, 0, 100)
}

/// Parse a clip length in whole seconds (at least 1)
pub fn parse_clip_seconds(s: &str) -> Result<u32, String> {
    number_range(s, 1, u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("0"), Ok(0));
        assert_eq!(parse_percent("100"), Ok(100));
        assert!(parse_percent("101").is_err());
        assert!(parse_percent("-1").is_err());
        assert!(parse_percent("half").is_err());
    }

    #[test]
    fn test_parse_clip_seconds() {
        assert_eq!(parse_clip_seconds("10"), Ok(10));
        assert!(parse_clip_seconds("0").is_err());
        assert!(parse_clip_seconds("2.5").is_err());
    }
}
