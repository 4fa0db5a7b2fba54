/// parses an H3 grid resolution from the command line.
pub fn parse_resolution(s: &str) -> Result<u8, String> {
    let v = s
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("not a resolution: {s}"))?;
    if v > 15 {
        Err(format!(
            "resolution '{v}' is not valid, must be in range [0,15]"
        ))
    } else {
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolution() {
        assert_eq!(parse_resolution("8"), Ok(8));
        assert_eq!(parse_resolution(" 9 "), Ok(9));
        assert!(parse_resolution("16").is_err());
        assert!(parse_resolution("-1").is_err());
        assert!(parse_resolution("fine").is_err());
    }
}
