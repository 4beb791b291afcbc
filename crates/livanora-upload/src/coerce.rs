//! Cell-level coercions applied while mapping a spreadsheet row
//!
//! Each helper takes the raw optional cell value and either returns the typed
//! value or a message describing why the cell is unusable. Callers attach the
//! row and column.

/// Treat missing and whitespace-only cells alike
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse an integer cell
///
/// Spreadsheet exports sometimes write whole numbers as `3.0`; those are
/// accepted as long as no fractional part is lost.
pub fn integer(value: Option<&str>) -> Result<i64, String> {
    let raw = present(value).ok_or_else(|| "value is missing".to_string())?;
    let trimmed = raw.trim();

    // Plain integers, or `<digits>.0+`; parsed as text to keep all 64 bits
    let whole = match trimmed.split_once('.') {
        Some((whole, fraction))
            if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') =>
        {
            whole
        },
        Some(_) => return Err(format!("'{}' is not an integer", raw)),
        None => trimmed,
    };

    whole
        .parse::<i64>()
        .map_err(|_| format!("'{}' is not an integer", raw))
}

/// Parse a boolean flag cell; an empty cell is `false`
pub fn flag(value: Option<&str>) -> Result<bool, String> {
    let Some(raw) = present(value) else {
        return Ok(false);
    };

    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "1.0" | "yes" | "ja" => Ok(true),
        "false" | "0" | "0.0" | "no" | "nein" => Ok(false),
        _ => Err(format!("'{}' is not a boolean", raw)),
    }
}

/// Split a comma separated tag cell into trimmed, non-empty tags
pub fn tags(value: Option<&str>) -> Vec<String> {
    present(value)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Replace every line break (`\r\n`, `\n` or `\r`) with a single space
pub fn single_line(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

/// Cell text as-is, or empty when the cell is missing
pub fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Document key from the identifier cell
///
/// Firestore refuses ids containing `/` as well as `.` and `..`.
pub fn document_id(value: Option<&str>) -> Result<String, String> {
    let id = present(value)
        .map(str::trim)
        .ok_or_else(|| "identifier is missing".to_string())?;

    if id.contains('/') {
        return Err(format!("identifier '{}' must not contain '/'", id));
    }

    if id == "." || id == ".." {
        return Err(format!("identifier '{}' is reserved", id));
    }

    Ok(id.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_accepts_plain_and_whole_decimal() {
        assert_eq!(integer(Some("42")), Ok(42));
        assert_eq!(integer(Some(" -7 ")), Ok(-7));
        assert_eq!(integer(Some("3.0")), Ok(3));
        assert_eq!(integer(Some("-12.00")), Ok(-12));
        assert_eq!(integer(Some("9007199254740993.0")), Ok(9_007_199_254_740_993));
    }

    #[test]
    fn test_integer_rejects_text_fraction_and_blank() {
        assert!(integer(Some("high")).unwrap_err().contains("'high'"));
        assert!(integer(Some("2.5")).is_err());
        assert!(integer(Some("1e3")).is_err());
        assert!(integer(Some("3.")).is_err());
        assert!(integer(Some(".0")).is_err());
        assert!(integer(Some("   ")).is_err());
        assert!(integer(None).is_err());
    }

    #[test]
    fn test_flag_spellings() {
        assert_eq!(flag(Some("TRUE")), Ok(true));
        assert_eq!(flag(Some("True")), Ok(true));
        assert_eq!(flag(Some("1")), Ok(true));
        assert_eq!(flag(Some("ja")), Ok(true));
        assert_eq!(flag(Some("false")), Ok(false));
        assert_eq!(flag(Some("0")), Ok(false));
        assert_eq!(flag(None), Ok(false));
        assert_eq!(flag(Some("")), Ok(false));
        assert!(flag(Some("maybe")).is_err());
    }

    #[test]
    fn test_tags_split_and_trim() {
        assert_eq!(tags(Some("a, b ,c")), vec!["a", "b", "c"]);
        assert_eq!(tags(Some("Morgen")), vec!["Morgen"]);
        assert_eq!(tags(Some("Morgen,,Alltag,")), vec!["Morgen", "Alltag"]);
        assert!(tags(None).is_empty());
        assert!(tags(Some("  ")).is_empty());
    }

    #[test]
    fn test_single_line_replaces_every_break_style() {
        assert_eq!(single_line(Some("line1\nline2")), "line1 line2");
        assert_eq!(single_line(Some("a\r\nb\rc")), "a b c");
        assert_eq!(single_line(None), "");
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(text(Some("  keep\nme ")), "  keep\nme ");
        assert_eq!(text(None), "");
    }

    #[test]
    fn test_document_id() {
        assert_eq!(document_id(Some(" IMP-001 ")), Ok("IMP-001".to_string()));
        assert_eq!(document_id(Some("17")), Ok("17".to_string()));
        assert!(document_id(None).is_err());
        assert!(document_id(Some("")).is_err());
        assert!(document_id(Some("a/b")).is_err());
        assert!(document_id(Some("..")).is_err());
    }
}
