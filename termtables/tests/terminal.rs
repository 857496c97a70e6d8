use termtables::terminal::{merge_sizes, parse_env_size, Size, TermError};

fn size(lines: u16, columns: u16) -> Size {
    Size { lines, columns }
}

fn no_tty() -> Result<Size, TermError> {
    Err(TermError::NoTty)
}

#[test]
fn test_parse_env_size_both() {
    let parsed = parse_env_size(Some("24"), Some("80")).unwrap();
    assert_eq!(parsed, Some(size(24, 80)));
}

#[test]
fn test_parse_env_size_missing_field_is_zero() {
    assert_eq!(parse_env_size(None, Some("132")).unwrap(), Some(size(0, 132)));
    assert_eq!(parse_env_size(Some("50"), None).unwrap(), Some(size(50, 0)));
}

#[test]
fn test_parse_env_size_absent() {
    assert_eq!(parse_env_size(None, None).unwrap(), None);
    assert_eq!(parse_env_size(Some(""), Some("")).unwrap(), None);
}

#[test]
fn test_parse_env_size_invalid() {
    let err = parse_env_size(Some("24"), Some("wide")).unwrap_err();
    assert!(matches!(
        err,
        TermError::InvalidEnv { name: "COLUMNS", ref value } if value == "wide"
    ));
    assert_eq!(err.to_string(), "invalid $COLUMNS: \"wide\"");
}

#[test]
fn test_parse_env_size_out_of_range() {
    assert!(parse_env_size(Some("70000"), None).is_err());
    assert!(parse_env_size(Some("-1"), None).is_err());
}

#[test]
fn test_merge_complete_env_skips_tty() {
    let merged = merge_sizes(Some(size(30, 100)), || -> Result<Size, TermError> {
        panic!("tty should not be queried")
    });
    assert_eq!(merged.unwrap(), size(30, 100));
}

#[test]
fn test_merge_partial_env_overlays_tty() {
    let merged = merge_sizes(Some(size(0, 132)), || Ok(size(40, 90)));
    assert_eq!(merged.unwrap(), size(40, 132));

    let merged = merge_sizes(Some(size(12, 0)), || Ok(size(40, 90)));
    assert_eq!(merged.unwrap(), size(12, 90));
}

#[test]
fn test_merge_without_env_uses_tty() {
    assert_eq!(merge_sizes(None, || Ok(size(40, 90))).unwrap(), size(40, 90));
}

#[test]
fn test_merge_tty_failure_falls_back_to_partial_env() {
    assert_eq!(merge_sizes(Some(size(0, 132)), no_tty).unwrap(), size(0, 132));
}

#[test]
fn test_merge_tty_failure_without_env() {
    assert!(matches!(merge_sizes(None, no_tty), Err(TermError::NoTty)));
}

#[test]
fn test_max_columns_is_positive_and_stable() {
    let columns = termtables::max_columns();
    assert!(columns > 0);
    assert_eq!(termtables::max_columns(), columns);
}
