use super::*;
use std::str::FromStr;

#[test]
fn test_as_str_matches_display() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str(), code.to_string());
    }
}

#[test]
fn test_all_variants_classified() {
    for code in ErrorCode::ALL {
        let classes = [
            code.is_linearize_error(),
            code.is_hierarchy_error(),
            code.is_warning(),
        ];
        assert_eq!(
            classes.iter().filter(|&&c| c).count(),
            1,
            "{code} must be in exactly one range"
        );
    }
}

#[test]
fn test_from_str_round_trips() {
    for &code in ErrorCode::ALL {
        assert_eq!(ErrorCode::from_str(code.as_str()), Ok(code));
    }
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!(ErrorCode::from_str("e0001"), Ok(ErrorCode::E0001));
    assert_eq!(ErrorCode::from_str("w0101"), Ok(ErrorCode::W0101));
}

#[test]
fn test_from_str_rejects_unknown() {
    assert_eq!(ErrorCode::from_str("E9999"), Err(()));
    assert_eq!(ErrorCode::from_str(""), Err(()));
}
