use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E0001.to_string(), "E0001");
    assert_eq!(ErrorCode::E6002.as_str(), "E6002");
}

#[test]
fn test_predicate_exclusivity() {
    for code in ErrorCode::ALL {
        let phases = [
            code.is_compile_error(),
            code.is_runtime_error(),
            code.is_driver_error(),
        ];
        assert_eq!(
            phases.iter().filter(|p| **p).count(),
            1,
            "{code} must belong to exactly one phase"
        );
    }
}

#[test]
fn test_from_str_round_trip() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("e0005".parse::<ErrorCode>(), Ok(ErrorCode::E0005));
    assert_eq!("E1234".parse::<ErrorCode>(), Err(()));
}
