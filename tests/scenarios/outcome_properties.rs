//! Test: Outcome Properties - success and failure are exclusive

use patterns::core::Outcome;

/// Success carries its value for any value
#[test]
fn test_success_for_many_values() {
    for value in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
        let outcome = Outcome::success(value);
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), Some(&value));
        assert_eq!(outcome.message(), None);
    }
}

/// Failure carries its message for any message
#[test]
fn test_failure_for_many_messages() {
    for message in ["", "error", "disk full", "ünïcödé"] {
        let outcome: Outcome<i64> = Outcome::failure(message);
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), Some(message));
        assert_eq!(outcome.value(), None);
    }
}

/// The demonstration values print as expected
#[test]
fn test_demonstration_values() {
    let success: Outcome<i32> = Outcome::success(42);
    let failure: Outcome<i32> = Outcome::failure("error");

    match (&success, &failure) {
        (Outcome::Success(value), Outcome::Failure(message)) => {
            assert_eq!(value.to_string(), "42");
            assert_eq!(message, "error");
        }
        _ => panic!("variants should match their constructors"),
    }
}

/// Failures short-circuit chained computations
#[test]
fn test_chain_stops_at_first_failure() {
    let halve = |n: i32| {
        if n % 2 == 0 {
            Outcome::success(n / 2)
        } else {
            Outcome::failure(format!("{} is odd", n))
        }
    };

    assert_eq!(Outcome::success(8).and_then(halve).and_then(halve), Outcome::Success(2));
    assert_eq!(
        Outcome::success(6).and_then(halve).and_then(halve).message(),
        Some("3 is odd")
    );
}
