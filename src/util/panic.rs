/// Asserts that the provided block panics. When a message is given as a second argument, the panic
/// payload must contain it.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $expected:expr) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($expected),
                    "panic message {message:?} should contain {:?}",
                    $expected
                );
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
