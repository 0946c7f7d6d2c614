/// Macro for unit tests over every signed operand width.
///
/// Is not possible to use [`test_case::test_case`] because the operand type
/// is different for each generated test.
///
/// The body sees the operand type under the alias given in angle brackets,
/// so a single body is expanded once for `i32`, `i64`, `i128` and `I256`.
#[macro_export(local_inner_macros)]
macro_rules! int_test {
    (
        $name:ident < $t:ident >
        $(attrs = $(#[$meta:meta])* $(,)?)?
        method = $body:block
    ) => {
        paste::paste! {
            $($(#[$meta])*)?
            #[test]
            fn [<$name _i32>]() {
                type $t = i32;
                $body
            }

            $($(#[$meta])*)?
            #[test]
            fn [<$name _i64>]() {
                type $t = i64;
                $body
            }

            $($(#[$meta])*)?
            #[test]
            fn [<$name _i128>]() {
                type $t = i128;
                $body
            }

            $($(#[$meta])*)?
            #[test]
            fn [<$name _i256>]() {
                type $t = bnum::types::I256;
                $body
            }
        }
    };
}
