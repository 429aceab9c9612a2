#![allow(dead_code)]

use genexpr::{Engine, EngineOptions};
use once_cell::sync::Lazy;

static ENGINE: Lazy<Engine> =
    Lazy::new(|| Engine::new(EngineOptions::default()).expect("builtin registry"));

pub fn engine() -> &'static Engine {
    &ENGINE
}

/// Declare one end-to-end test.
///
/// ```ignore
/// eval_case!(
///     name,
///     input: "first & '.' & last",
///     bindings: { "first" => "ada", "last" => "lovelace" },
///     ast: "(& (& first '.') last)",
///     result: ["ada.lovelace"],
/// );
///
/// eval_case!(
///     name,
///     input: "10 / 0",
///     error: ErrorKind::DivisionByZero,
///     position: 3,
///     message: "Division by zero",
/// );
/// ```
#[macro_export]
macro_rules! eval_case {
    (
        $name:ident,
        input: $input:expr,
        $(bindings: { $($key:literal => $value:expr),* $(,)? },)?
        $(ast: $ast:expr,)?
        $(result: $result:expr,)?
        $(error: $kind:expr,)?
        $(position: $position:expr,)?
        $(message: $message:expr,)?
    ) => {
        #[test]
        fn $name() {
            #[allow(unused_mut)]
            let mut bindings = genexpr::Bindings::new();
            $($(bindings.insert($key, $value);)*)?
            let _ = &bindings;
            let source: &str = $input;
            let engine = $crate::cases::engine();

            $(
                let parsed = engine
                    .parse(source)
                    .unwrap_or_else(|e| panic!("parsing {source:?} failed: {e}"));
                pretty_assertions::assert_eq!(parsed.ast().to_string(), $ast);
            )?

            $(
                let results = engine
                    .generate(source, &bindings)
                    .unwrap_or_else(|e| panic!("evaluating {source:?} failed: {e}"));
                let expected: Vec<&str> = $result.to_vec();
                pretty_assertions::assert_eq!(results, expected);
            )?

            $(
                let err = $crate::cases::failure(engine, source, &bindings);
                pretty_assertions::assert_eq!(err.kind(), $kind);
            )?
            $(
                let err = $crate::cases::failure(engine, source, &bindings);
                pretty_assertions::assert_eq!(err.position(), Some($position));
            )?
            $(
                let err = $crate::cases::failure(engine, source, &bindings);
                pretty_assertions::assert_eq!(err.to_string(), $message);
            )?
        }
    };
}

pub fn failure(engine: &Engine, source: &str, bindings: &genexpr::Bindings) -> genexpr::Error {
    match engine.generate(source, bindings) {
        Ok(results) => panic!("{source:?} should fail but produced {results:?}"),
        Err(err) => err,
    }
}
