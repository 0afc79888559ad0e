//! Shared test utilities for searchable.

pub mod fixtures;
pub mod logging;

/// Table-driven test case structure.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

impl<I, E> TestCase<I, E> {
    pub const fn new(name: &'static str, input: I, expected: E) -> Self {
        Self {
            name,
            input,
            expected,
        }
    }
}

/// Run every case and report all mismatches together.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, test_fn: F) -> Result<(), String>
where
    I: std::fmt::Debug,
    E: std::fmt::Debug + PartialEq,
    F: Fn(&I) -> E,
{
    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| {
            let actual = test_fn(&case.input);
            (actual != case.expected).then(|| {
                format!(
                    "case '{}' with input {:?}: expected {:?}, got {:?}",
                    case.name, case.input, case.expected, actual
                )
            })
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("\n"))
    }
}
