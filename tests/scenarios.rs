// End-to-end scenarios through the public library API: register, run,
// compare, report.

use primer::cli::{execute, Command, Exit};
use primer::compare::{compare, Comparison};
use primer::config::{OutputFormat, RunConfig};
use primer::sink::OutputSink;
use primer::{emitln, ActionResult, Executor, PrimerError, SnippetRegistry, Verdict};
use termcolor::Buffer;

fn run_all(registry: &SnippetRegistry) -> (Exit, String) {
    let mut out = Buffer::no_color();
    let command = Command::Run {
        id: None,
        filter: None,
        diff: false,
        format: OutputFormat::Text,
    };
    let exit = execute(command, registry, &RunConfig::plain(), &mut out).unwrap();
    (exit, String::from_utf8(out.into_inner()).unwrap())
}

#[test]
fn scenario_a_hello_passes() {
    let mut registry = SnippetRegistry::new();
    registry
        .register(
            "hello",
            |out: &mut dyn OutputSink| {
                out.emit("Hello, World!");
                Ok(())
            },
            ["Hello, World!"],
        )
        .unwrap();

    let (exit, out) = run_all(&registry);
    assert_eq!(exit, Exit::Success);
    assert!(out.contains("hello: PASS\n"));
}

#[test]
fn scenario_b_wrong_sum_fails() {
    let mut registry = SnippetRegistry::new();
    registry
        .register(
            "sum",
            |out: &mut dyn OutputSink| {
                let (a, b) = (5, 10);
                emitln!(out, "The sum of", a, "and", b, "is", a + b + 1);
                Ok(())
            },
            ["The sum of 5 and 10 is 15"],
        )
        .unwrap();

    let (exit, out) = run_all(&registry);
    assert_eq!(exit, Exit::Failures);
    assert!(out.contains("sum: FAIL\n"));
}

#[test]
fn scenario_c_missing_id_is_not_found() {
    let registry = SnippetRegistry::new();
    let mut out = Buffer::no_color();
    let command = Command::Run {
        id: Some("missing".into()),
        filter: None,
        diff: false,
        format: OutputFormat::Text,
    };
    let err = execute(command, &registry, &RunConfig::plain(), &mut out).unwrap_err();
    assert!(matches!(err, PrimerError::NotFound { ref id } if id == "missing"));
    assert_eq!(err.to_string(), "NotFoundError: missing");
    assert!(out.into_inner().is_empty());
}

#[test]
fn scenario_d_fault_is_isolated() {
    let mut registry = SnippetRegistry::new();
    registry
        .register(
            "divide",
            |out: &mut dyn OutputSink| -> ActionResult {
                out.emit("dividing");
                let divisor: i64 = "0".parse().map_err(|e| format!("{e}"))?;
                if divisor == 0 {
                    return Err(primer::fault!("integer divide by zero"));
                }
                emitln!(out, 10 / divisor);
                Ok(())
            },
            ["dividing", "5"],
        )
        .unwrap();
    registry
        .register(
            "after",
            |out: &mut dyn OutputSink| {
                out.emit("ran");
                Ok(())
            },
            ["ran"],
        )
        .unwrap();

    let results = Executor::new().run_all(&registry);
    assert_eq!(results[0].verdict(), Verdict::Errored);
    assert_eq!(results[0].actual, ["dividing", "fault: integer divide by zero"]);
    assert_eq!(results[1].verdict(), Verdict::Passed);

    let (exit, out) = run_all(&registry);
    assert_eq!(exit, Exit::Failures);
    assert!(out.ends_with("divide: ERROR\nafter: PASS\nsummary: 1/2 passed\n"));
}

#[test]
fn duplicate_registration_leaves_registry_unchanged() {
    let mut registry = SnippetRegistry::new();
    registry
        .register("pi", |_: &mut dyn OutputSink| Ok(()), ["3.14"])
        .unwrap();
    let err = registry
        .register("pi", |_: &mut dyn OutputSink| Ok(()), ["3.1416"])
        .unwrap_err();
    assert!(matches!(err, PrimerError::DuplicateId { .. }));
    assert_eq!(registry.get("pi").unwrap().expected(), ["3.14"]);
}

#[test]
fn captured_output_compares_equal_to_itself() {
    let registry = primer::catalog::build_default_registry().unwrap();
    let mut executor = Executor::new();
    for snippet in &registry {
        let first = executor.run(snippet);
        let second = executor.run(snippet);
        assert_eq!(compare(&first.actual, &first.actual), Comparison::Match);
        assert_eq!(first, second, "{} is not deterministic", snippet.id());
    }
}
