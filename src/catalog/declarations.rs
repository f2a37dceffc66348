//! Printing, variable declarations and constants.

use crate::emitln;
use crate::errors::{ActionResult, PrimerError};
use crate::registry::SnippetRegistry;
use crate::sink::OutputSink;
use crate::snippet::Snippet;

pub fn register(registry: &mut SnippetRegistry) -> Result<(), PrimerError> {
    registry.insert(
        Snippet::new("hello", hello, ["Hello, World!"]).with_summary("print a single line"),
    )?;
    registry.insert(
        Snippet::new(
            "welcome",
            welcome,
            ["Welcome to Go programming, Let's learn Go together."],
        )
        .with_summary("print several operands on one line"),
    )?;
    registry.insert(
        Snippet::new("name", name, ["My name is Alice"])
            .with_summary("declare a typed string variable"),
    )?;
    registry.insert(
        Snippet::new("age", age, ["I am 30 years old."])
            .with_summary("short variable declaration with inferred type"),
    )?;
    registry.insert(
        Snippet::new("sum", sum, ["The sum of 5 and 10 is 15"])
            .with_summary("declare two variables at once and add them"),
    )?;
    registry.insert(
        Snippet::new(
            "mixed-vars",
            mixed_vars,
            ["The value of x is 1.5 and the value of y is Go"],
        )
        .with_summary("declare variables of different inferred types together"),
    )?;
    registry.insert(
        Snippet::new("constant", constant, ["The value of pi is 3.14"])
            .with_summary("declare an untyped constant"),
    )?;
    Ok(())
}

fn hello(out: &mut dyn OutputSink) -> ActionResult {
    out.emit("Hello, World!");
    Ok(())
}

fn welcome(out: &mut dyn OutputSink) -> ActionResult {
    emitln!(out, "Welcome to Go programming,", "Let's learn Go together.");
    Ok(())
}

fn name(out: &mut dyn OutputSink) -> ActionResult {
    let name: &str = "Alice";
    emitln!(out, "My name is", name);
    Ok(())
}

fn age(out: &mut dyn OutputSink) -> ActionResult {
    let age = 30;
    emitln!(out, "I am", age, "years old.");
    Ok(())
}

fn sum(out: &mut dyn OutputSink) -> ActionResult {
    let (a, b): (i64, i64) = (5, 10);
    emitln!(out, "The sum of", a, "and", b, "is", a + b);
    Ok(())
}

fn mixed_vars(out: &mut dyn OutputSink) -> ActionResult {
    let (x, y) = (1.5, "Go");
    emitln!(out, "The value of x is", x, "and the value of y is", y);
    Ok(())
}

#[allow(clippy::approx_constant)]
fn constant(out: &mut dyn OutputSink) -> ActionResult {
    const PI: f64 = 3.14;
    emitln!(out, "The value of pi is", PI);
    Ok(())
}
