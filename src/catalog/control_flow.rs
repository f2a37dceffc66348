//! Loops, conditionals with init statements, and switch.

use crate::emitln;
use crate::errors::{ActionResult, PrimerError};
use crate::registry::SnippetRegistry;
use crate::sink::OutputSink;
use crate::snippet::Snippet;

pub fn register(registry: &mut SnippetRegistry) -> Result<(), PrimerError> {
    registry.insert(
        Snippet::new(
            "for-loop",
            for_loop,
            (0..5).map(|i| format!("Iteration: {i}")),
        )
        .with_summary("three-clause for loop"),
    )?;
    registry.insert(
        Snippet::new(
            "even-odd",
            even_odd,
            ["1 is odd", "2 is even", "3 is odd", "4 is even", "5 is odd"],
        )
        .with_summary("if/else inside a loop"),
    )?;
    registry.insert(
        Snippet::new("if-init", if_init, ["Hello, Alice!"])
            .with_summary("if with an init statement scoped to the branch"),
    )?;
    registry.insert(
        Snippet::new("switch", switch, ["key is 3"]).with_summary("switch over an integer key"),
    )?;
    Ok(())
}

fn for_loop(out: &mut dyn OutputSink) -> ActionResult {
    for i in 0..5 {
        emitln!(out, "Iteration:", i);
    }
    Ok(())
}

fn even_odd(out: &mut dyn OutputSink) -> ActionResult {
    for i in 1..=5 {
        if i % 2 == 0 {
            emitln!(out, i, "is even");
        } else {
            emitln!(out, i, "is odd");
        }
    }
    Ok(())
}

fn if_init(out: &mut dyn OutputSink) -> ActionResult {
    let greeting = {
        let name = "Alice";
        if name == "Alice" {
            format!("Hello, {name}!")
        } else {
            "Hello, stranger!".to_string()
        }
    };
    out.emit(&greeting);
    Ok(())
}

fn switch(out: &mut dyn OutputSink) -> ActionResult {
    let key = 3;
    let line = match key {
        1 => "key is 1",
        2 => "key is 2",
        3 => "key is 3",
        _ => "key is not in range [1,3]",
    };
    out.emit(line);
    Ok(())
}
