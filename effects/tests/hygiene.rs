//! Hygiene: source-level budgets for the effects crate.
//!
//! Scans `src/` (test files excluded) for patterns that panic or silently
//! drop errors. Budgets only ever go down.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    hint: &'static str,
}

// Panics.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, hint: "propagate with `?` or match" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, hint: "propagate with `?` or match" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, hint: "return a FeatureError" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, hint: "make the state unrepresentable" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, hint: "finish the stub" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, hint: "finish the stub" };

// Silent loss.
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, hint: "inspect or log the value" };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0, hint: "match the error and say why it is dropped" };

// Structure.
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, hint: "delete the dead code" };
const PRINTLN: Budget = Budget { pattern: "println!(", max: 0, hint: "log through the `log` facade" };

fn production_files(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            production_files(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn check(budget: &Budget) {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under effects/src");

    let hits = files
        .iter()
        .map(|(path, content)| (path, content.lines().filter(|l| l.contains(budget.pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect::<Vec<_>>();
    let found: usize = hits.iter().map(|(_, n)| n).sum();
    let listing = hits
        .iter()
        .map(|(path, n)| format!("  {}: {n}", path.display()))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(
        found <= budget.max,
        "`{}` budget exceeded: found {found}, max {} ({}).\n{listing}",
        budget.pattern,
        budget.max,
        budget.hint
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}

#[test]
fn println_budget() {
    check(&PRINTLN);
}
