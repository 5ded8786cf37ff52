//! Destructuring lint rules
//!
//! This crate checks the key order of destructured object parameters,
//! ported from the ESLint `sort-destructure-keys` rule. It can be used:
//! 1. Standalone with an oxc AST for custom tooling
//! 2. Integrated with a larger rule runner as a plugin (future)

pub mod rules;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;

pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use rules::*;
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, RulesConfig};

/// Rule category for destructuring rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that detect code that is likely to be incorrect
    Correctness,
    /// Rules that suggest improvements
    Pedantic,
    /// Rules that encourage best practices
    Style,
    /// Rules that may have false positives (experimental)
    Nursery,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// URL to documentation
    fn docs_url() -> String {
        format!("https://eslint.org/docs/rules/{}", Self::NAME)
    }
}
