//! Unified visitor pattern for running the lint rules in a single AST pass
//!
//! This module provides a `LintRunner` that traverses the AST once and runs
//! all enabled rules during the traversal, collecting diagnostics. The
//! `Visit` impl is the dispatch map from node kind to rule check: functions
//! and arrow functions are the only shapes the destructuring rules inspect.

use oxc_ast::ast::{ArrowFunctionExpression, Function, Program};
use oxc_ast_visit::{walk, Visit};
use oxc_span::SourceType;
use oxc_syntax::scope::ScopeFlags;

use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::rules::SortDestructureKeys;

/// Configuration for which rules are enabled
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub sort_destructure_keys: Option<SortDestructureKeys>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            sort_destructure_keys: Some(SortDestructureKeys::new()),
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            sort_destructure_keys: None,
        }
    }

    pub fn with_sort_destructure_keys(mut self, rule: SortDestructureKeys) -> Self {
        self.sort_destructure_keys = Some(rule);
        self
    }
}

/// Unified visitor that runs all enabled rules during a single AST traversal
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        Self { ctx, config }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        self.visit_program(program);
        LintResult {
            diagnostics: self.ctx.into_diagnostics(),
        }
    }

    /// Check a function with all applicable rules
    fn check_function(&mut self, func: &Function<'a>) {
        if let Some(rule) = &self.config.sort_destructure_keys {
            for diagnostic in rule.check_function(func) {
                self.ctx.report(diagnostic);
            }
        }
    }

    /// Check an arrow function with all applicable rules
    fn check_arrow(&mut self, arrow: &ArrowFunctionExpression<'a>) {
        if let Some(rule) = &self.config.sort_destructure_keys {
            for diagnostic in rule.check_arrow(arrow) {
                self.ctx.report(diagnostic);
            }
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn visit_function(&mut self, func: &Function<'a>, flags: ScopeFlags) {
        self.check_function(func);
        walk::walk_function(self, func, flags);
    }

    fn visit_arrow_function_expression(&mut self, arrow: &ArrowFunctionExpression<'a>) {
        self.check_arrow(arrow);
        walk::walk_arrow_function_expression(self, arrow);
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Warning))
            .count()
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(source_text: &'a str, program: &Program<'a>) -> LintResult {
    let ctx = LintContext::new(source_text, SourceType::default());
    let config = RulesConfig::default();
    LintRunner::new(ctx, config).run(program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
    config: RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text, source_type);
    LintRunner::new(ctx, config).run(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;

    use crate::rules::{Order, SortDestructureKeysConfig};

    fn parse_and_lint(source: &str) -> LintResult {
        let allocator = Allocator::default();
        let source_type = SourceType::default();
        let ret = Parser::new(&allocator, source, source_type).parse();
        lint(source, &ret.program)
    }

    fn parse_and_lint_with_config(source: &str, config: RulesConfig) -> LintResult {
        let allocator = Allocator::default();
        let source_type = SourceType::default();
        let ret = Parser::new(&allocator, source, source_type).parse();
        lint_with_config(source, source_type, &ret.program, config)
    }

    #[test]
    fn test_lint_clean_code() {
        let result = parse_and_lint("function draw({height, width}) { return height * width; }");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_lint_unsorted_function_parameter() {
        let result = parse_and_lint("function draw({width, height}) { return height * width; }");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0]
            .message
            .contains("'height' should be before 'width'"));
    }

    #[test]
    fn test_lint_unsorted_arrow_parameter() {
        let result = parse_and_lint("const fn = ({b, a}) => a + b;");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].rule, "sort-destructure-keys");
    }

    #[test]
    fn test_lint_nested_functions_checked_independently() {
        let result =
            parse_and_lint("function outer({b, a}) { return ({d, c}) => [a, b, c, d]; }");
        assert_eq!(result.diagnostics.len(), 2);
    }

    #[test]
    fn test_lint_with_disabled_rules() {
        let result = parse_and_lint_with_config("const fn = ({b, a}) => a;", RulesConfig::none());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_lint_with_custom_config() {
        let config = RulesConfig::none().with_sort_destructure_keys(
            SortDestructureKeys::with_config(SortDestructureKeysConfig {
                order: Order::Desc,
                ..Default::default()
            }),
        );
        let result = parse_and_lint_with_config("const fn = ({b, a}) => a;", config);
        assert!(result.diagnostics.is_empty());

        let config = RulesConfig::none().with_sort_destructure_keys(
            SortDestructureKeys::with_config(SortDestructureKeysConfig {
                order: Order::Desc,
                ..Default::default()
            }),
        );
        let result = parse_and_lint_with_config("const fn = ({a, b}) => a;", config);
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn test_result_counts() {
        let result = parse_and_lint("const fn = ({c, b, a}) => a;");
        assert!(result.has_warnings());
        assert!(!result.has_errors());
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 2);
    }
}
