//! sort-destructure-keys
//!
//! Require the keys of a destructured object parameter to be sorted.
//! Checks functions and arrow functions taking a single object pattern,
//! e.g. `function draw({height, width}) {}`.

use std::borrow::Cow;
use std::cmp::Ordering;

use oxc_ast::ast::{
    ArrowFunctionExpression, BindingPattern, Function, ObjectPattern,
};
use oxc_span::{GetSpan, Span};
use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::utils::{binding_key_name, single_object_parameter};
use crate::{RuleCategory, RuleMeta};

/// Base sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

fn default_case_sensitive() -> bool {
    true
}

fn default_min_keys() -> usize {
    2
}

/// Configuration for sort-destructure-keys
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortDestructureKeysConfig {
    /// Base direction keys are expected in
    #[serde(default)]
    pub order: Order,
    /// Compare keys without case folding
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
    /// Treat embedded digit runs as numeric magnitudes ("2" before "11")
    #[serde(default)]
    pub natural: bool,
    /// Minimum number of bindings in a pattern before ordering is enforced
    #[serde(default = "default_min_keys")]
    pub min_keys: usize,
}

impl Default for SortDestructureKeysConfig {
    fn default() -> Self {
        Self {
            order: Order::Asc,
            case_sensitive: true,
            natural: false,
            min_keys: 2,
        }
    }
}

type KeyComparator = fn(&str, &str) -> bool;

fn asc(a: &str, b: &str) -> bool {
    a <= b
}

fn asc_insensitive(a: &str, b: &str) -> bool {
    a.to_lowercase() <= b.to_lowercase()
}

fn asc_natural(a: &str, b: &str) -> bool {
    natord::compare(a, b) != Ordering::Greater
}

fn asc_insensitive_natural(a: &str, b: &str) -> bool {
    natord::compare_ignore_case(a, b) != Ordering::Greater
}

fn desc(a: &str, b: &str) -> bool {
    asc(b, a)
}

fn desc_insensitive(a: &str, b: &str) -> bool {
    asc_insensitive(b, a)
}

fn desc_natural(a: &str, b: &str) -> bool {
    asc_natural(b, a)
}

fn desc_insensitive_natural(a: &str, b: &str) -> bool {
    asc_insensitive_natural(b, a)
}

fn comparator_for(order: Order, insensitive: bool, natural: bool) -> KeyComparator {
    match (order, insensitive, natural) {
        (Order::Asc, false, false) => asc,
        (Order::Asc, true, false) => asc_insensitive,
        (Order::Asc, false, true) => asc_natural,
        (Order::Asc, true, true) => asc_insensitive_natural,
        (Order::Desc, false, false) => desc,
        (Order::Desc, true, false) => desc_insensitive,
        (Order::Desc, false, true) => desc_natural,
        (Order::Desc, true, true) => desc_insensitive_natural,
    }
}

/// The comparison policy for one rule invocation: a comparator bound once
/// from the configured direction, case handling, and naturalness, together
/// with the labels used to render violation messages. Frozen for the whole
/// traversal.
#[derive(Clone, Copy)]
struct OrderPolicy {
    order: Order,
    insensitive: bool,
    natural: bool,
    comparator: KeyComparator,
}

impl OrderPolicy {
    fn new(config: &SortDestructureKeysConfig) -> Self {
        let insensitive = !config.case_sensitive;
        Self {
            order: config.order,
            insensitive,
            natural: config.natural,
            comparator: comparator_for(config.order, insensitive, config.natural),
        }
    }

    fn is_ordered(&self, prev: &str, next: &str) -> bool {
        (self.comparator)(prev, next)
    }

    fn violation_message(&self, this_name: &str, prev_name: &str) -> String {
        format!(
            "Expected destructure keys to be in {}{}{}ending order. '{}' should be before '{}'.",
            if self.natural { "natural " } else { "" },
            if self.insensitive { "insensitive " } else { "" },
            self.order.as_str(),
            this_name,
            prev_name
        )
    }
}

/// Ordering state for one nesting level of a pattern.
///
/// `prev` is the last comparable key seen at this level, cleared on entry
/// and at each spread. `key_count` is the number of bindings the pattern
/// declares, fixed when the frame is pushed.
struct Frame<'a> {
    prev: Option<(Cow<'a, str>, Span)>,
    key_count: usize,
}

/// Walks one pattern's key sequence and reports out-of-order adjacent pairs.
///
/// Frames form an explicit stack whose depth equals the current pattern
/// nesting depth, so nested patterns are checked independently of their
/// enclosing level.
struct KeyOrderChecker<'a> {
    policy: OrderPolicy,
    min_keys: usize,
    frames: Vec<Frame<'a>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> KeyOrderChecker<'a> {
    fn new(policy: OrderPolicy, min_keys: usize) -> Self {
        Self {
            policy,
            min_keys,
            frames: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn enter_pattern(&mut self, key_count: usize) {
        self.frames.push(Frame {
            prev: None,
            key_count,
        });
    }

    /// Keys on either side of a spread are never compared with each other;
    /// the previous key is forgotten.
    fn spread(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.prev = None;
        }
    }

    /// Record one keyed binding. A key with no lint-time name neither
    /// compares nor clears the previous one.
    fn key(&mut self, name: Option<Cow<'a, str>>, span: Span) {
        let Some(frame) = self.frames.last_mut() else {
            return;
        };
        let Some(name) = name else {
            return;
        };

        if frame.key_count >= self.min_keys {
            if let Some((prev_name, prev_span)) = &frame.prev {
                if !self.policy.is_ordered(prev_name, &name) {
                    self.diagnostics.push(
                        Diagnostic::warning(
                            SortDestructureKeys::NAME,
                            span,
                            self.policy.violation_message(&name, prev_name),
                        )
                        .with_label(*prev_span, format!("'{}' is here", prev_name))
                        .with_help(format!("Move '{}' before '{}'.", name, prev_name)),
                    );
                }
            }
        }

        frame.prev = Some((name, span));
    }

    fn exit_pattern(&mut self) {
        self.frames.pop();
    }

    fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// sort-destructure-keys rule
#[derive(Debug, Clone, Default)]
pub struct SortDestructureKeys {
    pub config: SortDestructureKeysConfig,
}

impl RuleMeta for SortDestructureKeys {
    const NAME: &'static str = "sort-destructure-keys";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl SortDestructureKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SortDestructureKeysConfig) -> Self {
        Self { config }
    }

    /// Check a function taking a single destructured object parameter
    pub fn check_function<'a>(&self, func: &Function<'a>) -> Vec<Diagnostic> {
        match single_object_parameter(&func.params) {
            Some(pattern) => self.check_object_pattern(pattern),
            None => Vec::new(),
        }
    }

    /// Check an arrow function taking a single destructured object parameter
    pub fn check_arrow<'a>(&self, arrow: &ArrowFunctionExpression<'a>) -> Vec<Diagnostic> {
        match single_object_parameter(&arrow.params) {
            Some(pattern) => self.check_object_pattern(pattern),
            None => Vec::new(),
        }
    }

    /// Check one destructuring pattern, including object patterns nested in
    /// its binding values.
    pub fn check_object_pattern<'a>(&self, pattern: &ObjectPattern<'a>) -> Vec<Diagnostic> {
        let mut checker = KeyOrderChecker::new(OrderPolicy::new(&self.config), self.config.min_keys);
        self.scan_object_pattern(pattern, &mut checker);
        checker.into_diagnostics()
    }

    fn scan_object_pattern<'a>(
        &self,
        pattern: &ObjectPattern<'a>,
        checker: &mut KeyOrderChecker<'a>,
    ) {
        // Rest elements count as bindings for the minKeys gate.
        let key_count = pattern.properties.len() + usize::from(pattern.rest.is_some());
        checker.enter_pattern(key_count);

        for property in &pattern.properties {
            checker.key(binding_key_name(&property.key), property.key.span());
            self.scan_binding_pattern(&property.value, checker);
        }

        if pattern.rest.is_some() {
            checker.spread();
        }

        checker.exit_pattern();
    }

    fn scan_binding_pattern<'a>(
        &self,
        binding: &BindingPattern<'a>,
        checker: &mut KeyOrderChecker<'a>,
    ) {
        match binding {
            BindingPattern::ObjectPattern(inner) => self.scan_object_pattern(inner, checker),
            BindingPattern::ArrayPattern(array) => {
                for element in array.elements.iter().flatten() {
                    self.scan_binding_pattern(element, checker);
                }
                if let Some(rest) = &array.rest {
                    self.scan_binding_pattern(&rest.argument, checker);
                }
            }
            BindingPattern::AssignmentPattern(assignment) => {
                self.scan_binding_pattern(&assignment.left, checker);
            }
            BindingPattern::BindingIdentifier(_) => {}
        }
    }
}
