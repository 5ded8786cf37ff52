//! Utility functions for destructuring lint rules

use std::borrow::Cow;

use oxc_ast::ast::{
    BindingPattern, FormalParameters, ObjectPattern, PropertyKey,
};

/// Get the comparison name of a destructured binding's key.
///
/// - A non-computed identifier key (including shorthand) yields the
///   identifier's name.
/// - A string or numeric literal key yields the literal's value, computed or
///   not. Numbers render in canonical decimal form (`2` -> "2").
/// - A computed template literal with no substitutions yields its cooked
///   text.
/// - Any other computed key (call, binary expression, identifier reference,
///   update expression, ...) has no name known at lint time and yields
///   `None`.
pub fn binding_key_name<'a>(key: &PropertyKey<'a>) -> Option<Cow<'a, str>> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(Cow::Borrowed(ident.name.as_str())),
        PropertyKey::StringLiteral(lit) => Some(Cow::Borrowed(lit.value.as_str())),
        PropertyKey::NumericLiteral(lit) => Some(Cow::Owned(lit.value.to_string())),
        PropertyKey::TemplateLiteral(template)
            if template.expressions.is_empty() && template.quasis.len() == 1 =>
        {
            template.quasis[0]
                .value
                .cooked
                .as_ref()
                .map(|cooked| Cow::Borrowed(cooked.as_str()))
        }
        _ => None,
    }
}

/// Match the `({ ... })` parameter shape: exactly one parameter, no rest
/// parameter, and the parameter is an object pattern.
pub fn single_object_parameter<'a, 'b>(
    params: &'b FormalParameters<'a>,
) -> Option<&'b ObjectPattern<'a>> {
    if params.rest.is_some() || params.items.len() != 1 {
        return None;
    }

    match &params.items[0].pattern {
        BindingPattern::ObjectPattern(pattern) => Some(&**pattern),
        _ => None,
    }
}
