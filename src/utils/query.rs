//! Search-expression builders for the openFDA Lucene-like query grammar.

const LUCENE_SPECIALS: &[char] = &[
    '\\', '+', '-', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '/', '&', '|',
];

/// Escapes a user-provided value for Lucene-like query syntaxes.
///
/// Conservative on purpose: every special character is escaped so user
/// input cannot change query semantics.
pub(crate) fn escape_lucene(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if LUCENE_SPECIALS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Prefix expression used for name suggestions: matches label entries whose
/// brand or generic name starts with `input`.
pub(crate) fn name_prefix_expression(input: &str) -> String {
    let escaped = escape_lucene(input);
    format!("openfda.brand_name:{escaped}* OR openfda.generic_name:{escaped}*")
}

/// Quoted exact-match expression used when resolving a single label record.
pub(crate) fn name_exact_expression(input: &str) -> String {
    let escaped = escape_lucene(input);
    format!("openfda.brand_name:\"{escaped}\" OR openfda.generic_name:\"{escaped}\"")
}
