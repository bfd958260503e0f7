// Shared prompt constants and rendering.
// Each flow that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Closing instruction appended to every flow template.
pub const JSON_SCHEMA_INSTRUCTION: &str = "\
    Respond with a single JSON object that matches the schema above EXACTLY. \
    Use JSON numbers (not strings) for every numeric field. \
    Do NOT add fields that are not in the schema.";

/// Fills `{name}` placeholders in one left-to-right pass.
///
/// Substituted values are never rescanned, so a value containing `{name}`
/// text is emitted verbatim. Braces that do not name a known placeholder
/// (JSON schema examples) are left as they are.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (close, *value))
        });
        match value {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
