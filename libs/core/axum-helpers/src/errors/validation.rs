use validator::{ValidationError, ValidationErrors};

/// Rejects empty and whitespace-only strings.
///
/// ```ignore
/// #[validate(custom(function = "not_blank", message = "must not be blank"))]
/// pub name: String,
/// ```
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Flattens validator output into sorted `"field: reason"` lines.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let reason = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("{}: {}", field, reason)
            })
        })
        .collect();
    messages.sort();
    messages
}
