/// Capitalize the first character and make sure the message ends with a period.
pub(crate) fn normalize_message(mut message: String) -> String {
    if !message.ends_with('.') {
        message.push('.');
    }

    let mut chars = message.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => message,
    }
}
