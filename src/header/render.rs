use crate::guard::guard_token::GuardToken;

pub fn render(guard: &GuardToken, date: &str, commit: &str) -> String {
    format!(
        "#if !defined({guard})\n\
         #define {guard}\n\
         #define BUILD_INFO_DATE \"{date}\"\n\
         #define BUILD_INFO_COMMIT \"{commit}\"\n\
         #endif /* {guard} */\n",
        guard = guard,
        date = escape_c_string(date),
        commit = escape_c_string(commit),
    )
}

/// Escapes text for the inside of a C string literal.
pub fn escape_c_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_ascii_control() => escaped.push_str(&format!("\\{:03o}", c as u32)),
            c => escaped.push(c),
        }
    }

    escaped
}
