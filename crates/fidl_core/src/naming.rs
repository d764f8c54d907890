//! Identifier casing helpers shared by the binding generator.
//!
//! FIDL names are written in the D-Bus style (`GetServerInformation`, `app_name`, `org.freedesktop`);
//! generated Rust wants `snake_case` functions/fields and `UpperCamelCase` types.
//!
//! ## Examples
//! ```rust
//! use fidl_core::naming;
//!
//! assert_eq!(naming::to_snake_case("GetServerInformation"), "get_server_information");
//! assert_eq!(naming::to_upper_camel_case("notification_closed"), "NotificationClosed");
//! assert_eq!(naming::last_segment("org.freedesktop.Urgency"), "Urgency");
//! ```

/// Convert a name to `snake_case`.
///
/// ## Notes
/// - Acronym runs stay together: `HTTPServer` becomes `http_server`.
/// - Separators other than letters and digits (`.`, `-`, spaces) become a single `_`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            push_separator(&mut out);
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || (prev.is_ascii_uppercase() && next_is_lower) {
                push_separator(&mut out);
            }
        }
        out.push(c.to_ascii_lowercase());
    }

    out.trim_matches('_').to_string()
}

/// Convert a name to `UpperCamelCase`.
///
/// Existing interior capitals are kept (`urgencyLevel` → `UrgencyLevel`), separators are dropped and
/// the following character is capitalized.
pub fn to_upper_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut capitalize = true;

    for c in name.chars() {
        if !c.is_ascii_alphanumeric() {
            capitalize = true;
            continue;
        }
        if capitalize {
            out.push(c.to_ascii_uppercase());
            capitalize = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Return the last dotted segment of a qualified name.
pub fn last_segment(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

/// Build the conventional D-Bus object path for a dotted interface name.
///
/// `org.freedesktop.Notifications` becomes `/org/freedesktop/Notifications`.
pub fn dbus_object_path(dotted: &str) -> String {
    let mut path = String::with_capacity(dotted.len() + 1);
    for segment in dotted.split('.').filter(|s| !s.is_empty()) {
        path.push('/');
        path.push_str(segment);
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('_') {
        out.push('_');
    }
}
