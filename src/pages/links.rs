//! One-click contact links
//!
//! `tel:` and `wa.me` URIs are handed to the platform as-is; nothing observes
//! whether a call or message followed.

/// `tel:` URI for a number, keeping only the leading `+` and digits
pub fn tel_href(number: &str) -> String {
    let mut out = String::from("tel:");
    for (i, c) in number.trim().chars().enumerate() {
        if c.is_ascii_digit() || (i == 0 && c == '+') {
            out.push(c);
        }
    }
    out
}

/// `wa.me` deep link; the number is reduced to digits
pub fn whatsapp_href(number: &str, text: Option<&str>) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    match text {
        Some(text) if !text.is_empty() => {
            format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text))
        }
        _ => format!("https://wa.me/{}", digits),
    }
}
