/// `mailto:` link target for an email address; "" for a blank address.
pub fn mailto(email: &str) -> String {
    let email = email.trim();
    if email.is_empty() {
        String::new()
    } else {
        format!("mailto:{}", email)
    }
}

/// `tel:` link target for a phone number, with whitespace removed.
pub fn tel(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        String::new()
    } else {
        format!("tel:{}", digits)
    }
}
