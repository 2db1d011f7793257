/// Show enough of a credential to recognise it, never the whole thing
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let len = chars.len();
    if len <= 12 {
        // Too short to safely show, just show dots
        return "●".repeat(len);
    }

    let first: String = chars[..4].iter().collect();
    let last: String = chars[len - 4..].iter().collect();
    format!("{}...{}", first, last)
}
