//! Character-level Unicode classification for Arabic script.

/// Check the Arabic letter blocks: Arabic (U+0600..U+06FF), Arabic
/// Supplement (U+0750..U+077F) and Arabic Extended-A (U+08A0..U+08FF).
/// The main block includes a handful of signs and digits alongside the
/// letters, which is fine for validating table values.
pub fn is_arabic_letter(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
        || ('\u{0750}'..='\u{077F}').contains(&c)
        || ('\u{08A0}'..='\u{08FF}').contains(&c)
}

/// Check if a string is valid Arabic-script text.
///
/// Accepts Arabic letters plus the ASCII space, which appears in
/// multi-word dictionary values like "إن شاء الله".
pub fn is_arabic_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_arabic_letter(c) || c == ' ')
}
