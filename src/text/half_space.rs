/// Zero-width non-joiner, the Persian half-space.
pub const HALF_SPACE: char = '\u{200C}';

pub fn remove_half_space(text: &str) -> String {
    text.chars().filter(|c| *c != HALF_SPACE).collect()
}

/// Replace every literal space (U+0020) with a half-space.
pub fn add_half_space(text: &str) -> String {
    text.replace(' ', &HALF_SPACE.to_string())
}

/// Replace every half-space with a literal space (U+0020).
pub fn half_space_to_space(text: &str) -> String {
    text.replace(HALF_SPACE, " ")
}
