//! Identifier normalization for asset-name matching
//!
//! Code refers to assets through generated identifiers, so `"Primary Text"`,
//! `"primary-text"` and `"PrimaryText"` all name the same asset. Comparing
//! normalized identifiers makes those spellings match.

/// Normalizes a name into a lowerCamelCase identifier.
///
/// Non-alphanumeric characters split words, each word is capitalized, and the
/// leading run of upper-case letters is lowered (keeping the last one when it
/// starts the next word, so `URLColor` becomes `urlColor`).
///
/// # Example
///
/// ```
/// use usedcolors_lib::naming::identifier_name;
///
/// assert_eq!(identifier_name("Primary Text"), "primaryText");
/// assert_eq!(identifier_name("primary-text"), "primaryText");
/// assert_eq!(identifier_name("URLColor"), "urlColor");
/// ```
pub fn identifier_name(name: &str) -> String {
    let joined: String = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();
    lower_leading(&joined)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_leading(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let run = chars.iter().take_while(|c| c.is_uppercase()).count();
    let next_is_lower = chars.get(run).is_some_and(|c| c.is_lowercase());
    let lowered = if run > 1 && next_is_lower { run - 1 } else { run };

    let mut out = String::with_capacity(identifier.len());
    for (i, c) in chars.into_iter().enumerate() {
        if i < lowered {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
