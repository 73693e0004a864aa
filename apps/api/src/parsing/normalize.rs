/// Canonicalizes extracted or submitted text.
///
/// Line endings are unified to `\n`, every line is trimmed, and the joined
/// result is trimmed. Applying it twice yields the same string.
pub fn normalize_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    unified
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
