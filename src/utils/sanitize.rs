//! Filename sanitization utilities

/// Sanitize an album name for use as a file name
///
/// Characters that are unsafe on common filesystems (`\ / : * ? " < > |`)
/// become underscores, and surrounding whitespace is removed.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}
