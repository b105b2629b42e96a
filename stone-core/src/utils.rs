//! Shared utility functions for code generation.

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '/')
}

fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Split an identifier into words.
///
/// The name is first split on runs of `-`, `_` and `/`. Each piece is then
/// split on capitalization boundaries: a leading lowercase run, an uppercase
/// letter followed by lowercase letters, an acronym followed by a capitalized
/// word, and a trailing acronym. Characters outside those patterns are
/// dropped; a piece with no recognizable word is kept as is.
///
/// ```
/// use stone_core::split_words;
///
/// assert_eq!(split_words("get_HTTPServer"), ["get", "HTTP", "Server"]);
/// ```
pub fn split_words(name: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut in_separator = false;

    for c in name.chars() {
        if is_separator(c) {
            if !in_separator {
                pieces.push(std::mem::take(&mut current));
                in_separator = true;
            }
        } else {
            in_separator = false;
            current.push(c);
        }
    }
    pieces.push(current);

    pieces
        .into_iter()
        .flat_map(|piece| {
            let words = split_capitalized(&piece);
            if words.is_empty() { vec![piece] } else { words }
        })
        .collect()
}

fn split_capitalized(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let run_end = |from: usize, pred: fn(char) -> bool| {
        (from..n).find(|&j| !pred(chars[j])).unwrap_or(n)
    };

    let mut words = Vec::new();
    let mut i = 0;
    while i < n {
        if i == 0 && is_lower(chars[0]) {
            let end = run_end(0, is_lower);
            words.push(chars[..end].iter().collect());
            i = end;
            continue;
        }

        if is_upper(chars[i]) {
            if i + 1 < n && is_lower(chars[i + 1]) {
                let end = run_end(i + 1, is_lower);
                words.push(chars[i..end].iter().collect());
                i = end;
                continue;
            }

            let end = run_end(i, is_upper);
            // acronym directly followed by a capitalized word: "HTTPServer"
            if end - i >= 2 && end < n && is_lower(chars[end]) {
                words.push(chars[i..end - 1].iter().collect());
                i = end - 1;
                continue;
            }
            if end == n {
                words.push(chars[i..].iter().collect());
                i = n;
                continue;
            }
        }

        i += 1;
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

/// Convert a string to camelCase (e.g., "files_list_folder" -> "filesListFolder")
pub fn to_camel_case(s: &str) -> String {
    let mut words = split_words(s).into_iter();
    let first = words.next().unwrap_or_default().to_lowercase();
    words.fold(first, |mut acc, word| {
        acc.push_str(&capitalize(&word));
        acc
    })
}
