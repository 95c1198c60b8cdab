/*!
 Sanitization for palette titles that become file names.
*/

/// Characters disallowed in a filename on common platforms
const FILENAME_DISALLOWED_CHARS: [char; 9] = ['*', '"', '/', '\\', '<', '>', ':', '|', '?'];

/// The character to replace disallowed chars with
const FILENAME_REPLACEMENT_CHAR: char = '_';

/// Remove unsafe chars in [this list](FILENAME_DISALLOWED_CHARS)
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|letter| {
            if FILENAME_DISALLOWED_CHARS.contains(&letter) {
                FILENAME_REPLACEMENT_CHAR
            } else {
                letter
            }
        })
        .collect()
}
