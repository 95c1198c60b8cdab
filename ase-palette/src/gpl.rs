/*!
 Renders a converted palette in the GIMP palette (`GPL`) text format.
*/

use crate::palette::Palette;

/// File extension for GIMP palette documents
pub const EXTENSION: &str = "gpl";

/// Documents with at most this many total blocks get a `Columns: 1` hint
///
/// The threshold keys off the document's declared block count, not the
/// palette's own entry count, so a multi-palette document can miss the
/// hint even when each palette is small. Kept as-is so output matches
/// existing converters byte for byte.
pub const SINGLE_COLUMN_BLOCK_LIMIT: u32 = 12;

/// Render a palette as a complete GPL document
///
/// `total_blocks` is the source document's declared block count; it only
/// feeds the single-column heuristic above.
pub fn render(palette: &Palette, total_blocks: u32) -> String {
    let mut out = String::from("GIMP Palette\n");
    out.push_str("Name: ");
    out.push_str(&palette.title);
    out.push('\n');

    if total_blocks <= SINGLE_COLUMN_BLOCK_LIMIT {
        out.push_str("Columns: 1\n");
    }
    out.push_str("#\n");

    for entry in &palette.entries {
        let (r, g, b) = entry.rgb.tuple();
        out.push_str(&format!("{r}\t{g}\t{b}"));
        // The name column is only present when the entry has a name
        if !entry.name.is_empty() {
            out.push('\t');
            out.push_str(&entry.name);
        }
        out.push('\n');
    }

    out
}
