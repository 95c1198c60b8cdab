/*!
 Contains logic and data structures used to parse Adobe Swatch Exchange (`ASE`) block streams.

 ## Overview

 An ASE document is a four-byte `ASEF` signature, a major/minor version
 pair, a declared block count, and then exactly that many typed,
 length-prefixed blocks. A block either opens a named palette, adds a
 color entry to the open palette, or closes it.

 Strings embedded in blocks are UTF-16BE with a leading code-unit count
 and a trailing double-NUL terminator.

 ## Format references

 - <http://www.selapa.net/swatches/colors/fileformats.php#adobe_ase>
 - <http://carl.camera/default.aspx?id=109>
*/

pub mod models;
pub mod parser;

#[cfg(test)]
pub(crate) mod fixtures;
