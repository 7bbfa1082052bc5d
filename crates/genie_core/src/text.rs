use crate::buffer::SaveBuffer;
use crate::core_api::CoreResult;

pub const TERMINATOR: u8 = 0x50;
pub const SPACE: u8 = 0x7F;
pub const UNKNOWN_GLYPH: char = '?';

const LETTERS_START: u8 = 0x80;
const LETTERS_END: u8 = 0x99;
const DIGITS_START: u8 = 0xA0;
const DIGITS_END: u8 = 0xA9;

/// Maps one save byte to a printable character. `None` marks the terminator.
pub fn byte_to_char(byte: u8) -> Option<char> {
    match byte {
        LETTERS_START..=LETTERS_END => Some(char::from(b'A' + (byte - LETTERS_START))),
        DIGITS_START..=DIGITS_END => Some(char::from(b'0' + (byte - DIGITS_START))),
        SPACE => Some(' '),
        TERMINATOR => None,
        _ => Some(UNKNOWN_GLYPH),
    }
}

/// Case-insensitive inverse of [`byte_to_char`]. Anything unsupported becomes a space.
pub fn char_to_byte(c: char) -> u8 {
    match c.to_ascii_uppercase() {
        upper @ 'A'..='Z' => LETTERS_START + (upper as u8 - b'A'),
        digit @ '0'..='9' => DIGITS_START + (digit as u8 - b'0'),
        _ => SPACE,
    }
}

pub fn decode_name(buf: &SaveBuffer, offset: usize, len: usize) -> CoreResult<String> {
    let bytes = buf.view(offset, len)?;
    Ok(bytes.iter().map_while(|&b| byte_to_char(b)).collect())
}

/// Writes `text` into a `len`-byte name field.
///
/// At most `len - 1` glyphs are stored; the byte after the text and all padding
/// are terminators, so the field always decodes to a terminated name.
pub fn encode_name(buf: &mut SaveBuffer, offset: usize, len: usize, text: &str) -> CoreResult<()> {
    if len == 0 {
        return Ok(());
    }

    let mut scratch = vec![TERMINATOR; len];
    for (slot, c) in scratch.iter_mut().zip(text.chars().take(len - 1)) {
        *slot = char_to_byte(c);
    }

    buf.write_slice(offset, &scratch)
}
