/*!
 Builders that assemble `ASE` byte streams for tests.
*/

pub(crate) fn encode_string(text: &str) -> Vec<u8> {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut out = Vec::new();
    out.extend_from_slice(&(units.len() as u16 + 1).to_be_bytes());
    for unit in units {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out.extend_from_slice(&[0x00, 0x00]);
    out
}

pub(crate) fn block(tag: u16, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag.to_be_bytes());
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(payload);
    out
}

pub(crate) fn header(major: u16, minor: u16, block_count: u32) -> Vec<u8> {
    let mut out = b"ASEF".to_vec();
    out.extend_from_slice(&major.to_be_bytes());
    out.extend_from_slice(&minor.to_be_bytes());
    out.extend_from_slice(&block_count.to_be_bytes());
    out
}

pub(crate) fn palette_start(title: &str) -> Vec<u8> {
    block(0xC001, &encode_string(title))
}

pub(crate) fn color_entry(name: &str, tag: &[u8; 4], floats: &[f32]) -> Vec<u8> {
    let mut payload = encode_string(name);
    payload.extend_from_slice(tag);
    for float in floats {
        payload.extend_from_slice(&float.to_be_bytes());
    }
    block(0x0001, &payload)
}

pub(crate) fn palette_end() -> Vec<u8> {
    block(0xC002, &[])
}

/// A version 1.0 document whose declared block count matches `blocks`
pub(crate) fn document(blocks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = header(1, 0, blocks.len() as u32);
    for block in blocks {
        out.extend_from_slice(block);
    }
    out
}
