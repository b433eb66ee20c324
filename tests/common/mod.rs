// Shared byte-level fixtures for the integration tests.
#![allow(dead_code)]

/// One directory entry plus the embedded bitmap it points at.
pub struct IconEntry {
    pub width: u8,
    pub height: u8,
    pub bit_count: u16,
    pub region: Vec<u8>,
}

/// Embedded bitmap: 40-byte sub-header with doubled height, then rows as given.
pub fn embedded_bitmap(width: i32, true_height: i32, bit_count: u16, rows: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&(true_height * 2).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&bit_count.to_le_bytes());
    out.resize(40, 0);
    out.extend_from_slice(rows);
    out
}

/// Assemble a full icon container from entries.
pub fn icon_container(entries: &[IconEntry]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());

    let mut offset = 6 + entries.len() * 16;
    for entry in entries {
        out.push(entry.width);
        out.push(entry.height);
        out.push(0);
        out.push(0);
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&entry.bit_count.to_le_bytes());
        out.extend_from_slice(&(entry.region.len() as u32).to_le_bytes());
        out.extend_from_slice(&(offset as u32).to_le_bytes());
        offset += entry.region.len();
    }
    for entry in entries {
        out.extend_from_slice(&entry.region);
    }
    out
}

/// A 32-bit entry of the given square size filled with one BGRA value.
pub fn solid_icon_entry(size: u8, bgra: [u8; 4]) -> IconEntry {
    let rows: Vec<u8> = std::iter::repeat(bgra)
        .take(size as usize * size as usize)
        .flatten()
        .collect();
    IconEntry {
        width: size,
        height: size,
        bit_count: 32,
        region: embedded_bitmap(size as i32, size as i32, 32, &rows),
    }
}

/// Standalone 4-bit bitmap with a 40-byte DIB header.
///
/// `palette` is given as RGB triples and stored as BGRx.
pub fn bitmap_file(width: i32, height: i32, palette: &[[u8; 3]; 16], rows: &[u8]) -> Vec<u8> {
    let pixel_offset: u32 = 14 + 40 + 64;
    let mut out = Vec::new();
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(pixel_offset + rows.len() as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&pixel_offset.to_le_bytes());

    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&4u16.to_le_bytes());
    out.resize(14 + 40, 0);

    for [red, green, blue] in palette {
        out.extend_from_slice(&[*blue, *green, *red, 0]);
    }
    out.extend_from_slice(rows);
    out
}

/// Palette where entry `i` is `(i * 10, i * 5, i * 3)` except the listed overrides.
pub fn palette_with(overrides: &[(usize, [u8; 3])]) -> [[u8; 3]; 16] {
    let mut palette = [[0u8; 3]; 16];
    for (i, entry) in palette.iter_mut().enumerate() {
        let i = i as u8;
        *entry = [i * 10, i * 5, i * 3];
    }
    for (index, rgb) in overrides {
        palette[*index] = *rgb;
    }
    palette
}
