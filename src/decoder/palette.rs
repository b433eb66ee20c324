//! # 调色板解码
//!
//! 4-bit 位图固定携带 16 项调色板，每项按 `blue, green, red, reserved` 存储。
//! 保留字节不是 alpha；透明度只由色键规则决定。

use super::reader::ByteReader;
use super::{ColorKey, DecodeError};

/// 4-bit 位图的调色板项数。
pub const PALETTE_LEN: usize = 16;

/// 调色板中的一种颜色。`alpha` 只会是 0（命中色键）或 255。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl PaletteEntry {
    pub fn rgba(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

/// 从当前游标位置读取 16 项调色板并应用色键规则。
pub(crate) fn read_palette(
    reader: &mut ByteReader<'_>,
    key: &ColorKey,
) -> Result<[PaletteEntry; PALETTE_LEN], DecodeError> {
    let raw = reader.bytes(PALETTE_LEN * 4)?;
    Ok(decode_palette(raw, key))
}

/// 解码恰好 `PALETTE_LEN * 4` 字节的调色板表。
pub(crate) fn decode_palette(raw: &[u8], key: &ColorKey) -> [PaletteEntry; PALETTE_LEN] {
    let mut palette = [PaletteEntry {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 255,
    }; PALETTE_LEN];

    for (entry, bgrx) in palette.iter_mut().zip(raw.chunks_exact(4)) {
        let (blue, green, red) = (bgrx[0], bgrx[1], bgrx[2]);
        let alpha = if key.is_transparent(red, green, blue) { 0 } else { 255 };
        *entry = PaletteEntry {
            red,
            green,
            blue,
            alpha,
        };
    }

    palette
}
