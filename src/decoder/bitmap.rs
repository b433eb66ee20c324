//! # 位图行解码
//!
//! ## 设计思路
//!
//! 图标内嵌位图与独立位图共享同一套行布局规则：
//! 1. 源数据按“自底向上”存储，输出需要翻转为自顶向下
//! 2. 每行按 DWORD（4 字节）对齐，行尾填充字节永远不参与像素解析
//! 3. 图标的声明高度是真实高度的两倍（下半部分是未使用的 1-bit 掩码）
//!
//! ## 实现思路
//!
//! - 步长与真实高度各自是独立的纯函数（`stride` / `true_height`），便于单测
//! - 先用读取器一次性取出 `stride * height` 字节，截断在这里统一报出
//! - 按源行号 `height - 1 ..= 0` 遍历并依次追加，输出第 0 行即源数据最后一行

use super::palette::{PALETTE_LEN, PaletteEntry};
use super::reader::ByteReader;
use super::{DecodeError, DecodedImage};

/// 位图子头中本模块关心的部分。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SubHeader {
    /// 子头自身长度；图标路径用它定位像素数据。
    pub(crate) header_size: u32,
    pub(crate) width: i32,
    /// 声明高度，图标路径下为真实高度的两倍。
    pub(crate) height: i32,
}

/// 子头前 12 字节：长度、宽、高。
pub(crate) const SUB_HEADER_PREFIX_LEN: usize = 12;

pub(crate) fn read_sub_header(reader: &mut ByteReader<'_>) -> Result<SubHeader, DecodeError> {
    let header_size = reader.u32()?;
    let width = reader.i32()?;
    let height = reader.i32()?;
    Ok(SubHeader {
        header_size,
        width,
        height,
    })
}

/// 单行存储字节数（含 DWORD 对齐填充）：`ceil(width * bits / 32) * 4`。
pub fn stride(width: u32, bit_depth: u16) -> usize {
    let bits = width as u64 * bit_depth as u64;
    (bits.div_ceil(32) * 4) as usize
}

/// 由声明高度求真实高度。
///
/// `icon_mask` 为真时声明高度包含掩码，真实高度为 `|declared| / 2`。
pub fn true_height(declared: i32, icon_mask: bool) -> u32 {
    if icon_mask {
        declared.unsigned_abs() / 2
    } else {
        declared.unsigned_abs()
    }
}

/// 取出自底向上存储的全部行。
fn take_rows<'a>(
    reader: &mut ByteReader<'a>,
    row_stride: usize,
    height: u32,
) -> Result<&'a [u8], DecodeError> {
    let total = row_stride.checked_mul(height as usize).ok_or_else(|| {
        DecodeError::InvalidContainer(format!("像素区长度溢出：{} x {}", row_stride, height))
    })?;
    reader.bytes(total)
}

/// 32-bit BGRA 行解码（图标路径）。
pub(crate) fn decode_bgra32(
    reader: &mut ByteReader<'_>,
    width: u32,
    height: u32,
) -> Result<DecodedImage, DecodeError> {
    let row_stride = stride(width, 32);
    let rows = take_rows(reader, row_stride, height)?;

    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for src_row in (0..height as usize).rev() {
        let row = &rows[src_row * row_stride..][..width as usize * 4];
        for bgra in row.chunks_exact(4) {
            pixels.extend_from_slice(&[bgra[2], bgra[1], bgra[0], bgra[3]]);
        }
    }

    finish(width, height, pixels)
}

/// 4-bit 调色板索引行解码（独立位图路径）。
///
/// 每字节两个像素：高半字节在左，低半字节在右。
/// 奇数宽度时最后一个字节的低半字节属于填充。
pub(crate) fn decode_indexed4(
    reader: &mut ByteReader<'_>,
    width: u32,
    height: u32,
    palette: &[PaletteEntry; PALETTE_LEN],
) -> Result<DecodedImage, DecodeError> {
    let row_stride = stride(width, 4);
    let rows = take_rows(reader, row_stride, height)?;

    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for src_row in (0..height as usize).rev() {
        let row = &rows[src_row * row_stride..][..row_stride];
        for x in 0..width as usize {
            let byte = row[x / 2];
            let index = if x % 2 == 0 { byte >> 4 } else { byte & 0x0F };
            pixels.extend_from_slice(&palette[index as usize].rgba());
        }
    }

    finish(width, height, pixels)
}

fn finish(width: u32, height: u32, pixels: Vec<u8>) -> Result<DecodedImage, DecodeError> {
    let len = pixels.len();
    DecodedImage::from_raw(width, height, pixels).ok_or_else(|| {
        DecodeError::InvalidContainer(format!(
            "像素缓冲长度 {} 与 {}x{} 不符",
            len, width, height
        ))
    })
}
