//! # 独立位图解析（4-bit 调色板）
//!
//! 布局：14 字节文件头（`BM` 魔数，偏移 10 处为像素数据偏移）→ DIB 子头
//! （首 4 字节为自身长度）→ 位于 `14 + dib_size` 的 16 项调色板 → 像素数据。
//!
//! 这条路径只服务已知的 4-bit 资源，没有占位降级：位深不符直接失败。
//! 负高度（自顶向下存储）同样显式拒绝，避免静默地把行序解反。

use super::bitmap;
use super::palette;
use super::reader::ByteReader;
use super::{DecodeConfig, DecodeError, DecodedImage};

const FILE_HEADER_LEN: usize = 14;
const MAGIC: &[u8; 2] = b"BM";
const SUPPORTED_BIT_COUNT: u16 = 4;

/// 解码独立 4-bit 位图。
///
/// `expected` 给出时，子头尺寸必须与之一致，否则返回 `DimensionMismatch`。
pub fn decode_bitmap(
    bytes: &[u8],
    expected: Option<(u32, u32)>,
    config: &DecodeConfig,
) -> Result<DecodedImage, DecodeError> {
    let mut reader = ByteReader::new(bytes);

    if reader.bytes(2)? != MAGIC {
        return Err(DecodeError::InvalidContainer(
            "位图文件缺少 BM 魔数".to_string(),
        ));
    }
    // 文件大小与两个保留字段
    reader.bytes(8)?;
    let pixel_offset = reader.u32()?;

    let dib_size = reader.u32()?;
    let header_width = reader.i32()?;
    let header_height = reader.i32()?;
    let _planes = reader.u16()?;
    let bit_count = reader.u16()?;

    if bit_count != SUPPORTED_BIT_COUNT {
        return Err(DecodeError::UnsupportedDepth { bit_count });
    }
    if header_width <= 0 {
        return Err(DecodeError::InvalidContainer(format!(
            "位图宽度无效：{}",
            header_width
        )));
    }
    if header_height < 0 {
        return Err(DecodeError::UnsupportedLayout(format!(
            "负高度 {}（自顶向下存储）",
            header_height
        )));
    }

    let width = header_width as u32;
    let height = bitmap::true_height(header_height, false);
    if let Some((expected_width, expected_height)) = expected {
        if (width, height) != (expected_width, expected_height) {
            return Err(DecodeError::DimensionMismatch {
                expected: (expected_width, expected_height),
                actual: (width, height),
            });
        }
    }

    reader.seek(FILE_HEADER_LEN + dib_size as usize)?;
    let palette = palette::read_palette(&mut reader, &config.color_key)?;

    reader.seek(pixel_offset as usize)?;
    bitmap::decode_indexed4(&mut reader, width, height, &palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIB_SIZE: u32 = 40;

    fn bitmap_bytes(width: i32, height: i32, bit_count: u16, pixels: &[u8]) -> Vec<u8> {
        let pixel_offset = FILE_HEADER_LEN as u32 + DIB_SIZE + 64;
        let mut out = Vec::new();
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(pixel_offset + pixels.len() as u32).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&pixel_offset.to_le_bytes());

        out.extend_from_slice(&DIB_SIZE.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&bit_count.to_le_bytes());
        out.resize(FILE_HEADER_LEN + DIB_SIZE as usize, 0);

        for i in 0..16u8 {
            // BGRx：blue = i, green = i * 2, red = i * 3
            out.extend_from_slice(&[i, i * 2, i * 3, 0]);
        }
        out.extend_from_slice(pixels);
        out
    }

    #[test]
    fn decodes_single_row() {
        let bytes = bitmap_bytes(2, 1, 4, &[0x3F, 0, 0, 0]);
        let image = decode_bitmap(&bytes, None, &DecodeConfig::default()).expect("decode");

        assert_eq!(image.pixel(0, 0), Some([9, 6, 3, 255]));
        assert_eq!(image.pixel(1, 0), Some([45, 30, 15, 255]));
    }

    #[test]
    fn missing_magic_is_invalid() {
        let mut bytes = bitmap_bytes(2, 1, 4, &[0; 4]);
        bytes[0] = b'X';

        assert!(matches!(
            decode_bitmap(&bytes, None, &DecodeConfig::default()),
            Err(DecodeError::InvalidContainer(_))
        ));
    }

    #[test]
    fn eight_bit_is_fatal() {
        let bytes = bitmap_bytes(2, 1, 8, &[0; 4]);

        assert_eq!(
            decode_bitmap(&bytes, None, &DecodeConfig::default()),
            Err(DecodeError::UnsupportedDepth { bit_count: 8 })
        );
    }

    #[test]
    fn negative_height_is_rejected() {
        let bytes = bitmap_bytes(2, -1, 4, &[0; 4]);

        assert!(matches!(
            decode_bitmap(&bytes, None, &DecodeConfig::default()),
            Err(DecodeError::UnsupportedLayout(_))
        ));
    }

    #[test]
    fn expected_size_is_enforced() {
        let bytes = bitmap_bytes(2, 1, 4, &[0; 4]);

        assert_eq!(
            decode_bitmap(&bytes, Some((4, 4)), &DecodeConfig::default()),
            Err(DecodeError::DimensionMismatch {
                expected: (4, 4),
                actual: (2, 1),
            })
        );
    }

    #[test]
    fn truncated_pixel_data_is_reported() {
        let bytes = bitmap_bytes(8, 2, 4, &[0; 6]);

        assert!(matches!(
            decode_bitmap(&bytes, None, &DecodeConfig::default()),
            Err(DecodeError::TruncatedInput { .. })
        ));
    }
}
