//! # 图标容器解析
//!
//! ## 设计思路
//!
//! 图标容器 = 6 字节文件头 + `count` 条 16 字节目录项 + 各条目的内嵌位图。
//! 解析分三步，每一步失败都直接终止当前文件，不产出部分结果：
//! 1. 校验文件头（reserved == 0，type == 1）并读出全部目录项
//! 2. 按目标尺寸挑选条目：尺寸完全一致者中位深严格最高，同位深取先出现者
//! 3. 取出条目的字节区，按“双倍高度”约定交给行解码
//!
//! ## 实现思路
//!
//! 仅 32-bit 内嵌位图会被真正解码；其余位深走显式的占位分支，
//! 返回填充图 + `DecodeWarning`，由调用侧决定如何呈现告警。

use super::bitmap::{self, SUB_HEADER_PREFIX_LEN};
use super::reader::ByteReader;
use super::{DecodeConfig, DecodeError, DecodeWarning, DecodedImage, IconDecode};

/// 容器类型字段中表示“图标”的取值。
const ICON_TYPE: u16 = 1;

/// 目录中的一条图像描述。宽高已把 0 归一化为 256。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub width: u32,
    pub height: u32,
    pub color_count: u8,
    pub planes: u16,
    pub bit_count: u16,
    pub byte_size: u32,
    pub byte_offset: u32,
}

fn normalize_dimension(raw: u8) -> u32 {
    if raw == 0 { 256 } else { raw as u32 }
}

fn read_descriptor(reader: &mut ByteReader<'_>) -> Result<ImageDescriptor, DecodeError> {
    let width = normalize_dimension(reader.u8()?);
    let height = normalize_dimension(reader.u8()?);
    let color_count = reader.u8()?;
    let _reserved = reader.u8()?;
    let planes = reader.u16()?;
    let bit_count = reader.u16()?;
    let byte_size = reader.u32()?;
    let byte_offset = reader.u32()?;

    Ok(ImageDescriptor {
        width,
        height,
        color_count,
        planes,
        bit_count,
        byte_size,
        byte_offset,
    })
}

/// 校验文件头并读出全部目录项。
pub fn parse_directory(bytes: &[u8]) -> Result<Vec<ImageDescriptor>, DecodeError> {
    let mut reader = ByteReader::new(bytes);
    let reserved = reader.u16()?;
    let kind = reader.u16()?;
    let count = reader.u16()?;

    if reserved != 0 || kind != ICON_TYPE {
        return Err(DecodeError::InvalidContainer(format!(
            "图标文件头不符：reserved={} type={}",
            reserved, kind
        )));
    }

    (0..count).map(|_| read_descriptor(&mut reader)).collect()
}

/// 挑选与目标尺寸一致、位深最高的条目；位深相同时保留先出现者。
pub fn select_descriptor(
    descriptors: &[ImageDescriptor],
    width: u32,
    height: u32,
) -> Option<&ImageDescriptor> {
    descriptors
        .iter()
        .filter(|d| d.width == width && d.height == height)
        .fold(None, |best: Option<&ImageDescriptor>, candidate| match best {
            Some(current) if current.bit_count >= candidate.bit_count => Some(current),
            _ => Some(candidate),
        })
}

/// 解码图标容器中与目标尺寸匹配的最佳条目。
pub fn decode_icon(
    bytes: &[u8],
    target_width: u32,
    target_height: u32,
    config: &DecodeConfig,
) -> Result<IconDecode, DecodeError> {
    let descriptors = parse_directory(bytes)?;
    let descriptor = select_descriptor(&descriptors, target_width, target_height).ok_or(
        DecodeError::NoMatchingEntry {
            width: target_width,
            height: target_height,
        },
    )?;

    log::debug!(
        "图标条目选中：{}x{} {}bpp（共 {} 条）offset={} size={}",
        descriptor.width,
        descriptor.height,
        descriptor.bit_count,
        descriptors.len(),
        descriptor.byte_offset,
        descriptor.byte_size
    );

    let mut reader = ByteReader::new(bytes);
    reader.seek(descriptor.byte_offset as usize)?;
    let region = reader.bytes(descriptor.byte_size as usize)?;

    decode_embedded(
        region,
        descriptor.bit_count,
        target_width,
        target_height,
        config,
    )
}

/// 按双倍高度约定解码内嵌位图。
fn decode_embedded(
    region: &[u8],
    bit_count: u16,
    target_width: u32,
    target_height: u32,
    config: &DecodeConfig,
) -> Result<IconDecode, DecodeError> {
    let mut reader = ByteReader::new(region);
    let header = bitmap::read_sub_header(&mut reader)?;

    if (header.header_size as usize) < SUB_HEADER_PREFIX_LEN {
        return Err(DecodeError::InvalidContainer(format!(
            "内嵌位图子头长度过小：{}",
            header.header_size
        )));
    }

    let width = header.width.unsigned_abs();
    let height = bitmap::true_height(header.height, true);
    if header.width <= 0 || width != target_width || height != target_height {
        return Err(DecodeError::DimensionMismatch {
            expected: (target_width, target_height),
            actual: (width, height),
        });
    }

    match bit_count {
        32 => {
            reader.seek(header.header_size as usize)?;
            let image = bitmap::decode_bgra32(&mut reader, width, height)?;
            Ok(IconDecode {
                image,
                warning: None,
            })
        }
        other => Ok(placeholder(target_width, target_height, other, config)),
    }
}

/// 不支持的位深：返回占位图与告警，而不是失败。
fn placeholder(width: u32, height: u32, bit_count: u16, config: &DecodeConfig) -> IconDecode {
    IconDecode {
        image: DecodedImage::filled(width, height, config.placeholder_rgba),
        warning: Some(DecodeWarning::UnsupportedDepth { bit_count }),
    }
}
