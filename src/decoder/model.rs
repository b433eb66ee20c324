//! # 解码输出模型
//!
//! ## 设计思路
//!
//! - `DecodedImage`：跨越到生成器（Emitter）的唯一产物，构造时强制
//!   `pixels.len() == width * height * 4`
//! - `IconDecode`：图标路径的带标签结果，把“占位图”与“正常解码”区分开
//! - `DecodeWarning`：非致命告警，调用侧必须可见（日志 / 报告）

use image::{Rgba, RgbaImage};

/// 自顶向下的 RGBA 像素缓冲。
///
/// 第 0 行是视觉上的最上方一行，每行从左到右。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// 用原始 RGBA 字节构造；长度不等于 `width * height * 4` 时返回 `None`。
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = expected_len(width, height)?;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// 整幅填充同一颜色。
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// 读取 `(x, y)` 处像素；越界返回 `None`。
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y as usize * self.width as usize + x as usize) * 4;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.pixels[at..at + 4]);
        Some(out)
    }

    /// 转为 `image` crate 的缓冲类型，便于下游做预览或比对。
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixel(x, y).unwrap_or([0, 0, 0, 0]))
        })
    }
}

fn expected_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
}

/// 非致命解码告警。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeWarning {
    /// 位深不受支持，输出已替换为占位图。
    UnsupportedDepth { bit_count: u16 },
}

impl std::fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedDepth { bit_count } => {
                write!(f, "不支持 {} bpp，已替换为占位图", bit_count)
            }
        }
    }
}

/// 图标解码结果：图像 + 可选告警。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDecode {
    pub image: DecodedImage,
    pub warning: Option<DecodeWarning>,
}

impl IconDecode {
    pub fn is_placeholder(&self) -> bool {
        self.warning.is_some()
    }
}
