//! # 解码配置
//!
//! ## 设计思路
//!
//! 把“可调策略”集中到 `DecodeConfig`：
//! - `color_key`：调色板色键透明的阈值
//! - `placeholder_rgba`：图标路径遇到不支持位深时的填充色
//!
//! `Default` 即旧资源集实际使用的取值；清单文件可以局部覆盖，
//! 未写出的字段通过 `#[serde(default)]` 回落到默认值。

use serde::{Deserialize, Serialize};

/// 调色板色键规则：`red > min_red && blue > min_blue && green < max_green` 时视为透明。
///
/// 这是针对旧资源里“亮品红”哨兵色的经验阈值，不是通用 alpha 通道。
/// 没有新资源调色板作为依据时不要放宽。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorKey {
    pub min_red: u8,
    pub min_blue: u8,
    pub max_green: u8,
}

impl Default for ColorKey {
    fn default() -> Self {
        Self {
            min_red: 200,
            min_blue: 200,
            max_green: 50,
        }
    }
}

impl ColorKey {
    pub fn is_transparent(&self, red: u8, green: u8, blue: u8) -> bool {
        red > self.min_red && blue > self.min_blue && green < self.max_green
    }
}

/// 解码阶段配置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// 4-bit 调色板的透明色键。
    pub color_key: ColorKey,
    /// 占位图填充色（RGBA）。
    pub placeholder_rgba: [u8; 4],
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            color_key: ColorKey::default(),
            placeholder_rgba: [255, 0, 255, 255],
        }
    }
}
