//! # 图像容器解码模块（decoder）
//!
//! ## 设计思路
//!
//! 两条解码链路形状一致：容器解析 → 像素解码 → RGBA 缓冲。
//! 按职责拆成多个子模块，避免单文件膨胀：
//!
//! - `reader`：小端顺序读取 + 截断检测
//! - `palette`：16 项调色板 + 色键透明
//! - `bitmap`：行步长、双倍高度、自底向上翻转、32/4-bit 解码
//! - `icon`：图标目录解析与条目挑选
//! - `standalone`：独立 4-bit 位图
//! - `config/error/model`：配置、错误、输出数据模型
//!
//! ## 调用链
//!
//! ```text
//! decode_icon(bytes, w, h)          decode_bitmap(bytes, expected)
//!    ├─ icon::parse_directory          ├─ BM 文件头 / DIB 子头
//!    ├─ icon::select_descriptor        ├─ palette::read_palette
//!    └─ bitmap::decode_bgra32          └─ bitmap::decode_indexed4
//!         （其他位深 → 占位图 + 告警）
//!    ↓                                 ↓
//! IconDecode { image, warning }     DecodedImage
//! ```
//!
//! 每次解码都只借用自己的输入缓冲、只写自己的输出缓冲，没有跨调用共享状态。

mod bitmap;
mod config;
mod error;
mod icon;
mod model;
mod palette;
mod reader;
mod standalone;

pub use bitmap::{stride, true_height};
pub use config::{ColorKey, DecodeConfig};
pub use error::DecodeError;
pub use icon::{ImageDescriptor, decode_icon, parse_directory, select_descriptor};
pub use model::{DecodeWarning, DecodedImage, IconDecode};
pub use palette::{PALETTE_LEN, PaletteEntry};
pub use standalone::decode_bitmap;
