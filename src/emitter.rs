//! # 常量生成模块（emitter）
//!
//! ## 设计思路
//!
//! 把 `DecodedImage` 渲染为可直接 `include!` / `mod` 引用的 Rust 源码：
//!
//! ```text
//! pub const NAME_WIDTH: usize = 32;
//! pub const NAME_HEIGHT: usize = 32;
//! pub static NAME_DATA: [u8; 4096] = [ ... ];
//! ```
//!
//! 消费侧按 `DATA[(row * WIDTH + col) * 4 ..]` 取 RGBA，因此宽高用 `usize`。
//! 生成过程只拼接字符串，不触碰文件系统；落盘由 `storage` 负责。

use crate::decoder::DecodedImage;

/// 每行输出的字节数。
const BYTES_PER_LINE: usize = 16;

/// 将任意名称规范为 `SCREAMING_SNAKE_CASE` 常量前缀。
///
/// 非字母数字字符替换为 `_`；以数字开头时补一个前导 `_`。
/// 不同名称可能得到同一前缀，唯一性由清单校验负责。
pub fn constant_prefix(name: &str) -> String {
    let mut out: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// 前缀中至少含一个 ASCII 字母或数字才能成为合法标识符。
pub fn is_usable_prefix(prefix: &str) -> bool {
    prefix.chars().any(|c| c.is_ascii_alphanumeric())
}

/// 渲染单个图像的三条常量定义。
pub fn render_constants(name: &str, image: &DecodedImage) -> String {
    let prefix = constant_prefix(name);
    let pixels = image.pixels();
    let mut out = String::with_capacity(pixels.len() * 6 + 256);

    out.push_str(&format!("pub const {}_WIDTH: usize = {};\n", prefix, image.width()));
    out.push_str(&format!("pub const {}_HEIGHT: usize = {};\n", prefix, image.height()));
    out.push_str(&format!("pub static {}_DATA: [u8; {}] = [\n", prefix, pixels.len()));

    for line in pixels.chunks(BYTES_PER_LINE) {
        out.push_str("   ");
        for byte in line {
            out.push_str(&format!(" 0x{:02X},", byte));
        }
        out.push('\n');
    }
    out.push_str("];\n");
    out
}

/// 渲染完整模块：文件头注释 + 按顺序排列的各资源常量。
pub fn render_module<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a DecodedImage)>,
{
    let mut out = String::new();
    out.push_str("// @generated by icon-bake. Do not edit by hand.\n");
    out.push_str("// RGBA, row-major, row 0 is the top row.\n");

    for (name, image) in entries {
        out.push('\n');
        out.push_str(&render_constants(name, image));
    }
    out
}
