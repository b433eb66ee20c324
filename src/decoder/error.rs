//! # 解码错误模型
//!
//! ## 设计思路
//!
//! 单一错误枚举覆盖整条解码链路（读取 → 目录解析 → 行解码），调用侧按分支匹配，
//! 不做字符串拼接式错误处理。所有分支都只终止“当前文件”的解码，
//! 是否继续处理其他文件由上层批处理决定。

/// 解码阶段统一错误类型。
///
/// 会在批处理层被包装为带文件标签的 `BakeError::Asset`。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// 读取越过缓冲区末尾。
    #[error("输入被截断：偏移 {offset} 处需要 {wanted} 字节，剩余 {available} 字节")]
    TruncatedInput {
        offset: usize,
        wanted: usize,
        available: usize,
    },

    /// 文件头魔数 / 类型标记不符。
    #[error("容器格式无效：{0}")]
    InvalidContainer(String),

    /// 目录中没有与目标尺寸一致的条目。
    #[error("没有 {width}x{height} 的图标条目")]
    NoMatchingEntry { width: u32, height: u32 },

    /// 不支持的位深。图标路径上会降级为占位图，独立位图路径上为致命错误。
    #[error("不支持的位深：{bit_count} bpp")]
    UnsupportedDepth { bit_count: u16 },

    /// 子头声明的几何尺寸与期望不一致。
    #[error("尺寸不匹配：期望 {}x{}，实际 {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// 合法但未实现的存储布局（如自顶向下的独立位图）。
    #[error("不支持的存储布局：{0}")]
    UnsupportedLayout(String),
}

impl DecodeError {
    /// 稳定的错误码，用于批处理报告与日志检索。
    pub fn code(&self) -> &'static str {
        match self {
            Self::TruncatedInput { .. } => "truncated_input",
            Self::InvalidContainer(_) => "invalid_container",
            Self::NoMatchingEntry { .. } => "no_matching_entry",
            Self::UnsupportedDepth { .. } => "unsupported_depth",
            Self::DimensionMismatch { .. } => "dimension_mismatch",
            Self::UnsupportedLayout(_) => "unsupported_layout",
        }
    }
}
