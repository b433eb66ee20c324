//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 解码层只关心字节，错误用 `DecodeError` 表达；
//! 批处理层还要面对清单、文件系统和“哪个资源失败”的标注，
//! 因此在这里定义 `BakeError`，作为库对外与 CLI 的统一返回类型。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 解码与读取失败一律带上资源名与路径（`Asset` / `AssetRead`）。

use std::path::PathBuf;

use crate::decoder::DecodeError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum BakeError {
    /// 某个资源解码失败
    #[error("资源 {name}（{}）解码失败: {source}", path.display())]
    Asset {
        name: String,
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// 某个资源文件读取失败
    #[error("资源 {name}（{}）读取失败: {source}", path.display())]
    AssetRead {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 清单文件无效
    #[error("清单无效: {0}")]
    Manifest(String),

    /// 输出目录或文件不可用
    #[error("输出不可用: {0}")]
    Storage(String),
}

impl BakeError {
    /// 失败所属的资源名；非资源级错误返回 `None`。
    pub fn asset_name(&self) -> Option<&str> {
        match self {
            Self::Asset { name, .. } | Self::AssetRead { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// 稳定错误码；解码类错误沿用 `DecodeError::code`。
    pub fn code(&self) -> &'static str {
        match self {
            Self::Asset { source, .. } => source.code(),
            Self::AssetRead { .. } => "io",
            Self::Manifest(_) => "manifest",
            Self::Storage(_) => "storage",
        }
    }
}
