//! 资源清单模块
//!
//! # 设计思路
//!
//! 需要转换哪些文件、以什么名字输出、目标尺寸多少，统一写在一个 JSON 清单里，
//! 不在代码里硬编码资源列表。解码策略（色键阈值、占位色）也从清单覆盖。
//!
//! # 实现思路
//!
//! - `serde` 派生反序列化，`kind` 字段区分图标与独立位图。
//! - 相对路径统一以清单所在目录为基准解析。
//! - 加载后立即校验：资源列表非空、常量前缀可用且不重复、图标目标尺寸非零。
//!   名称按生成常量的前缀比较，`my-computer` 与 `MY_COMPUTER` 视为重名。

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::decoder::DecodeConfig;
use crate::emitter;
use crate::error::BakeError;

/// 单个资源的解码方式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetKind {
    /// 图标容器，按目标尺寸挑选条目。
    Icon { width: u32, height: u32 },
    /// 独立 4-bit 位图；可选地校验尺寸。
    Bitmap {
        #[serde(default)]
        width: Option<u32>,
        #[serde(default)]
        height: Option<u32>,
    },
}

/// 清单中的一项资源。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSpec {
    /// 输出常量名前缀，如 `MY_COMPUTER`。
    pub name: String,
    /// 资源文件路径（相对清单目录）。
    pub path: PathBuf,
    #[serde(flatten)]
    pub kind: AssetKind,
}

/// 资源清单。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// 生成的 Rust 源文件路径（相对清单目录）。
    pub output: PathBuf,
    #[serde(default)]
    pub decode: DecodeConfig,
    pub assets: Vec<AssetSpec>,
}

impl Manifest {
    /// 从 JSON 文本解析并校验。
    pub fn from_json(content: &str) -> Result<Self, BakeError> {
        let manifest: Manifest = serde_json::from_str(content)
            .map_err(|e| BakeError::Manifest(format!("解析清单失败: {}", e)))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// 读取清单文件。
    pub fn load(path: &Path) -> Result<Self, BakeError> {
        let content = fs::read_to_string(path).map_err(|e| {
            BakeError::Manifest(format!("读取清单 '{}' 失败: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    fn validate(&self) -> Result<(), BakeError> {
        if self.assets.is_empty() {
            return Err(BakeError::Manifest("资源列表为空".to_string()));
        }

        let mut seen = HashSet::new();
        for asset in &self.assets {
            if asset.name.trim().is_empty() {
                return Err(BakeError::Manifest(format!(
                    "资源 '{}' 缺少名称",
                    asset.path.display()
                )));
            }
            let prefix = emitter::constant_prefix(&asset.name);
            if !emitter::is_usable_prefix(&prefix) {
                return Err(BakeError::Manifest(format!(
                    "资源名 '{}' 无法生成常量名",
                    asset.name
                )));
            }
            if !seen.insert(prefix.clone()) {
                return Err(BakeError::Manifest(format!(
                    "资源名重复: {}（常量前缀 {}）",
                    asset.name, prefix
                )));
            }
            if let AssetKind::Icon { width, height } = asset.kind {
                if width == 0 || height == 0 {
                    return Err(BakeError::Manifest(format!(
                        "资源 {} 的目标尺寸不能为 0",
                        asset.name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// 以清单目录为基准解析路径；绝对路径原样返回。
pub fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
