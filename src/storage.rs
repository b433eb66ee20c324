//! 输出文件管理模块
//!
//! # 设计思路
//!
//! 统一管理生成文件的落盘：目标目录不存在时自动创建，
//! 内容在内存中一次渲染完毕后先写入同目录临时文件，再整体替换目标，
//! 失败路径上不会留下半截文件。
//!
//! # 实现思路
//!
//! - 目录不存在时自动 `create_dir_all`，避免上层判断。
//! - 内容与已有文件完全一致时跳过写入，避免无谓地触发增量编译。
//! - 临时文件与目标位于同一目录，`persist` 是同一文件系统内的 rename。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::BakeError;

/// 写入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// 文件已写入（新建或内容变化）
    Written,
    /// 内容未变化，未触碰文件
    Unchanged,
}

/// 确保 `path` 的父目录存在。
pub fn ensure_parent_dir(path: &Path) -> Result<(), BakeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                BakeError::Storage(format!("创建输出目录 '{}' 失败: {}", parent.display(), e))
            })?;
        }
    }
    Ok(())
}

/// 写入生成的源码文件。
///
/// # 返回
/// - `Ok(WriteOutcome::Written)` — 已写入
/// - `Ok(WriteOutcome::Unchanged)` — 内容相同，跳过
/// - `Err(BakeError::Storage)` — 无法创建目录或写入文件
pub fn write_generated(path: &Path, content: &str) -> Result<WriteOutcome, BakeError> {
    if let Ok(existing) = fs::read_to_string(path) {
        if existing == content {
            return Ok(WriteOutcome::Unchanged);
        }
    }

    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_error =
        |e: std::io::Error| BakeError::Storage(format!("写入输出文件 '{}' 失败: {}", path.display(), e));

    // 临时文件在 drop 时自动删除，任一步失败都不会碰到目标文件
    let mut staged = NamedTempFile::new_in(dir).map_err(write_error)?;
    staged.write_all(content.as_bytes()).map_err(write_error)?;
    staged.as_file().sync_all().map_err(write_error)?;
    staged.persist(path).map_err(|e| write_error(e.error))?;
    Ok(WriteOutcome::Written)
}
