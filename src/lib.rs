//! # icon-bake — 库入口
//!
//! 构建期把旧式图标容器（`.ico`）与 4-bit 调色板位图（`.bmp`）
//! 解码为自顶向下的 RGBA 缓冲，并生成 Rust 常量源码供桌面外壳直接引用。
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs (CLI: clap + env_logger)                        │
//! │       ↓                                                  │
//! │  convert ── 清单驱动的批处理，逐资源跳过失败继续          │
//! │   ├─ manifest   JSON 清单 + 解码配置                     │
//! │   ├─ decoder    容器解析 → 像素解码 → RGBA               │
//! │   │   ├─ icon        目录解析 / 条目挑选 / 占位降级       │
//! │   │   ├─ standalone  BM 文件头 / 调色板                  │
//! │   │   ├─ bitmap      步长 / 双倍高度 / 行翻转            │
//! │   │   ├─ palette     16 色表 + 色键透明                  │
//! │   │   └─ reader      小端游标 + 截断检测                 │
//! │   ├─ emitter    RGBA → `NAME_WIDTH/HEIGHT/DATA` 常量      │
//! │   └─ storage    输出目录创建 + 整体写入                  │
//! │                                                          │
//! │  error ── BakeError (统一错误类型，带资源标签)            │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `BakeError` |
//! | [`decoder`] | 图标容器 / 独立位图解码，纯内存、无 I/O |
//! | [`manifest`] | 资源清单的解析与校验 |
//! | [`emitter`] | 生成 Rust 常量源码 |
//! | [`storage`] | 输出文件落盘 |
//! | [`convert`] | 批处理编排与汇总报告 |

pub mod convert;
pub mod decoder;
pub mod emitter;
pub mod error;
pub mod manifest;
pub mod storage;
