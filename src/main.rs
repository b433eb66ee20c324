//! # icon-bake — 命令行入口
//!
//! 本文件仅负责参数解析、日志初始化与退出码。
//! 转换逻辑在 `convert` 模块中，详见 `lib.rs` 架构文档。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use icon_bake::convert;

/// 把图标容器与 4-bit 位图转换为 RGBA Rust 常量。
#[derive(Parser)]
#[command(name = "icon-bake", version, about)]
struct Args {
    /// 资源清单（JSON）。
    #[arg(long, value_name = "PATH")]
    manifest: PathBuf,

    /// 覆盖清单中的输出路径。
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// 任一资源失败即整体失败，且不写出文件。
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match convert::bake(&args.manifest, args.output.as_deref(), args.strict) {
        Ok(summary) => {
            for failure in &summary.failures {
                log::warn!("已跳过: {failure}");
            }
            if summary.placeholders > 0 {
                log::warn!("{} 个资源使用了占位图", summary.placeholders);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("转换失败 [{}]: {err}", err.code());
            ExitCode::FAILURE
        }
    }
}
