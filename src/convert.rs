//! # 批量转换编排模块
//!
//! ## 设计思路
//!
//! 本模块只负责流程编排，不解析任何字节。处理链路固定为：
//! 1. 加载并校验清单
//! 2. 逐个资源：读取文件 → 按 `kind` 解码
//! 3. 单个资源失败时记录带标签的错误并继续（严格模式下整体失败）
//! 4. 渲染全部成功资源并一次性写入输出文件
//!
//! ## 实现思路
//!
//! - 每个资源记录 `read/decode` 阶段耗时，便于定位慢资源。
//! - 占位图告警必须可见：逐条 `log::warn!`，并计入汇总。
//! - 资源之间没有共享可变状态，顺序处理即可。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::decoder::{self, DecodeConfig, DecodeError, DecodeWarning, DecodedImage};
use crate::emitter;
use crate::error::BakeError;
use crate::manifest::{self, AssetKind, AssetSpec, Manifest};
use crate::storage::{self, WriteOutcome};

/// 单个资源的转换结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedAsset {
    pub name: String,
    pub image: DecodedImage,
    /// 非空表示输出是占位图。
    pub warning: Option<DecodeWarning>,
}

/// 一次批处理的完整结果：成功项按清单顺序排列，失败项带资源标签。
#[derive(Debug, Default)]
pub struct BakeReport {
    pub converted: Vec<ConvertedAsset>,
    pub failures: Vec<BakeError>,
}

impl BakeReport {
    pub fn placeholder_count(&self) -> usize {
        self.converted.iter().filter(|a| a.warning.is_some()).count()
    }

    /// 渲染全部成功资源为 Rust 源码。
    pub fn render(&self) -> String {
        emitter::render_module(
            self.converted
                .iter()
                .map(|asset| (asset.name.as_str(), &asset.image)),
        )
    }
}

/// `bake` 的汇总信息。
#[derive(Debug)]
pub struct BakeSummary {
    pub output: PathBuf,
    pub outcome: WriteOutcome,
    pub converted: usize,
    pub placeholders: usize,
    /// 非严格模式下被跳过的资源。
    pub failures: Vec<BakeError>,
}

/// 按资源类型解码一段字节。
pub fn decode_asset_bytes(
    bytes: &[u8],
    kind: &AssetKind,
    config: &DecodeConfig,
) -> Result<(DecodedImage, Option<DecodeWarning>), DecodeError> {
    match kind {
        AssetKind::Icon { width, height } => {
            let decoded = decoder::decode_icon(bytes, *width, *height, config)?;
            Ok((decoded.image, decoded.warning))
        }
        AssetKind::Bitmap { width, height } => {
            let expected = (*width).zip(*height);
            let image = decoder::decode_bitmap(bytes, expected, config)?;
            Ok((image, None))
        }
    }
}

/// 读取并解码单个资源。
pub fn convert_asset(
    asset: &AssetSpec,
    base_dir: &Path,
    config: &DecodeConfig,
) -> Result<ConvertedAsset, BakeError> {
    let path = manifest::resolve(base_dir, &asset.path);

    let read_start = Instant::now();
    let bytes = fs::read(&path).map_err(|source| BakeError::AssetRead {
        name: asset.name.clone(),
        path: path.clone(),
        source,
    })?;
    let read_elapsed = read_start.elapsed();

    let decode_start = Instant::now();
    let (image, warning) =
        decode_asset_bytes(&bytes, &asset.kind, config).map_err(|source| BakeError::Asset {
            name: asset.name.clone(),
            path: path.clone(),
            source,
        })?;
    let decode_elapsed = decode_start.elapsed();

    if let Some(warning) = &warning {
        log::warn!("⚠️ 资源 {}（{}）：{}", asset.name, path.display(), warning);
    }

    log::info!(
        "✅ 资源转换完成 - {} {}x{} read={}ms decode={}ms",
        asset.name,
        image.width(),
        image.height(),
        read_elapsed.as_millis(),
        decode_elapsed.as_millis()
    );

    Ok(ConvertedAsset {
        name: asset.name.clone(),
        image,
        warning,
    })
}

/// 转换清单中的全部资源；单个失败不影响其余资源。
pub fn run(manifest: &Manifest, base_dir: &Path) -> BakeReport {
    let mut report = BakeReport::default();

    for asset in &manifest.assets {
        match convert_asset(asset, base_dir, &manifest.decode) {
            Ok(converted) => report.converted.push(converted),
            Err(err) => {
                log::error!("❌ [{}] {}", err.code(), err);
                report.failures.push(err);
            }
        }
    }

    report
}

/// 完整入口：加载清单 → 批量转换 → 写出生成文件。
///
/// `output_override` 覆盖清单中的 `output`；`strict` 为真时任一资源失败即整体失败，
/// 且不写出任何文件。
///
/// # 示例
/// ```rust,no_run
/// use std::path::Path;
///
/// let summary = icon_bake::convert::bake(Path::new("assets/icons.json"), None, false)?;
/// println!("{} assets", summary.converted);
/// # Ok::<(), icon_bake::error::BakeError>(())
/// ```
pub fn bake(
    manifest_path: &Path,
    output_override: Option<&Path>,
    strict: bool,
) -> Result<BakeSummary, BakeError> {
    let total_start = Instant::now();
    let manifest = Manifest::load(manifest_path)?;
    let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new(""));

    let mut report = run(&manifest, base_dir);

    if strict && !report.failures.is_empty() {
        log::error!("严格模式：{} 个资源失败，未写出输出文件", report.failures.len());
        return Err(report.failures.remove(0));
    }

    let output = match output_override {
        Some(path) => path.to_path_buf(),
        None => manifest::resolve(base_dir, &manifest.output),
    };
    let outcome = storage::write_generated(&output, &report.render())?;

    log::info!(
        "✅ 生成完成 - {}（{:?}）converted={} placeholders={} skipped={} total={}ms",
        output.display(),
        outcome,
        report.converted.len(),
        report.placeholder_count(),
        report.failures.len(),
        total_start.elapsed().as_millis()
    );

    Ok(BakeSummary {
        output,
        outcome,
        converted: report.converted.len(),
        placeholders: report.placeholder_count(),
        failures: report.failures,
    })
}
