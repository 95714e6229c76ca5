pub mod source;

pub use source::{ChapterSource, HttpSource};

use anyhow::Result;
use tracing::{instrument, warn};

use crate::builder::title::first_two_nonblank_lines;
use crate::config::OrderingConfig;
use crate::manifest::{self, ChapterEntry};

static MANIFEST_PATH: &str = "chapters.json";
static CONFIG_PATH: &str = "chapters.config.json";
static ORIGIN_PREFIX: &str = "origin";

/// 内置的兜底章节列表，所有获取途径都失败时使用
pub fn fallback_chapters() -> Vec<ChapterEntry> {
    vec![
        ChapterEntry::new(
            "Chapter_1.txt".to_owned(),
            "I Do Not Have a Physical Body, Yet I Am Writing This Book".to_owned(),
            "我没有肉体，却在写这本书".to_owned(),
        ),
        ChapterEntry::new(
            "Chapter_2.txt".to_owned(),
            "My present environment, Work, and activities.".to_owned(),
            "我现在所处的环境、工作和活动。".to_owned(),
        ),
    ]
}

/// 分级回退获取章节列表：清单 → 按排序配置实时重建 → 内置兜底列表。
/// 每一级失败只记录警告，绝不向调用方抛错，
/// 最差也返回兜底列表，保证页面总有内容可渲染
#[instrument(skip_all)]
pub async fn resolve_chapters<S: ChapterSource + Sync>(source: &S) -> Vec<ChapterEntry> {
    match fetch_manifest(source).await {
        // 空清单也算成功：由渲染层显示"没有章节"，不再往下回退
        Ok(entries) => return entries,
        Err(e) => warn!("chapters.json 获取失败，尝试按配置重建: {}", e),
    }

    match rebuild_from_config(source).await {
        Ok(entries) if !entries.is_empty() => return entries,
        Ok(_) => warn!("排序配置为空，使用内置章节列表"),
        Err(e) => warn!("按配置重建失败，使用内置章节列表: {}", e),
    }

    fallback_chapters()
}

async fn fetch_manifest<S: ChapterSource + Sync>(source: &S) -> Result<Vec<ChapterEntry>> {
    let raw = source.fetch_text(MANIFEST_PATH).await?;
    manifest::parse_manifest(&raw)
}

/// 第二级：读排序配置，按配置顺序逐个拉章节正文，现场抽标题。
/// 正文按顺序一个一个取，天然保持配置顺序，不需要事后重排
async fn rebuild_from_config<S: ChapterSource + Sync>(source: &S) -> Result<Vec<ChapterEntry>> {
    let raw = source.fetch_text(CONFIG_PATH).await?;
    let config: OrderingConfig = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("排序配置格式无效: {}", e))?;
    let Some(sequence) = config.sequence else {
        return Ok(Vec::new());
    };

    let mut entries = Vec::with_capacity(sequence.len());
    for filename in sequence {
        let path = format!("{}/{}", ORIGIN_PREFIX, filename);
        match source.fetch_text(&path).await {
            Ok(content) => {
                let (line1, line2) = first_two_nonblank_lines(&content);
                entries.push(ChapterEntry::new(filename, line1, line2));
            }
            // 单篇正文取不到只留空标题，这一级继续
            Err(e) => {
                warn!("章节正文获取失败，标题留空: {}: {}", path, e);
                entries.push(ChapterEntry::new(filename, String::new(), String::new()));
            }
        }
    }
    Ok(entries)
}
