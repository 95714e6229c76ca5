pub mod order;
pub mod title;

pub use order::resolve_order;
pub use title::{first_two_lines, first_two_nonblank_lines};

use std::path::PathBuf;

use anyhow::Result;
use tokio::fs;
use tracing::{info, instrument, warn};

use crate::config;
use crate::manifest::{self, ChapterEntry};

/// 清单构建器：扫描章节目录，按配置排序，抽取标题，整体重写 chapters.json
pub struct ManifestBuilder {
    origin_dir: PathBuf,
    config_path: PathBuf,
    out_path: PathBuf,
}

impl ManifestBuilder {
    pub fn new(origin_dir: PathBuf, config_path: PathBuf, out_path: PathBuf) -> Self {
        Self {
            origin_dir,
            config_path,
            out_path,
        }
    }

    /// 执行一次完整构建，返回写入的章节数。
    /// 只有章节目录不可读或清单写不出去才算致命错误
    #[instrument(skip_all)]
    pub async fn build(&self) -> Result<usize> {
        let sequence = config::load_sequence(&self.config_path);
        let present = self.list_chapter_files().await?;
        let ordered = resolve_order(&present, sequence.as_deref());

        let mut entries = Vec::with_capacity(ordered.len());
        for filename in ordered {
            let path = self.origin_dir.join(&filename);
            match fs::read_to_string(&path).await {
                Ok(content) => {
                    let (line1, line2) = first_two_lines(&content);
                    entries.push(ChapterEntry::new(filename, line1, line2));
                }
                // 单个文件读不出来只跳过这一项，不中断整批
                Err(e) => warn!("章节文件读取失败，跳过: {}: {}", path.display(), e),
            }
        }

        manifest::write_manifest(&self.out_path, &entries).await?;
        info!(
            "清单已写入: {}，共 {} 个章节",
            self.out_path.display(),
            entries.len()
        );
        Ok(entries.len())
    }

    /// 枚举章节目录里的合格文件：文件名（不区分大小写）以 .txt 结尾
    async fn list_chapter_files(&self) -> Result<Vec<String>> {
        let mut dir = fs::read_dir(&self.origin_dir).await.map_err(|e| {
            anyhow::anyhow!("章节目录不可读 {}: {}", self.origin_dir.display(), e)
        })?;

        let mut files = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.to_lowercase().ends_with(".txt") {
                files.push(name.to_owned());
            }
        }
        Ok(files)
    }
}
