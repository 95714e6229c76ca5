use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// 清单中的单个章节条目。filename 指向 origin 目录下的文本文件，
/// 前两行分别作为英文标题和中文标题。
/// title / line1 / line2 是旧版清单字段，只在读取时兼容，写出时不携带。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterEntry {
    pub filename: String,
    #[serde(default)]
    pub english_title: String,
    #[serde(default)]
    pub chinese_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
}

impl ChapterEntry {
    pub fn new(filename: String, english_title: String, chinese_title: String) -> Self {
        Self {
            filename,
            english_title,
            chinese_title,
            title: None,
            line1: None,
            line2: None,
        }
    }

    /// 展示用英文标题：englishTitle 为空时依次回退到旧版的 title、line1
    pub fn display_english(&self) -> &str {
        [
            Some(self.english_title.as_str()),
            self.title.as_deref(),
            self.line1.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or("")
    }

    /// 展示用中文标题：chineseTitle 为空时回退到旧版的 line2
    pub fn display_chinese(&self) -> &str {
        [Some(self.chinese_title.as_str()), self.line2.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }
}

/// 把清单文本解析成章节条目列表。非数组或格式错误都算解析失败
pub fn parse_manifest(raw: &str) -> Result<Vec<ChapterEntry>> {
    let entries = serde_json::from_str(raw)
        .map_err(|e| anyhow::anyhow!("清单格式无效: {}", e))?;
    Ok(entries)
}

/// 序列化并整体覆盖写入清单文件。两空格缩进，保证同样输入产出逐字节一致
pub async fn write_manifest(out_path: &Path, entries: &[ChapterEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(out_path, json)
        .await
        .map_err(|e| anyhow::anyhow!("清单写入失败 {}: {}", out_path.display(), e))?;
    Ok(())
}
