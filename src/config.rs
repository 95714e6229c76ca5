use std::path::Path;

use serde::Deserialize;
use tracing::debug;

/// 章节排序配置，对应站点根目录下的 chapters.config.json。
/// sequence 给出期望的展示顺序，不要求覆盖全部章节文件。
#[derive(Debug, Default, Deserialize)]
pub struct OrderingConfig {
    #[serde(default)]
    pub sequence: Option<Vec<String>>,
}

/// 读取排序配置。文件缺失、解析失败或字段无效都视为"未配置"，
/// 静默退回默认排序，不中断构建
pub fn load_sequence(config_path: &Path) -> Option<Vec<String>> {
    let loaded = config::Config::builder()
        .add_source(config::File::from(config_path.to_path_buf()).format(config::FileFormat::Json))
        .build()
        .and_then(|c| c.try_deserialize::<OrderingConfig>());

    match loaded {
        Ok(config) => config.sequence,
        Err(e) => {
            debug!("排序配置不可用，使用默认排序: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_no_config() {
        assert_eq!(load_sequence(Path::new("no_such_config.json")), None);
    }

    #[test]
    fn reads_sequence_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chapters.config.json");
        std::fs::write(&path, r#"{ "sequence": ["c.txt", "a.txt"] }"#).unwrap();

        let sequence = load_sequence(&path).unwrap();
        assert_eq!(sequence, vec!["c.txt".to_owned(), "a.txt".to_owned()]);
    }

    #[test]
    fn invalid_json_means_no_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chapters.config.json");
        std::fs::write(&path, "not json at all").unwrap();

        assert_eq!(load_sequence(&path), None);
    }

    #[test]
    fn missing_sequence_field_means_no_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chapters.config.json");
        std::fs::write(&path, r#"{ "other": 1 }"#).unwrap();

        assert_eq!(load_sequence(&path), None);
    }
}
