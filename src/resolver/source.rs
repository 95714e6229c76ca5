use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use url::Url;

/// 渲染端读取外部状态的抽象。清单、排序配置、章节正文
/// 都通过站点根目录下的相对路径取文本
#[async_trait]
pub trait ChapterSource {
    async fn fetch_text(&self, path: &str) -> Result<String>;
}

/// 基于 HTTP 的章节来源，站点部署后的默认实现
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    pub fn new(mut base_url: Url) -> Self {
        // join 相对路径要求基地址以斜杠结尾，否则最后一段会被替换掉
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl ChapterSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.base_url.join(path)?;
        let response = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP {}: {}", response.status().as_u16(), url);
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_a_trailing_slash() {
        let source = HttpSource::new(Url::parse("https://example.com/book").unwrap());
        assert_eq!(source.base_url.as_str(), "https://example.com/book/");

        let joined = source.base_url.join("chapters.json").unwrap();
        assert_eq!(joined.as_str(), "https://example.com/book/chapters.json");
    }
}
