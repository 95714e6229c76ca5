use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::manifest::ChapterEntry;

/// 与页面端 encodeURIComponent 逐字节一致：
/// 字母数字和 - _ . ! ~ * ' ( ) 不转义，空格编码为 %20
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 列表为空时渲染的双语占位提示，保证容器不会空着
static EMPTY_LIST_HTML: &str = r#"<div style="text-align: center; padding: 2rem; color: #666;">
    <p>No chapters available yet.</p>
    <p>没有可用的章节。</p>
</div>
"#;

/// 把章节列表渲染成可直接插入页面容器的 HTML 片段。
/// 每个条目是一个指向章节阅读页的链接，章节号取列表位置加一，
/// 所有插值先做 HTML 转义
pub fn render_chapter_list(chapters: &[ChapterEntry]) -> String {
    if chapters.is_empty() {
        return EMPTY_LIST_HTML.to_owned();
    }

    let mut html = String::new();
    for (index, chapter) in chapters.iter().enumerate() {
        let number = index + 1;
        html.push_str("<a class=\"chapter-item\" href=\"chapter.html?chapter=");
        html.push_str(&encode_query(&chapter.filename));
        html.push_str("\">\n    <div class=\"chapter-title\">Chapter ");
        html.push_str(&number.to_string());
        html.push_str(": ");
        html.push_str(&escape_html(chapter.display_english()));
        html.push_str("</div>\n    <div class=\"chapter-subtitle\">第");
        html.push_str(&number.to_string());
        html.push_str("章：");
        html.push_str(&escape_html(chapter.display_chinese()));
        html.push_str("</div>\n</a>\n");
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn encode_query(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(filename: &str, english: &str, chinese: &str) -> ChapterEntry {
        ChapterEntry::new(filename.to_owned(), english.to_owned(), chinese.to_owned())
    }

    #[test]
    fn escapes_html_special_characters() {
        assert_eq!(
            escape_html(r#"<b>&"'</b>"#),
            "&lt;b&gt;&amp;&quot;&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn empty_list_renders_bilingual_placeholder() {
        let html = render_chapter_list(&[]);
        assert!(html.contains("No chapters available yet."));
        assert!(html.contains("没有可用的章节。"));
        assert!(!html.contains("chapter-item"));
    }

    #[test]
    fn numbers_entries_from_one() {
        let chapters = vec![entry("a.txt", "First", "第一"), entry("b.txt", "Second", "第二")];
        let html = render_chapter_list(&chapters);
        assert!(html.contains("Chapter 1: First"));
        assert!(html.contains("第1章：第一"));
        assert!(html.contains("Chapter 2: Second"));
        assert!(html.contains("第2章：第二"));
    }

    #[test]
    fn links_to_viewer_with_encoded_filename() {
        let chapters = vec![entry("My Chapter #1.txt", "T", "标")];
        let html = render_chapter_list(&chapters);
        assert!(html.contains("href=\"chapter.html?chapter=My%20Chapter%20%231.txt\""));
    }

    #[test]
    fn query_encoding_keeps_unreserved_marks() {
        // 空格必须是 %20 而不是 +，标点里只有这些不转义
        assert_eq!(encode_query("a b.txt"), "a%20b.txt");
        assert_eq!(encode_query("Ch(1)'s_intro!~*.txt"), "Ch(1)'s_intro!~*.txt");
        assert_eq!(encode_query("第一章.txt"), "%E7%AC%AC%E4%B8%80%E7%AB%A0.txt");
    }

    #[test]
    fn titles_are_escaped_in_output() {
        let chapters = vec![entry("a.txt", "<script>alert(1)</script>", "引号\"测试")];
        let html = render_chapter_list(&chapters);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("引号&quot;测试"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn legacy_fields_feed_displayed_titles() {
        let mut chapter = entry("a.txt", "", "");
        chapter.title = Some("Legacy".to_owned());
        chapter.line2 = Some("旧字段".to_owned());
        let html = render_chapter_list(&[chapter]);
        assert!(html.contains("Chapter 1: Legacy"));
        assert!(html.contains("第1章：旧字段"));
    }
}
