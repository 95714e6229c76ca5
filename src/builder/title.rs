/// 原样取文件的第一、二行作为双语标题，行首尾空白去掉。
/// 空行不跳过：首行为空就得到空标题。构建清单时使用
pub fn first_two_lines(content: &str) -> (String, String) {
    let mut lines = content.split('\n');
    let line1 = lines.next().unwrap_or("").trim().to_owned();
    let line2 = lines.next().unwrap_or("").trim().to_owned();
    (line1, line2)
}

/// 取文件的前两个非空行作为双语标题，空行整体跳过。
/// 渲染端实时重建章节列表时使用。
/// 与 first_two_lines 的差异是有意保留的两种语义，调用方各自固定一种
pub fn first_two_nonblank_lines(content: &str) -> (String, String) {
    let mut lines = content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty());
    let line1 = lines.next().unwrap_or("").to_owned();
    let line2 = lines.next().unwrap_or("").to_owned();
    (line1, line2)
}
