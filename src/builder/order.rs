/// 给定目录中实际存在的章节文件与可选的排序配置，产出确定性的展示顺序。
///
/// 有配置时：配置里的文件按配置顺序排在前面，其余文件按文件名字典序追加；
/// 没有配置时：全部按文件名字典序排列。
/// 配置里不存在的文件被静默忽略，重复条目按首次出现去重，
/// 因此输出始终是 present 的一个排列。
pub fn resolve_order(present: &[String], configured: Option<&[String]>) -> Vec<String> {
    let Some(configured) = configured else {
        let mut ordered = present.to_vec();
        ordered.sort();
        return ordered;
    };

    let mut ordered: Vec<String> = Vec::with_capacity(present.len());
    for name in configured {
        if present.contains(name) && !ordered.contains(name) {
            ordered.push(name.clone());
        }
    }

    let mut remaining: Vec<String> = present
        .iter()
        .filter(|name| !ordered.contains(name))
        .cloned()
        .collect();
    remaining.sort();
    ordered.extend(remaining);
    ordered
}
