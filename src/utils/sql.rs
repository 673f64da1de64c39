//! SQL 辅助函数

/// 转义 LIKE 模式中的特殊字符
///
/// 搜索词在进入 LIKE 查询前必须转义 `%`、`_` 和 `\`，
/// 否则会被数据库当作通配符处理。
/// 转义结果配合 `ESCAPE '\'` 子句使用（见各 list 查询）。
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_like_pattern("Python Basics"), "Python Basics");
    }

    #[test]
    fn test_escapes_wildcards() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
    }

    #[test]
    fn test_escapes_backslash_first() {
        assert_eq!(escape_like_pattern("\\%"), "\\\\\\%");
    }
}
