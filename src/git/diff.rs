use crate::git::DiffStats;

fn extract_filename_from_diff_header(line: &str) -> Option<String> {
    let rest = line.strip_prefix("diff --git ")?;

    // 通过 " b/" 分隔符定位 a/ 和 b/ 的边界，避免空格路径被截断。
    if let Some(b_pos) = rest.find(" b/") {
        return rest[..b_pos]
            .strip_prefix("a/")
            .map(|filename| filename.to_string());
    }

    // 带引号的路径：diff --git "a/path with spaces.rs" "b/path with spaces.rs"
    if let Some(stripped) = rest.strip_prefix('"')
        && let Some(end) = stripped.find('"')
    {
        return stripped[..end]
            .strip_prefix("a/")
            .map(|filename| filename.to_string());
    }

    rest.split_whitespace()
        .next()
        .and_then(|s| s.strip_prefix("a/"))
        .map(|s| s.to_string())
}

/// 从 unified diff 文本中提取统计信息
pub fn parse_diff_stats(diff: &str) -> DiffStats {
    let mut stats = DiffStats::default();

    for line in diff.lines() {
        if line.starts_with("diff --git") {
            if let Some(filename) = extract_filename_from_diff_header(line) {
                stats.files_changed.push(filename);
            }
        } else if line.starts_with('+') && !line.starts_with("+++") {
            stats.insertions += 1;
        } else if line.starts_with('-') && !line.starts_with("---") {
            stats.deletions += 1;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_diff_stats() {
        let diff = r#"diff --git a/src/main.rs b/src/main.rs
index 123..456 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,3 +1,4 @@
 fn main() {
-    println!("old");
+    println!("new");
+    println!("added");
 }"#;

        let stats = parse_diff_stats(diff);
        assert_eq!(stats.files_changed, vec!["src/main.rs"]);
        assert_eq!(stats.insertions, 2);
        assert_eq!(stats.deletions, 1);
    }

    #[test]
    fn test_parse_diff_stats_empty_diff() {
        assert_eq!(parse_diff_stats(""), DiffStats::default());
    }

    #[test]
    fn test_parse_diff_stats_multiple_files() {
        let diff = "diff --git a/a.rs b/a.rs\n+x\ndiff --git a/b.rs b/b.rs\n-y\n-z\n";
        let stats = parse_diff_stats(diff);
        assert_eq!(stats.files_changed, vec!["a.rs", "b.rs"]);
        assert_eq!(stats.insertions, 1);
        assert_eq!(stats.deletions, 2);
    }

    #[test]
    fn test_parse_diff_stats_file_with_spaces() {
        let diff = "diff --git a/my file.rs b/my file.rs\n+line\n";
        let stats = parse_diff_stats(diff);
        assert_eq!(stats.files_changed, vec!["my file.rs"]);
    }

    #[test]
    fn test_parse_diff_stats_quoted_path() {
        let diff = "diff --git \"a/文件.rs\" \"b/文件.rs\"\n+line\n";
        let stats = parse_diff_stats(diff);
        assert_eq!(stats.files_changed, vec!["文件.rs"]);
    }

    #[test]
    fn test_parse_diff_stats_binary_file() {
        let diff = "diff --git a/logo.png b/logo.png\nnew file mode 100644\nBinary files /dev/null and b/logo.png differ\n";
        let stats = parse_diff_stats(diff);
        assert_eq!(stats.files_changed, vec!["logo.png"]);
        assert_eq!(stats.insertions, 0);
        assert_eq!(stats.deletions, 0);
    }
}
