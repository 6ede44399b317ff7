/// 日志工具模块
///
/// 提供日志初始化的辅助函数
use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 优先使用 `RUST_LOG`，未设置时默认 `info`，`verbose` 为 true 时默认 `debug`。
/// 已经初始化过时直接返回。
///
/// # 参数
/// - `verbose`: 是否输出调试日志
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init(true);
        init(false);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("What is 6 / 2?", 7), "What is...");
        assert_eq!(truncate_text("short", 10), "short");
    }
}
