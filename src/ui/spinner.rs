use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// 进度指示器（旋转动画）
///
/// 非终端环境下 indicatif 不会绘制任何内容。
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// 创建新的 spinner
    pub fn new(message: &str, colored: bool) -> Self {
        let pb = ProgressBar::new_spinner();
        let template = if colored {
            "{spinner:.green} {msg}"
        } else {
            "{spinner} {msg}"
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(template)
                .expect("Invalid template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb }
    }

    /// 更新 spinner 消息
    pub fn set_message(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    /// 完成并清除
    pub fn finish_and_clear(&self) {
        self.pb.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.pb.finish_and_clear();
    }
}
