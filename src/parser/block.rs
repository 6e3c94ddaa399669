//! Block 结构定义和相关方法
//!
//! Block 表示一天的原始日志：一个日期行加上其后直到下一个日期行之前的所有非空行。

use chrono::NaiveDate;

/// 记录块中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLine {
    /// 输入中的行号（从 1 开始）
    pub number: usize,

    /// 去掉首尾空白后的行内容
    pub text: String,
}

/// 表示一天的完整日志（日期行 + 内容行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// 日期行的行号
    pub start_line: usize,

    /// 日期行原文
    pub header: String,

    /// 解析出的日期；日期行形状正确但日期不合法时为 `None`
    pub date: Option<NaiveDate>,

    /// 日期行之后的所有非空行
    pub lines: Vec<BlockLine>,
}

impl Block {
    /// 创建新的记录块
    ///
    /// # 参数
    ///
    /// * `start_line` - 日期行行号
    /// * `header` - 日期行原文
    /// * `date` - 解析出的日期
    pub fn new(start_line: usize, header: String, date: Option<NaiveDate>) -> Self {
        Self {
            start_line,
            header,
            date,
            lines: Vec::new(),
        }
    }

    /// 添加内容行
    pub fn add_line(&mut self, number: usize, text: String) {
        self.lines.push(BlockLine { number, text });
    }

    /// 内容行的文本
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }

    /// 是否只有日期行
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 获取完整的记录内容（日期行与内容行用换行拼接）
    pub fn full_content(&self) -> String {
        let mut out = self.header.clone();
        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.text);
        }
        out
    }
}
