//! 错误类型定义
//!
//! 定义了解析过程中可能出现的所有错误类型，以及收集到的非致命警告。
//!
//! 致命错误只有在整个文件没有任何可用结构时才会返回；其余错误只作用于
//! 单行或单个字段，会被包装成 [`ParseWarning`] 交给调用方。

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// 解析错误类型
///
/// 包含了训练日志解析过程中可能遇到的所有错误情况。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// 日志没有可用结构（空文件、没有日期行、没有任何训练或手环记录）
    #[error("malformed log: {reason}")]
    MalformedLog {
        /// 失败原因
        reason: String,
    },

    /// 文件未找到或无法访问
    #[error("file not found or inaccessible: {path}")]
    FileNotFound {
        /// 文件路径及系统错误
        path: String,
    },

    /// 读取过程中的 IO 错误
    #[error("io error: {0}")]
    Io(String),

    /// 写出 CSV 表格失败
    #[error("csv error: {0}")]
    Csv(String),

    /// 组数记号既不是 `<重量>X<次数>` 也不是 `<分钟>min`
    #[error("unrecognized set token: '{token}'")]
    UnrecognizedSetToken {
        /// 原始记号
        token: String,
    },

    /// 同一行里混用了负重记号和时长记号
    #[error("mixed weighted and duration sets in one line: '{raw}'")]
    MixedSetTokens {
        /// 原始行
        raw: String,
    },

    /// 训练行缺少 `<动作名>:` 前缀或没有任何组数
    #[error("invalid exercise line: '{raw}'")]
    InvalidExerciseLine {
        /// 原始行
        raw: String,
    },

    /// 手环记录中出现未知的标签
    #[error("unrecognized tracker label: '{label}'")]
    UnrecognizedTrackerLabel {
        /// 标签原文
        label: String,
    },

    /// 手环记录子句缺少 `-` 分隔符
    #[error("malformed tracker clause: '{clause}'")]
    MalformedTrackerClause {
        /// 子句原文
        clause: String,
    },

    /// 数值解析失败
    #[error("failed to parse {field} as number: '{value}'")]
    InvalidNumber {
        /// 字段名
        field: String,
        /// 字段值
        value: String,
    },

    /// 无法归类的行
    #[error("unrecognized line: '{raw}'")]
    UnrecognizedLine {
        /// 原始行
        raw: String,
    },

    /// 形如日期但不是合法日历日期的行
    #[error("invalid date line: '{raw}'")]
    InvalidDate {
        /// 原始行
        raw: String,
    },

    /// 同一块中重复出现的行覆盖了已有的字段值
    #[error("duplicate line overrides earlier value: '{raw}'")]
    DuplicateLine {
        /// 原始行
        raw: String,
    },

    /// 同一天出现了第二个记录块
    #[error("duplicate session date: {date}")]
    DuplicateDate {
        /// 重复的日期
        date: NaiveDate,
    },
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e.to_string())
    }
}

impl From<csv::Error> for ParseError {
    fn from(e: csv::Error) -> Self {
        ParseError::Csv(e.to_string())
    }
}

/// 警告的种类
#[derive(Debug, Clone, PartialEq)]
pub enum WarningKind {
    /// 作用于单行/单字段的可恢复错误，对应字段被置空或整行被跳过
    Recoverable(ParseError),

    /// 餐食文本中有无法拆分的子句，原文保留在 `unparsed` 中。不是错误。
    MealParseFallback {
        /// 未能解析的子句原文
        text: String,
    },
}

/// 一条非致命诊断信息
#[derive(Debug, Clone, PartialEq)]
pub struct ParseWarning {
    /// 输入中的行号（从 1 开始）
    pub line: usize,

    /// 所属记录块的日期（首个日期行之前的行没有日期）
    pub date: Option<NaiveDate>,

    /// 警告内容
    pub kind: WarningKind,
}

impl ParseWarning {
    /// 由可恢复错误构造警告
    pub fn recoverable(line: usize, date: Option<NaiveDate>, error: ParseError) -> Self {
        Self {
            line,
            date,
            kind: WarningKind::Recoverable(error),
        }
    }

    /// 餐食子句无法拆分时的提示
    pub fn meal_fallback(line: usize, date: Option<NaiveDate>, text: impl Into<String>) -> Self {
        Self {
            line,
            date,
            kind: WarningKind::MealParseFallback { text: text.into() },
        }
    }

    /// 返回内部的可恢复错误（餐食回退不是错误，返回 `None`）
    pub fn error(&self) -> Option<&ParseError> {
        match &self.kind {
            WarningKind::Recoverable(e) => Some(e),
            WarningKind::MealParseFallback { .. } => None,
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)?;
        if let Some(date) = self.date {
            write!(f, " ({date})")?;
        }
        match &self.kind {
            WarningKind::Recoverable(e) => write!(f, ": {e}"),
            WarningKind::MealParseFallback { text } => {
                write!(f, ": unparsed meal text kept verbatim: '{text}'")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display_includes_line_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 2);
        let w = ParseWarning::recoverable(
            7,
            date,
            ParseError::UnrecognizedSetToken {
                token: "abc".into(),
            },
        );
        assert_eq!(
            w.to_string(),
            "line 7 (2024-05-02): unrecognized set token: 'abc'"
        );
    }

    #[test]
    fn meal_fallback_is_not_an_error() {
        let w = ParseWarning::meal_fallback(3, None, "???");
        assert!(w.error().is_none());
        assert_eq!(w.to_string(), "line 3: unparsed meal text kept verbatim: '???'");
    }
}
