//! 便捷 API 函数
//!
//! 提供了 [`LogRecordParser`] 以及一组使用默认配置的高层函数，
//! 用于一次性把整份训练日志解析为 [`WorkoutLog`]。

use crate::error::{ParseError, ParseWarning};
use crate::parser::block_parser::BlockParser;
use crate::parser::session_parser::parse_block;
use crate::parser_config::ParserConfig;
use crate::workout::WorkoutLog;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// 训练日志解析器
///
/// 持有行词汇表配置，可重复使用。每次解析都是纯函数：相同输入得到相同输出。
#[derive(Debug, Clone, Default)]
pub struct LogRecordParser {
    config: ParserConfig,
}

impl LogRecordParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// 从字符串解析
    pub fn parse_str(&self, text: &str) -> Result<WorkoutLog, ParseError> {
        self.parse_reader(text.as_bytes())
    }

    /// 从文件解析
    ///
    /// # 错误
    ///
    /// * `FileNotFound` - 文件打开失败
    /// * 其余同 [`LogRecordParser::parse_reader`]
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<WorkoutLog, ParseError> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref).map_err(|e| ParseError::FileNotFound {
            path: format!("{}: {}", path_ref.display(), e),
        })?;
        self.parse_reader(BufReader::new(file))
    }

    /// 从任意 Reader 解析
    ///
    /// # 错误
    ///
    /// * `MalformedLog` - 输入为空、没有日期行，或所有块都既没有训练行也没有手环记录
    /// * `Io` - 读取失败（包括非 UTF-8 输入）
    ///
    /// 其余问题都记录在返回值的 `warnings` 中。
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<WorkoutLog, ParseError> {
        let mut blocks = BlockParser::with_config(reader, &self.config);
        let mut parsed = WorkoutLog::default();
        let mut seen_dates = HashSet::new();
        let mut block_count = 0usize;
        let mut has_structure = false;

        for block in blocks.by_ref() {
            let block = block?;
            block_count += 1;

            let output = parse_block(&block, &self.config);
            parsed.warnings.extend(output.warnings);

            let Some(session) = output.session else {
                continue;
            };
            if !seen_dates.insert(session.date) {
                parsed.warnings.push(ParseWarning::recoverable(
                    block.start_line,
                    Some(session.date),
                    ParseError::DuplicateDate { date: session.date },
                ));
                continue;
            }

            has_structure |= output.has_structure;
            parsed.sessions.push(session);
            parsed.exercises.extend(output.exercises);
        }

        let leading = blocks.leading_lines();
        if block_count == 0 {
            let reason = if leading.is_empty() {
                "empty input"
            } else {
                "no date line found"
            };
            return Err(ParseError::MalformedLog {
                reason: reason.to_string(),
            });
        }
        if !has_structure {
            return Err(ParseError::MalformedLog {
                reason: "no exercise or tracker line found in any block".to_string(),
            });
        }

        parsed.warnings.extend(leading.iter().map(|line| {
            ParseWarning::recoverable(
                line.number,
                None,
                ParseError::UnrecognizedLine {
                    raw: line.text.clone(),
                },
            )
        }));
        // 按行号排序，同一行的多条警告保持产生顺序
        parsed.warnings.sort_by_key(|w| w.line);

        for warning in &parsed.warnings {
            log::warn!("{warning}");
        }
        log::info!(
            "parsed {} sessions, {} sets, {} warnings",
            parsed.sessions.len(),
            parsed.exercises.len(),
            parsed.warnings.len()
        );

        Ok(parsed)
    }
}

/// 使用默认配置从字符串解析
///
/// # 示例
///
/// ```
/// use workout_log_parser::parse_log_from_str;
///
/// let text = "02/05/24\nExercise:\nPull Ups: 1X7, 1X3\nAmazeFit log: duration - 40 min";
/// let log = parse_log_from_str(text)?;
///
/// assert_eq!(log.sessions.len(), 1);
/// assert_eq!(log.exercises.len(), 2);
/// assert_eq!(log.sessions[0].duration_min, Some(40));
/// # Ok::<(), workout_log_parser::ParseError>(())
/// ```
pub fn parse_log_from_str(text: &str) -> Result<WorkoutLog, ParseError> {
    LogRecordParser::default().parse_str(text)
}

/// 使用默认配置从 Reader 解析
pub fn parse_log_from_reader<R: Read>(reader: R) -> Result<WorkoutLog, ParseError> {
    LogRecordParser::default().parse_reader(reader)
}

/// 使用默认配置从文件解析
///
/// ```no_run
/// use workout_log_parser::parse_log_from_file;
///
/// let log = parse_log_from_file("workout_data.txt")?;
/// for warning in &log.warnings {
///     eprintln!("警告: {}", warning);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_log_from_file<P: AsRef<Path>>(path: P) -> Result<WorkoutLog, ParseError> {
    LogRecordParser::default().parse_file(path)
}
