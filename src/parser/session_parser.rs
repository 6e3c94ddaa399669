//! 把一个 Block 转换为会话记录和训练明细
//!
//! 单行失败只会产生警告，不会影响同一块中的其他行。

use crate::error::{ParseError, ParseWarning};
use crate::parser::block::Block;
use crate::parser::classify::{LineKind, classify_line};
use crate::parser::extract::{FieldExtractor, decompose_meal, parse_exercise_line};
use crate::parser_config::ParserConfig;
use crate::workout::{ExerciseEntry, SessionRecord};
use std::collections::HashMap;

/// 单个记录块的解析结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockOutput {
    /// 日期不合法时为 `None`
    pub session: Option<SessionRecord>,
    pub exercises: Vec<ExerciseEntry>,
    pub warnings: Vec<ParseWarning>,
    /// 块中是否出现过训练行或手环记录行
    pub has_structure: bool,
}

/// 解析一个记录块
///
/// 日期行不合法时整块被丢弃，只产生一条 `InvalidDate` 警告。
/// 所有行都无法识别时返回只有日期的会话记录。
/// 重复的元数据行只更新它实际给出的字段，覆盖已有值时产生 `DuplicateLine` 警告。
pub fn parse_block(block: &Block, config: &ParserConfig) -> BlockOutput {
    let mut out = BlockOutput::default();

    let date = match block.date {
        Some(date) => date,
        None => {
            out.warnings.push(ParseWarning::recoverable(
                block.start_line,
                None,
                ParseError::InvalidDate {
                    raw: block.header.clone(),
                },
            ));
            return out;
        }
    };

    let extractor = FieldExtractor::new(config);
    let mut session = SessionRecord::new(date);
    let mut in_exercise = false;
    let mut set_counters: HashMap<String, u32> = HashMap::new();

    let warn = |out: &mut BlockOutput, line: usize, error: ParseError| {
        out.warnings
            .push(ParseWarning::recoverable(line, Some(date), error));
    };

    for line in &block.lines {
        match classify_line(&line.text, config, in_exercise) {
            LineKind::MuscleTarget(target) => {
                if !target.is_empty() {
                    let overwritten = store(&mut session.muscle_target, Some(target.to_string()));
                    if overwritten {
                        warn(&mut out, line.number, duplicate(&line.text));
                    }
                }
            }
            LineKind::Fueling(body) => {
                let (info, issues) = extractor.fueling(body);
                for issue in issues {
                    warn(&mut out, line.number, issue);
                }
                let mut overwritten = false;
                if let Some(meal_text) = info.preworkout {
                    let meal = decompose_meal(&meal_text);
                    for text in &meal.unparsed {
                        out.warnings
                            .push(ParseWarning::meal_fallback(line.number, Some(date), text.clone()));
                    }
                    // 餐食明细总是和原文一起替换
                    session.meal = meal;
                    overwritten |= store(&mut session.preworkout_meal, Some(meal_text));
                }
                overwritten |= store(&mut session.hydration_ml, info.hydration_ml);
                if overwritten {
                    warn(&mut out, line.number, duplicate(&line.text));
                }
            }
            LineKind::ExerciseHeader => in_exercise = true,
            LineKind::Tracker(body) => {
                in_exercise = false;
                out.has_structure = true;
                let (summary, issues) = extractor.tracker_summary(body);
                for issue in issues {
                    warn(&mut out, line.number, issue);
                }
                let overwritten = store(&mut session.duration_min, summary.duration_min)
                    | store(&mut session.avg_heart_rate, summary.avg_heart_rate)
                    | store(&mut session.calories, summary.calories);
                if overwritten {
                    warn(&mut out, line.number, duplicate(&line.text));
                }
            }
            LineKind::Exercise(text) => {
                out.has_structure = true;
                match parse_exercise_line(text) {
                    Ok(parsed) => {
                        let counter = set_counters.entry(parsed.name.clone()).or_insert(0);
                        for set in parsed.sets {
                            *counter += 1;
                            out.exercises.push(ExerciseEntry {
                                session_date: date,
                                exercise_name: parsed.name.clone(),
                                set_index: *counter,
                                set,
                            });
                        }
                    }
                    Err(e) => warn(&mut out, line.number, e),
                }
            }
            LineKind::Unrecognized => warn(
                &mut out,
                line.number,
                ParseError::UnrecognizedLine {
                    raw: line.text.clone(),
                },
            ),
        }
    }

    log::debug!(
        "parsed block {} (line {}): {} sets, {} warnings",
        date,
        block.start_line,
        out.exercises.len(),
        out.warnings.len()
    );

    out.session = Some(session);
    out
}

/// 只在新值存在时写入，返回是否覆盖了已有值
fn store<T>(slot: &mut Option<T>, value: Option<T>) -> bool {
    match value {
        Some(v) => slot.replace(v).is_some(),
        None => false,
    }
}

fn duplicate(raw: &str) -> ParseError {
    ParseError::DuplicateLine {
        raw: raw.to_string(),
    }
}
