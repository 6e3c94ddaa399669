//! 记录块内的行分类
//!
//! 按固定前缀把每一行归类，前缀区分大小写。

use crate::parser_config::ParserConfig;

/// 行的类别，携带去掉前缀后的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Muscle targeted:` 行
    MuscleTarget(&'a str),
    /// `Fueling:` 行
    Fueling(&'a str),
    /// `Exercise:` 行，开始训练列表
    ExerciseHeader,
    /// `AmazeFit log:` 行，结束训练列表
    Tracker(&'a str),
    /// 训练列表中的一行（整行原文）
    Exercise(&'a str),
    /// 无法归类
    Unrecognized,
}

/// 对一行进行归类
///
/// # 参数
///
/// * `line` - 已去掉首尾空白的行
/// * `config` - 行前缀词汇表
/// * `in_exercise` - 当前是否处于 `Exercise:` 与手环记录之间
pub fn classify_line<'a>(line: &'a str, config: &ParserConfig, in_exercise: bool) -> LineKind<'a> {
    if let Some(rest) = line.strip_prefix(config.muscle_prefix.as_str()) {
        return LineKind::MuscleTarget(rest.trim());
    }
    if let Some(rest) = line.strip_prefix(config.fueling_prefix.as_str()) {
        return LineKind::Fueling(rest.trim());
    }
    if line == config.exercise_header {
        return LineKind::ExerciseHeader;
    }
    if let Some(rest) = line.strip_prefix(config.tracker_prefix.as_str()) {
        return LineKind::Tracker(rest.trim());
    }
    if in_exercise {
        return LineKind::Exercise(line);
    }
    LineKind::Unrecognized
}
