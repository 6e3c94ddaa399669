//! 字段提取函数
//!
//! 把已归类的行转换为带类型的值：组数记号、手环记录、补水量和餐食拆分。
//! 所有失败都只作用于当前行或当前字段，以 `ParseError` 返回给调用方记为警告。

use crate::error::ParseError;
use crate::parser::constants::*;
use crate::parser_config::{FuelingLabel, ParserConfig, TrackerField};
use crate::workout::{MealBreakdown, SetKind};
use memchr::memchr;

/// 单个组数记号的识别结果
#[derive(Debug, Clone, PartialEq)]
pub enum SetToken {
    /// `<重量>X<次数>`
    Weighted { weight: f64, reps: u32 },
    /// `<分钟>min`
    Duration { minutes: f64 },
    /// 两种形状都不匹配
    Unrecognized(String),
}

impl SetToken {
    fn into_set(self) -> Option<SetKind> {
        match self {
            SetToken::Weighted { weight, reps } => Some(SetKind::Weighted { weight, reps }),
            SetToken::Duration { minutes } => Some(SetKind::Cardio {
                duration_min: minutes,
            }),
            SetToken::Unrecognized(_) => None,
        }
    }
}

/// 识别一个组数记号
///
/// # 示例
///
/// ```
/// use workout_log_parser::parser::{SetToken, parse_set_token};
///
/// assert_eq!(parse_set_token("2.5X4"), SetToken::Weighted { weight: 2.5, reps: 4 });
/// assert_eq!(parse_set_token("10min"), SetToken::Duration { minutes: 10.0 });
/// assert!(matches!(parse_set_token("heavy"), SetToken::Unrecognized(_)));
/// ```
pub fn parse_set_token(token: &str) -> SetToken {
    let token = token.trim();

    if let Some(caps) = WEIGHTED_TOKEN.captures(token) {
        let weight = caps[1].parse::<f64>();
        let reps = caps[2].parse::<u32>();
        if let (Ok(weight), Ok(reps)) = (weight, reps) {
            return SetToken::Weighted { weight, reps };
        }
    } else if let Some(caps) = DURATION_TOKEN.captures(token) {
        if let Ok(minutes) = caps[1].parse::<f64>() {
            return SetToken::Duration { minutes };
        }
    }

    SetToken::Unrecognized(token.to_string())
}

/// 解析后的训练行
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLine {
    pub name: String,
    pub sets: Vec<SetKind>,
}

/// 解析一行训练：`<动作名>: <记号>[, <记号>...]`
///
/// 同一行中的记号必须全部是负重组或全部是有氧组。
///
/// # 错误
///
/// - `InvalidExerciseLine` - 缺少冒号、动作名为空或没有任何记号
/// - `UnrecognizedSetToken` - 有记号无法识别
/// - `MixedSetTokens` - 负重组与有氧组混用
pub fn parse_exercise_line(line: &str) -> Result<ExerciseLine, ParseError> {
    let invalid = || ParseError::InvalidExerciseLine {
        raw: line.to_string(),
    };

    let (name, sets_str) = line.split_once(EXERCISE_NAME_SEPARATOR).ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    let mut sets = Vec::new();
    for token in sets_str.split(CLAUSE_SEPARATOR) {
        if token.trim().is_empty() {
            continue;
        }
        match parse_set_token(token) {
            SetToken::Unrecognized(token) => {
                return Err(ParseError::UnrecognizedSetToken { token });
            }
            parsed => sets.extend(parsed.into_set()),
        }
    }

    if sets.is_empty() {
        return Err(invalid());
    }

    let weighted = sets
        .iter()
        .filter(|s| matches!(s, SetKind::Weighted { .. }))
        .count();
    if weighted != 0 && weighted != sets.len() {
        return Err(ParseError::MixedSetTokens {
            raw: line.to_string(),
        });
    }

    Ok(ExerciseLine {
        name: name.to_string(),
        sets,
    })
}

/// 解析补水子句的取值：`500mL`、`750 ml`
pub fn parse_hydration(value: &str) -> Result<u32, ParseError> {
    let value = value.trim();
    HYDRATION_VALUE
        .captures(value)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .ok_or_else(|| ParseError::InvalidNumber {
            field: "hydration".to_string(),
            value: value.to_string(),
        })
}

/// 拆分训练前餐食文本
///
/// 以 `&`、`,`、`and` 分隔；每个子句形如 `[<数量> ]<名称>`，未写数量时为 1，
/// 同名项数量相加。不匹配的子句原样保留在 `unparsed` 中，不会丢弃。
///
/// # 示例
///
/// ```
/// use workout_log_parser::parser::decompose_meal;
///
/// let meal = decompose_meal("2 banana & 1 coffee");
/// assert_eq!(meal.quantity("banana"), 2.0);
/// assert_eq!(meal.quantity("coffee"), 1.0);
/// ```
pub fn decompose_meal(text: &str) -> MealBreakdown {
    let mut meal = MealBreakdown::default();

    for clause in MEAL_SEPARATOR.split(text) {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }
        match MEAL_CLAUSE.captures(clause) {
            Some(caps) => {
                let quantity = match caps.get(1) {
                    Some(m) => match m.as_str().parse::<f64>() {
                        Ok(q) => q,
                        Err(_) => {
                            meal.unparsed.push(clause.to_string());
                            continue;
                        }
                    },
                    None => 1.0,
                };
                meal.add(normalize_item_name(&caps[2]), quantity);
            }
            None => meal.unparsed.push(clause.to_string()),
        }
    }

    meal
}

/// 小写、去首尾空白、合并内部空白
pub fn normalize_item_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 手环记录的三个数值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerSummary {
    pub duration_min: Option<u32>,
    pub avg_heart_rate: Option<u32>,
    pub calories: Option<u32>,
}

impl TrackerSummary {
    fn slot(&mut self, field: TrackerField) -> &mut Option<u32> {
        match field {
            TrackerField::Duration => &mut self.duration_min,
            TrackerField::AvgHeartRate => &mut self.avg_heart_rate,
            TrackerField::Calories => &mut self.calories,
        }
    }

    fn clear(&mut self, field: TrackerField) {
        *self.slot(field) = None;
    }
}

/// 饮食行的两个子句
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FuelingInfo {
    pub preworkout: Option<String>,
    pub hydration_ml: Option<u32>,
}

/// 依赖配置词汇表的字段提取器
///
/// 返回值总是带上部分结果和该行遇到的问题列表，调用方据此生成警告。
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor<'c> {
    config: &'c ParserConfig,
}

impl<'c> FieldExtractor<'c> {
    pub fn new(config: &'c ParserConfig) -> Self {
        Self { config }
    }

    /// 解析手环记录：`duration - 40 min, avg heart rate - 105, calories - 276kcal`
    ///
    /// 未知标签被忽略并报告 `UnrecognizedTrackerLabel`。
    /// 数值里带千位逗号（`calories - 1,200kcal`）时该字段置空并报告 `InvalidNumber`。
    pub fn tracker_summary(&self, body: &str) -> (TrackerSummary, Vec<ParseError>) {
        let mut summary = TrackerSummary::default();
        let mut issues = Vec::new();
        // 上一个成功赋值的子句：(字段, 标签, 数值原文)
        let mut last: Option<(TrackerField, &str, &str)> = None;

        for clause in body.split(CLAUSE_SEPARATOR) {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }

            let (label, value) = match split_label_value(clause) {
                Some(pair) => pair,
                None => {
                    let continues_number = clause.starts_with(|c: char| c.is_ascii_digit());
                    match last.take() {
                        Some((field, label, value)) if continues_number => {
                            summary.clear(field);
                            issues.push(ParseError::InvalidNumber {
                                field: label.to_string(),
                                value: format!("{value},{clause}"),
                            });
                        }
                        _ => issues.push(ParseError::MalformedTrackerClause {
                            clause: clause.to_string(),
                        }),
                    }
                    continue;
                }
            };
            last = None;

            let field = match self.config.tracker_field(label) {
                Some(field) => field,
                None => {
                    issues.push(ParseError::UnrecognizedTrackerLabel {
                        label: label.to_string(),
                    });
                    continue;
                }
            };

            let number = TRACKER_VALUE
                .captures(value)
                .and_then(|caps| caps[1].parse::<u32>().ok());
            let number = match number {
                Some(n) => n,
                None => {
                    issues.push(ParseError::InvalidNumber {
                        field: label.to_string(),
                        value: value.to_string(),
                    });
                    continue;
                }
            };

            *summary.slot(field) = Some(number);
            last = Some((field, label, value));
        }

        (summary, issues)
    }

    /// 解析饮食行：`Preworkout - 1 Sandwich, Workout Hydration - 500mL`
    ///
    /// 以逗号切分后，带已知标签的片段开启一个新子句，其余片段并入当前子句，
    /// 因此餐食本身也可以用逗号分隔多项。
    pub fn fueling(&self, body: &str) -> (FuelingInfo, Vec<ParseError>) {
        let mut clauses: Vec<(FuelingLabel, String)> = Vec::new();
        let mut issues = Vec::new();

        for segment in body.split(CLAUSE_SEPARATOR) {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            if let Some((label, value)) = split_label_value(segment) {
                if let Some(kind) = self.config.fueling_label(label) {
                    clauses.push((kind, value.to_string()));
                    continue;
                }
            }

            match clauses.last_mut() {
                Some((_, value)) => {
                    value.push_str(", ");
                    value.push_str(segment);
                }
                None => {
                    issues.push(ParseError::UnrecognizedLine {
                        raw: segment.to_string(),
                    });
                }
            }
        }

        let mut info = FuelingInfo::default();
        for (kind, value) in clauses {
            let value = value.trim();
            match kind {
                FuelingLabel::Preworkout => {
                    if !value.is_empty() {
                        info.preworkout = Some(value.to_string());
                    }
                }
                FuelingLabel::Hydration => match parse_hydration(value) {
                    Ok(ml) => info.hydration_ml = Some(ml),
                    Err(e) => issues.push(e),
                },
            }
        }

        (info, issues)
    }
}

/// 在第一个 `-` 处切分标签与取值，两侧去空白；标签为空时返回 `None`
fn split_label_value(clause: &str) -> Option<(&str, &str)> {
    let idx = memchr(LABEL_VALUE_SEPARATOR, clause.as_bytes())?;
    let label = clause[..idx].trim();
    let value = clause[idx + 1..].trim();
    if label.is_empty() {
        None
    } else {
        Some((label, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_label_value_basic() {
        assert_eq!(split_label_value("duration - 40 min"), Some(("duration", "40 min")));
        assert_eq!(split_label_value("calories-276kcal"), Some(("calories", "276kcal")));
        assert_eq!(split_label_value("- 40"), None);
        assert_eq!(split_label_value("duration 40"), None);
    }

    #[test]
    fn normalize_item_name_collapses_whitespace() {
        assert_eq!(normalize_item_name("  Protein   Shake "), "protein shake");
        assert_eq!(normalize_item_name("Banana"), "banana");
    }
}
