//! Parser 配置模块
//!
//! 把日志中用到的行前缀、标签、日期格式和需要固定输出的餐食列集中在一处，
//! 日志格式有变化时只需更新配置，而不需要修改核心解析逻辑。

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 手环记录中可识别的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrackerField {
    /// 训练时长（分钟）
    Duration,
    /// 平均心率
    AvgHeartRate,
    /// 消耗热量（千卡）
    Calories,
}

/// 手环标签定义
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackerLabelDef {
    /// 标签文本，匹配时忽略大小写与所有空白
    pub label: String,

    /// 对应字段
    pub field: TrackerField,
}

/// Parser 配置
///
/// 定义解析器识别的行词汇表。前缀匹配区分大小写。
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParserConfig {
    /// 目标肌群行前缀
    pub muscle_prefix: String,

    /// 饮食/补水行前缀
    pub fueling_prefix: String,

    /// 训练列表起始行（整行相等）
    pub exercise_header: String,

    /// 手环记录行前缀，同时结束训练列表
    pub tracker_prefix: String,

    /// 饮食行中训练前餐食子句的标签
    pub preworkout_label: String,

    /// 饮食行中补水子句的标签
    pub hydration_label: String,

    /// 手环记录标签
    pub tracker_labels: Vec<TrackerLabelDef>,

    /// 可接受的日期格式（chrono 格式串，按顺序尝试）
    pub date_formats: Vec<String>,

    /// 会话表中总是输出的餐食列（即使从未出现也输出 0）
    pub tracked_meal_items: Vec<String>,
}

impl ParserConfig {
    /// 手写训练日志的默认配置
    pub fn diary_default() -> Self {
        Self {
            muscle_prefix: "Muscle targeted:".to_string(),
            fueling_prefix: "Fueling:".to_string(),
            exercise_header: "Exercise:".to_string(),
            tracker_prefix: "AmazeFit log:".to_string(),
            preworkout_label: "Preworkout".to_string(),
            hydration_label: "Workout Hydration".to_string(),
            tracker_labels: vec![
                TrackerLabelDef {
                    label: "duration".to_string(),
                    field: TrackerField::Duration,
                },
                TrackerLabelDef {
                    label: "avg heart rate".to_string(),
                    field: TrackerField::AvgHeartRate,
                },
                TrackerLabelDef {
                    label: "calories".to_string(),
                    field: TrackerField::Calories,
                },
            ],
            date_formats: vec!["%d/%m/%y".to_string(), "%d/%m/%Y".to_string()],
            tracked_meal_items: ["banana", "apple", "coffee", "sandwich"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// 按标签查找手环字段
    ///
    /// 比较时忽略大小写和所有空白，`Avg  HeartRate` 与 `avg heart rate` 视为相同。
    pub fn tracker_field(&self, label: &str) -> Option<TrackerField> {
        let wanted = squash_label(label);
        self.tracker_labels
            .iter()
            .find(|def| squash_label(&def.label) == wanted)
            .map(|def| def.field)
    }

    /// 判断饮食子句标签属于哪一类
    pub(crate) fn fueling_label(&self, label: &str) -> Option<FuelingLabel> {
        let wanted = squash_label(label);
        if wanted == squash_label(&self.preworkout_label) {
            Some(FuelingLabel::Preworkout)
        } else if wanted == squash_label(&self.hydration_label) {
            Some(FuelingLabel::Hydration)
        } else {
            None
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::diary_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FuelingLabel {
    Preworkout,
    Hydration,
}

fn squash_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
