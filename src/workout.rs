use chrono::NaiveDate;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

/// 一天的训练会话
///
/// 每个记录块对应一条会话记录。除日期外所有字段都可能为空，
/// 空值表示日志里没有写，而不是 0。
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SessionRecord {
    /// 会话日期，在整个数据集中唯一
    pub date: NaiveDate,

    /// 目标肌群（如 "Mix"、"Chest"）
    pub muscle_target: Option<String>,

    /// 训练前餐食原文
    pub preworkout_meal: Option<String>,

    /// 由餐食原文拆分出的各项数量
    pub meal: MealBreakdown,

    /// 训练中补水量（毫升）
    pub hydration_ml: Option<u32>,

    /// 训练时长（分钟）
    pub duration_min: Option<u32>,

    /// 平均心率
    pub avg_heart_rate: Option<u32>,

    /// 消耗热量（千卡）
    pub calories: Option<u32>,
}

impl SessionRecord {
    /// 只有日期的空会话
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }
}

/// 一组训练的内容：负重×次数，或有氧时长，二者互斥
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SetKind {
    /// 负重组，自重训练记为重量 0
    Weighted { weight: f64, reps: u32 },
    /// 有氧组
    Cardio { duration_min: f64 },
}

/// 训练明细表中的一行（一组）
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ExerciseEntry {
    /// 所属会话日期
    pub session_date: NaiveDate,

    /// 动作名称
    pub exercise_name: String,

    /// 组序号，从 1 开始
    pub set_index: u32,

    /// 该组内容
    pub set: SetKind,
}

impl ExerciseEntry {
    pub fn weight(&self) -> Option<f64> {
        match self.set {
            SetKind::Weighted { weight, .. } => Some(weight),
            SetKind::Cardio { .. } => None,
        }
    }

    pub fn reps(&self) -> Option<u32> {
        match self.set {
            SetKind::Weighted { reps, .. } => Some(reps),
            SetKind::Cardio { .. } => None,
        }
    }

    pub fn duration_min(&self) -> Option<f64> {
        match self.set {
            SetKind::Cardio { duration_min } => Some(duration_min),
            SetKind::Weighted { .. } => None,
        }
    }

    /// 该组训练量（重量×次数），有氧组为 0
    pub fn volume(&self) -> f64 {
        match self.set {
            SetKind::Weighted { weight, reps } => weight * f64::from(reps),
            SetKind::Cardio { .. } => 0.0,
        }
    }
}

/// 一种餐食及其数量
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MealComponent {
    /// 规范化后的名称（小写、去首尾空白、合并内部空白）
    pub item_name: String,

    /// 数量，未写数量时为 1
    pub quantity: f64,
}

/// 餐食拆分结果
///
/// `items` 按名称排序，重复出现的同名项数量相加；
/// 无法解析的子句原样保留在 `unparsed` 中。
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MealBreakdown {
    pub items: BTreeMap<String, f64>,
    pub unparsed: Vec<String>,
}

impl MealBreakdown {
    pub fn add(&mut self, item_name: impl Into<String>, quantity: f64) {
        *self.items.entry(item_name.into()).or_insert(0.0) += quantity;
    }

    /// 某项的数量，未出现时为 0
    pub fn quantity(&self, item_name: &str) -> f64 {
        self.items.get(item_name).copied().unwrap_or(0.0)
    }

    pub fn components(&self) -> Vec<MealComponent> {
        self.items
            .iter()
            .map(|(name, qty)| MealComponent {
                item_name: name.clone(),
                quantity: *qty,
            })
            .collect()
    }

    /// 未解析子句用 ` & ` 拼接，没有时返回 `None`
    pub fn unparsed_text(&self) -> Option<String> {
        if self.unparsed.is_empty() {
            None
        } else {
            Some(self.unparsed.join(" & "))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.unparsed.is_empty()
    }
}

/// 一次完整解析的结果：会话表、训练明细表和全部警告
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkoutLog {
    pub sessions: Vec<SessionRecord>,
    pub exercises: Vec<ExerciseEntry>,
    pub warnings: Vec<crate::error::ParseWarning>,
}

impl WorkoutLog {
    /// 按日期查找会话
    pub fn session(&self, date: NaiveDate) -> Option<&SessionRecord> {
        self.sessions.iter().find(|s| s.date == date)
    }

    /// 某一天的所有组
    pub fn exercises_on(&self, date: NaiveDate) -> impl Iterator<Item = &ExerciseEntry> {
        self.exercises.iter().filter(move |e| e.session_date == date)
    }
}
