//! 衍生指标
//!
//! 基于解析结果计算训练量、每分钟训练量、补水分档与重量停滞点。
//! 所有函数都只读取 [`WorkoutLog`]，返回新的数据，不修改输入。

use crate::workout::{SetKind, WorkoutLog};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// 训练中补水量分档
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HydrationLevel {
    Below500,
    From500To750,
    From750To1000,
    From1000To1250,
    From1250To1500,
    Above1500,
}

impl HydrationLevel {
    pub fn from_ml(ml: u32) -> Self {
        match ml {
            0..500 => HydrationLevel::Below500,
            500..750 => HydrationLevel::From500To750,
            750..1000 => HydrationLevel::From750To1000,
            1000..1250 => HydrationLevel::From1000To1250,
            1250..1500 => HydrationLevel::From1250To1500,
            _ => HydrationLevel::Above1500,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HydrationLevel::Below500 => "<500",
            HydrationLevel::From500To750 => "500-750",
            HydrationLevel::From750To1000 => "750-1000",
            HydrationLevel::From1000To1250 => "1000-1250",
            HydrationLevel::From1250To1500 => "1250-1500",
            HydrationLevel::Above1500 => "1500+",
        }
    }
}

impl fmt::Display for HydrationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 单个会话的衍生指标
#[derive(Debug, Clone, PartialEq)]
pub struct SessionMetrics {
    pub date: NaiveDate,
    /// Σ 重量×次数
    pub total_volume: f64,
    /// 训练时长缺失或为 0 时为空
    pub volume_per_minute: Option<f64>,
    pub hydration_level: Option<HydrationLevel>,
}

/// 重量停滞点：与上一个训练日的平均重量相同
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StallPoint {
    pub date: NaiveDate,
    pub avg_weight: f64,
}

/// 每个会话的总训练量，没有任何负重组的会话为 0
pub fn session_volume(log: &WorkoutLog) -> BTreeMap<NaiveDate, f64> {
    let mut volumes: BTreeMap<NaiveDate, f64> =
        log.sessions.iter().map(|s| (s.date, 0.0)).collect();
    for entry in &log.exercises {
        *volumes.entry(entry.session_date).or_insert(0.0) += entry.volume();
    }
    volumes
}

/// 每个动作在整个数据集中的总训练量
pub fn exercise_volume(log: &WorkoutLog) -> BTreeMap<String, f64> {
    let mut volumes = BTreeMap::new();
    for entry in &log.exercises {
        *volumes.entry(entry.exercise_name.clone()).or_insert(0.0) += entry.volume();
    }
    volumes
}

/// 按会话顺序计算衍生指标
pub fn session_metrics(log: &WorkoutLog) -> Vec<SessionMetrics> {
    let volumes = session_volume(log);
    log.sessions
        .iter()
        .map(|s| {
            let total_volume = volumes.get(&s.date).copied().unwrap_or(0.0);
            let volume_per_minute = s
                .duration_min
                .filter(|&d| d > 0)
                .map(|d| total_volume / f64::from(d));
            SessionMetrics {
                date: s.date,
                total_volume,
                volume_per_minute,
                hydration_level: s.hydration_ml.map(HydrationLevel::from_ml),
            }
        })
        .collect()
}

/// 按日期排序后的累计平均训练量
pub fn cumulative_average_volume(metrics: &[SessionMetrics]) -> Vec<(NaiveDate, f64)> {
    let mut sorted: Vec<&SessionMetrics> = metrics.iter().collect();
    sorted.sort_by_key(|m| m.date);

    let mut sum = 0.0;
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, m)| {
            sum += m.total_volume;
            (m.date, sum / (i + 1) as f64)
        })
        .collect()
}

/// 检测某个动作的重量停滞
///
/// 对每个训练日取该动作负重组的平均重量，按日期排序；
/// 平均重量与上一个训练日相同的日期记为停滞点。动作名比较忽略大小写。
pub fn detect_stalls(log: &WorkoutLog, exercise_name: &str) -> Vec<StallPoint> {
    detect_stalls_for_target(log, exercise_name, None)
}

/// 同 [`detect_stalls`]，但只统计目标肌群为 `muscle_target` 的训练日
///
/// 同一动作在不同肌群日的重量分开比较。肌群比较忽略大小写，`None` 表示不过滤。
pub fn detect_stalls_for_target(
    log: &WorkoutLog,
    exercise_name: &str,
    muscle_target: Option<&str>,
) -> Vec<StallPoint> {
    let wanted = exercise_name.trim().to_lowercase();
    let target = muscle_target.map(|t| t.trim().to_lowercase());

    let mut per_day: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
    for entry in &log.exercises {
        if entry.exercise_name.to_lowercase() != wanted {
            continue;
        }
        if let Some(target) = &target {
            let matches_target = log
                .session(entry.session_date)
                .and_then(|s| s.muscle_target.as_deref())
                .is_some_and(|t| t.trim().to_lowercase() == *target);
            if !matches_target {
                continue;
            }
        }
        if let SetKind::Weighted { weight, .. } = entry.set {
            let slot = per_day.entry(entry.session_date).or_insert((0.0, 0));
            slot.0 += weight;
            slot.1 += 1;
        }
    }

    let averages: Vec<(NaiveDate, f64)> = per_day
        .into_iter()
        .map(|(date, (sum, count))| (date, sum / f64::from(count)))
        .collect();

    averages
        .windows(2)
        .filter(|pair| pair[1].1 == pair[0].1)
        .map(|pair| StallPoint {
            date: pair[1].0,
            avg_weight: pair[1].1,
        })
        .collect()
}
