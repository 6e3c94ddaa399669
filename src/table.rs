//! 输出表格
//!
//! 把 [`WorkoutLog`] 渲染为两张表：会话表和训练明细表，并通过 `csv` crate 写出。
//! 空值写为空单元格。相同输入总是得到逐字节相同的输出。

use crate::error::ParseError;
use crate::parser_config::ParserConfig;
use crate::workout::WorkoutLog;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

/// 会话表的固定列
pub const SESSION_COLUMNS: [&str; 8] = [
    "date",
    "muscle_target",
    "preworkout_meal_raw",
    "unparsed_meal_text",
    "hydration_ml",
    "duration_min",
    "avg_heart_rate",
    "calories",
];

/// 训练明细表的列
pub const EXERCISE_COLUMNS: [&str; 6] = [
    "date",
    "exercise_name",
    "set_index",
    "weight",
    "reps",
    "duration_min",
];

/// 简单的字符串表格
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 按行号与列名取单元格
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// 以 CSV 格式写出（含表头）
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ParseError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String, ParseError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).map_err(|e| ParseError::Csv(e.to_string()))
    }
}

/// 餐食名称转为列名：`peanut butter` -> `peanut_butter_qty`
pub fn meal_column_name(item_name: &str) -> String {
    let mut name: String = item_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    name.push_str("_qty");
    name
}

/// 构建会话表
///
/// 固定列之后是餐食数量列：先是配置中的固定餐食项，再是其余出现过的餐食项（按名称排序）。
/// 某天没有出现的餐食项记为 0。
pub fn session_table(log: &WorkoutLog, config: &ParserConfig) -> Table {
    let mut meal_columns: Vec<String> = Vec::new();
    let mut known: BTreeSet<String> = BTreeSet::new();
    for item in &config.tracked_meal_items {
        let column = meal_column_name(item);
        if known.insert(column.clone()) {
            meal_columns.push(column);
        }
    }
    let seen: BTreeSet<String> = log
        .sessions
        .iter()
        .flat_map(|s| s.meal.items.keys())
        .map(|item| meal_column_name(item))
        .collect();
    for column in seen {
        if known.insert(column.clone()) {
            meal_columns.push(column);
        }
    }

    let mut columns: Vec<String> = SESSION_COLUMNS.iter().map(|c| c.to_string()).collect();
    columns.extend(meal_columns.iter().cloned());

    let rows = log
        .sessions
        .iter()
        .map(|s| {
            // 不同名称可能映射到同一列，数量相加
            let mut quantities: BTreeMap<String, f64> = BTreeMap::new();
            for (item, qty) in &s.meal.items {
                *quantities.entry(meal_column_name(item)).or_insert(0.0) += qty;
            }

            let mut row = vec![
                s.date.to_string(),
                opt_cell(s.muscle_target.as_ref()),
                opt_cell(s.preworkout_meal.as_ref()),
                opt_cell(s.meal.unparsed_text().as_ref()),
                opt_cell(s.hydration_ml.as_ref()),
                opt_cell(s.duration_min.as_ref()),
                opt_cell(s.avg_heart_rate.as_ref()),
                opt_cell(s.calories.as_ref()),
            ];
            row.extend(
                meal_columns
                    .iter()
                    .map(|c| quantities.get(c).copied().unwrap_or(0.0).to_string()),
            );
            row
        })
        .collect();

    Table { columns, rows }
}

/// 构建训练明细表，负重组的 `duration_min` 与有氧组的 `weight`/`reps` 为空
pub fn exercise_table(log: &WorkoutLog) -> Table {
    let columns = EXERCISE_COLUMNS.iter().map(|c| c.to_string()).collect();
    let rows = log
        .exercises
        .iter()
        .map(|e| {
            vec![
                e.session_date.to_string(),
                e.exercise_name.clone(),
                e.set_index.to_string(),
                opt_cell(e.weight().as_ref()),
                opt_cell(e.reps().as_ref()),
                opt_cell(e.duration_min().as_ref()),
            ]
        })
        .collect();

    Table { columns, rows }
}

fn opt_cell<T: ToString>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_column_names() {
        assert_eq!(meal_column_name("banana"), "banana_qty");
        assert_eq!(meal_column_name("peanut butter"), "peanut_butter_qty");
        assert_eq!(meal_column_name("ice-cream"), "ice_cream_qty");
    }

    #[test]
    fn empty_log_still_has_headers() {
        let log = WorkoutLog::default();
        let sessions = session_table(&log, &ParserConfig::default());
        assert_eq!(sessions.columns.len(), SESSION_COLUMNS.len() + 4);
        assert!(sessions.rows.is_empty());

        let csv = exercise_table(&log).to_csv_string().unwrap();
        assert_eq!(csv, "date,exercise_name,set_index,weight,reps,duration_min\n");
    }
}
