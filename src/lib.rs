//! # Workout Log Parser
//!
//! 把手写的日记式训练日志解析为两张结构化表格（会话表、训练明细表），
//! 并计算训练量等衍生指标。
//!
//! ## 功能特性
//!
//! - **容错解析**: 兼容 `1X7`、`2.5X4`、`10min` 等不统一的手写记号
//! - **按天切分**: 以 `DD/MM/YY` 日期行切分记录块，逐行归类
//! - **餐食拆分**: 把 `2 banana & 1 coffee` 拆成按名称计数的数量
//! - **部分失败不中断**: 单行或单字段的问题只记为警告，对应值置空
//!
//! ## 快速开始
//!
//! ```rust
//! use workout_log_parser::{parse_log_from_str, session_table, exercise_table, ParserConfig};
//!
//! let text = "02/05/24
//! Muscle targeted: Mix
//! Fueling: Preworkout - 1 Sandwich, Workout Hydration - 500mL
//! Exercise:
//! Pull Ups: 1X7, 1X3
//! AmazeFit log: duration - 40 min, avg heart rate - 105, calories - 276kcal";
//!
//! let log = parse_log_from_str(text)?;
//! assert_eq!(log.sessions[0].hydration_ml, Some(500));
//! assert_eq!(log.exercises.len(), 2);
//!
//! let sessions = session_table(&log, &ParserConfig::default());
//! assert_eq!(sessions.get(0, "sandwich_qty"), Some("1"));
//!
//! let csv = exercise_table(&log).to_csv_string()?;
//! assert!(csv.contains("2024-05-02,Pull Ups,1,1,7,"));
//! # Ok::<(), workout_log_parser::ParseError>(())
//! ```
//!
//! ## 日志格式
//!
//! ```text
//! 02/05/24
//! Muscle targeted: Mix
//! Fueling: Preworkout - 1 Sandwich, Workout Hydration - 500mL
//! Exercise:
//! Pull Ups: 1X7, 1X3
//! AmazeFit log: duration - 40 min, avg heart rate - 105, calories - 276kcal
//! ```

pub mod error;
pub mod metrics;
pub mod parser;
pub mod parser_config;
pub mod table;
pub mod tools;
pub mod workout;

pub use error::{ParseError, ParseWarning, WarningKind};
pub use parser::{
    LogRecordParser, SetToken, decompose_meal, parse_log_from_file, parse_log_from_reader,
    parse_log_from_str, parse_set_token,
};
pub use parser_config::ParserConfig;
pub use table::{Table, exercise_table, session_table};
pub use workout::{
    ExerciseEntry, MealBreakdown, MealComponent, SessionRecord, SetKind, WorkoutLog,
};
