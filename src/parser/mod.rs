//! Parser 模块 - 解析手写训练日志
//!
//! 此模块提供了完整的日志解析功能,包括:
//! - Block 切分（按日期行）
//! - 行分类
//! - 字段提取（组数记号、手环记录、补水、餐食拆分）
//! - 便捷 API 函数

mod api;
pub mod block;
pub mod block_parser;
pub mod classify;
mod constants;
pub mod extract;
pub mod session_parser;

pub use api::{LogRecordParser, parse_log_from_file, parse_log_from_reader, parse_log_from_str};
pub use block::{Block, BlockLine};
pub use block_parser::BlockParser;
pub use classify::{LineKind, classify_line};
pub use extract::{
    ExerciseLine, FieldExtractor, FuelingInfo, SetToken, TrackerSummary, decompose_meal,
    parse_exercise_line, parse_hydration, parse_set_token,
};
pub use session_parser::{BlockOutput, parse_block};
