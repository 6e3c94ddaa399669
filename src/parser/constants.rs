//! 解析器使用的常量定义
//!
//! 定义了记号、餐食子句和数值的预编译正则，以及若干分隔符常量。

use once_cell::sync::Lazy;
use regex::Regex;

// 分隔符常量

/// 训练行中动作名与组数之间的分隔符
pub const EXERCISE_NAME_SEPARATOR: char = ':';

/// 组数、手环子句、饮食子句之间的分隔符
pub const CLAUSE_SEPARATOR: char = ',';

/// 标签与取值之间的分隔符（`duration - 40 min`）
pub const LABEL_VALUE_SEPARATOR: u8 = b'-';

// 使用 Lazy 静态初始化正则，避免重复编译

/// 负重组记号：`<重量>X<次数>`，允许小写 x、X 两侧空格以及次数后的一个句点
pub static WEIGHTED_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*[xX]\s*(\d+)\.?$").expect("valid weighted token regex")
});

/// 有氧组记号：`<分钟>min`
pub static DURATION_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*mins?\.?$").expect("valid duration token regex")
});

/// 餐食连接词：`&`、`,` 以及独立单词 `and`
pub static MEAL_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)&|,|\band\b").expect("valid meal separator regex"));

/// 餐食子句：`[<数量> ]<名称>`
pub static MEAL_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+(?:\.\d+)?)\s+)?(\p{Alphabetic}[\p{Alphabetic}\s'()\-]*)$")
        .expect("valid meal clause regex")
});

/// 补水量：`<毫升>mL`
pub static HYDRATION_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d+)\s*ml\.?$").expect("valid hydration regex"));

/// 手环取值：整数 + 可选单位（`40 min`、`276kcal`、`105`）
pub static TRACKER_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s*(\p{Alphabetic}*)\.?$").expect("valid tracker value regex")
});
