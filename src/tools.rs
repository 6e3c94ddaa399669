use chrono::NaiveDate;
use memchr::memchr;

// 日期行形状常量：D/M/YY 到 DD/MM/YYYY
const MIN_DATE_LINE_LENGTH: usize = 6;
const MAX_DATE_LINE_LENGTH: usize = 10;
const DATE_SEPARATOR: u8 = b'/';

/// 日期行的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLine {
    /// 合法日期，开始一个新的记录块
    Valid(NaiveDate),
    /// 形状是日期但不是合法的日历日期（如 `31/02/24`）
    Invalid,
    /// 不是日期行
    NotDate,
}

impl DateLine {
    /// 是否为记录块边界（合法或非法日期都会结束上一个块）
    pub fn is_boundary(&self) -> bool {
        !matches!(self, DateLine::NotDate)
    }
}

/// 判断一行是否具有日期行的形状。
///
/// 判断标准
/// 1. 去掉首尾空白后整行只包含数字和两个 `/`。
/// 2. 日、月各 1~2 位数字。
/// 3. 年份为 2 位或 4 位数字。
///
/// 只检查形状，不检查日历合法性。
pub fn is_date_shaped(line: &str) -> bool {
    let bytes = line.trim().as_bytes();
    if bytes.len() < MIN_DATE_LINE_LENGTH || bytes.len() > MAX_DATE_LINE_LENGTH {
        return false;
    }

    let first = match memchr(DATE_SEPARATOR, bytes) {
        Some(idx) => idx,
        None => return false,
    };
    let second = match memchr(DATE_SEPARATOR, &bytes[first + 1..]) {
        Some(idx) => first + 1 + idx,
        None => return false,
    };

    let day = &bytes[..first];
    let month = &bytes[first + 1..second];
    let year = &bytes[second + 1..];

    let all_digits = |part: &[u8]| part.iter().all(u8::is_ascii_digit);

    (1..=2).contains(&day.len())
        && (1..=2).contains(&month.len())
        && (year.len() == 2 || year.len() == 4)
        && all_digits(day)
        && all_digits(month)
        && all_digits(year)
}

/// 把一行归类为合法日期行、非法日期行或普通行。
///
/// `formats` 按顺序尝试，第一个成功的格式生效。
pub fn classify_date_line<S: AsRef<str>>(line: &str, formats: &[S]) -> DateLine {
    if !is_date_shaped(line) {
        return DateLine::NotDate;
    }
    let trimmed = line.trim();
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt.as_ref()).ok())
        .map_or(DateLine::Invalid, DateLine::Valid)
}
