//! BlockParser - 从 Reader 流式读取并切分记录块
//!
//! 提供了一个迭代器，可以从任何实现了 `Read` trait 的源中逐块读取每天的日志。

use crate::parser::block::{Block, BlockLine};
use crate::parser_config::ParserConfig;
use crate::tools::{DateLine, classify_date_line};
use std::{
    io::{self, BufRead, BufReader, Read},
    mem,
};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// 从 Reader 中按行读取并切分成 Block 的迭代器
///
/// 日期行开始一个新块，直到下一个日期行或文件结束。空行被忽略。
/// 第一个日期行之前的行不属于任何块，可通过 [`BlockParser::leading_lines`] 取回。
///
/// # 类型参数
///
/// * `R` - 实现了 `Read` trait 的类型
pub struct BlockParser<R: Read> {
    reader: BufReader<R>,
    buffer: String,
    date_formats: Vec<String>,
    line_number: usize,
    next_header: Option<(usize, String, DateLine)>,
    leading: Vec<BlockLine>,
    finished: bool,
}

impl<R: Read> BlockParser<R> {
    /// 使用默认日期格式创建
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, &ParserConfig::default())
    }

    pub fn with_config(reader: R, config: &ParserConfig) -> Self {
        Self {
            reader: BufReader::new(reader),
            buffer: String::new(),
            date_formats: config.date_formats.clone(),
            line_number: 0,
            next_header: None,
            leading: Vec::new(),
            finished: false,
        }
    }

    /// 第一个日期行之前出现的非空行
    pub fn leading_lines(&self) -> &[BlockLine] {
        &self.leading
    }

    /// 读取下一行，返回 (行号, 去掉换行符的内容)
    fn read_line(&mut self) -> io::Result<Option<(usize, String)>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_line(&mut self.buffer)?;

        if bytes_read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.line_number == 1 && self.buffer.starts_with(BYTE_ORDER_MARK) {
            self.buffer.replace_range(..BYTE_ORDER_MARK.len_utf8(), "");
        }

        let mut len = self.buffer.len();
        while len > 0 {
            let last_byte = self.buffer.as_bytes()[len - 1];
            if last_byte == b'\n' || last_byte == b'\r' {
                len -= 1;
            } else {
                break;
            }
        }
        self.buffer.truncate(len);

        Ok(Some((self.line_number, mem::take(&mut self.buffer))))
    }

    /// 获取下一个块的日期行，途中遇到的非日期行记为前导行
    fn get_header(&mut self) -> io::Result<Option<(usize, String, DateLine)>> {
        if let Some(header) = self.next_header.take() {
            return Ok(Some(header));
        }

        loop {
            match self.read_line()? {
                Some((number, line)) => {
                    let kind = classify_date_line(&line, self.date_formats.as_slice());
                    if kind.is_boundary() {
                        return Ok(Some((number, line.trim().to_string(), kind)));
                    }
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        self.leading.push(BlockLine {
                            number,
                            text: trimmed.to_string(),
                        });
                    }
                }
                None => {
                    self.finished = true;
                    return Ok(None);
                }
            }
        }
    }

    /// 读取当前块的所有内容行
    fn read_block_lines(&mut self, block: &mut Block) -> io::Result<()> {
        loop {
            match self.read_line()? {
                Some((number, line)) => {
                    let kind = classify_date_line(&line, self.date_formats.as_slice());
                    if kind.is_boundary() {
                        // 遇到下一个日期行，保存它并结束当前块
                        self.next_header = Some((number, line.trim().to_string(), kind));
                        break;
                    }
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        block.add_line(number, trimmed.to_string());
                    }
                }
                None => {
                    self.finished = true;
                    break;
                }
            }
        }
        Ok(())
    }
}

impl<R: Read> Iterator for BlockParser<R> {
    type Item = io::Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished && self.next_header.is_none() {
            return None;
        }

        let (number, header, kind) = match self.get_header() {
            Ok(Some(h)) => h,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };

        let date = match kind {
            DateLine::Valid(date) => Some(date),
            DateLine::Invalid | DateLine::NotDate => None,
        };
        let mut block = Block::new(number, header, date);

        match self.read_block_lines(&mut block) {
            Ok(()) => Some(Ok(block)),
            Err(e) => Some(Err(e)),
        }
    }
}
