//! 终端交互
//!
//! 按空白分隔逐个读取输入单词，一行中剩余的单词留给后续读取

use anyhow::{bail, Context, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// 交互式提示器
pub struct Prompt<R, W> {
    input: R,
    output: W,
    /// 当前行尚未读取的单词
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// 输出一整行
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write to output")?;
        Ok(())
    }

    /// 输出提示（不换行）
    pub fn ask(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .context("Failed to write to output")?;
        Ok(())
    }

    /// 读取下一个单词，必要时跨行读取
    ///
    /// 输入结束视为错误
    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read from input")?;
            if read == 0 {
                bail!("Unexpected end of input");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
