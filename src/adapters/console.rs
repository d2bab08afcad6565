use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, Write};

/// 寫到行程的標準輸出
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn print(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}

/// 把輸出收集在記憶體裡，給測試與輸出比對使用
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryConsole {
    lines: Vec<String>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 與標準輸出相同的文字（每行以換行結尾）
    pub fn output(&self) -> String {
        self.lines.iter().map(|line| format!("{}\n", line)).collect()
    }
}

impl Console for MemoryConsole {
    fn print(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_collects_lines() {
        let mut console = MemoryConsole::new();
        assert!(console.is_empty());

        console.print("I am positive").unwrap();
        console.print("5.0").unwrap();

        assert_eq!(console.lines(), ["I am positive", "5.0"]);
        assert_eq!(console.output(), "I am positive\n5.0\n");
    }

    #[test]
    fn test_console_through_mutable_reference() {
        fn emit<C: Console>(mut console: C) {
            console.print("This value is nil").unwrap();
        }

        let mut console = MemoryConsole::new();
        emit(&mut console);
        assert_eq!(console.lines(), ["This value is nil"]);
    }
}
