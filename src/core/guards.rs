//! Guard 子句：條件不成立時輸出訊息並提早返回。

use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Guard 條件為 `my_number < 0`
pub fn negative_check<C: Console>(console: &mut C, my_number: i64) -> Result<()> {
    if my_number >= 0 {
        tracing::debug!("guard failed: {} < 0 is false", my_number);
        console.print("I am positive")?;
        return Ok(());
    }

    console.print("I am negative!")
}

/// Guard 條件為 `my_number > 0`；零會進入 else 分支
pub fn positive_check<C: Console>(console: &mut C, my_number: i64) -> Result<()> {
    if my_number <= 0 {
        tracing::debug!("guard failed: {} > 0 is false", my_number);
        console.print("I am negative")?;
        return Ok(());
    }

    console.print("I am positive!")
}

/// 整數除法，朝零截斷（`-7 / 2 == -3`）。
///
/// 除數為零時回傳 0 而不是回報錯誤。`i64::MIN / -1` 仍會因溢位而 panic。
pub fn divide_two_numbers(first_num: i64, second_num: i64) -> i64 {
    if second_num == 0 {
        return 0;
    }
    first_num / second_num
}

/// 沒有值時輸出 `This value is nil`，否則輸出解包後的值
pub fn report_optional_number<C: Console>(
    console: &mut C,
    my_optional_number: Option<i64>,
) -> Result<()> {
    let Some(unwrapped) = my_optional_number else {
        tracing::debug!("guard let failed: optional number is absent");
        console.print("This value is nil")?;
        return Ok(());
    };

    console.print(&format!("This unwrapped value is {}", unwrapped))
}

/// 陣列總和；空陣列時輸出 `This value is nil` 並回傳 0。
///
/// 以第一個元素是否存在當作非空檢查，總和仍對整個陣列計算。
pub fn add_num_in_array<C: Console>(console: &mut C, array: &[i64]) -> Result<i64> {
    let Some(_first) = array.first() else {
        tracing::debug!("guard let failed: array has no first element");
        console.print("This value is nil")?;
        return Ok(0);
    };

    Ok(array.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;
    use std::sync::{Arc, Mutex};

    fn printed<F>(f: F) -> Vec<String>
    where
        F: FnOnce(&mut MemoryConsole) -> Result<()>,
    {
        let mut console = MemoryConsole::new();
        f(&mut console).unwrap();
        console.lines().to_vec()
    }

    #[test]
    fn test_negative_check() {
        assert_eq!(printed(|c| negative_check(c, 10)), ["I am positive"]);
        assert_eq!(printed(|c| negative_check(c, 0)), ["I am positive"]);
        assert_eq!(printed(|c| negative_check(c, -10)), ["I am negative!"]);
    }

    #[test]
    fn test_positive_check() {
        assert_eq!(printed(|c| positive_check(c, 10)), ["I am positive!"]);
        assert_eq!(printed(|c| positive_check(c, 0)), ["I am negative"]);
        assert_eq!(printed(|c| positive_check(c, -10)), ["I am negative"]);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn debug_logs<F: FnOnce()>(f: F) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_sign_guard_early_exits_are_logged() {
        let mut console = MemoryConsole::new();

        let logs = debug_logs(|| {
            negative_check(&mut console, 3).unwrap();
            positive_check(&mut console, -3).unwrap();
        });

        assert!(logs.contains("guard failed: 3 < 0 is false"));
        assert!(logs.contains("guard failed: -3 > 0 is false"));
    }

    #[test]
    fn test_passing_sign_guards_are_silent() {
        let mut console = MemoryConsole::new();

        let logs = debug_logs(|| {
            negative_check(&mut console, -3).unwrap();
            positive_check(&mut console, 3).unwrap();
        });

        assert!(!logs.contains("guard failed"));
        assert_eq!(console.lines(), ["I am negative!", "I am positive!"]);
    }

    #[test]
    fn test_divide_two_numbers() {
        assert_eq!(divide_two_numbers(10, 0), 0);
        assert_eq!(divide_two_numbers(10, 2), 5);
        assert_eq!(divide_two_numbers(-7, 2), -3);
        assert_eq!(divide_two_numbers(7, -2), -3);
        assert_eq!(divide_two_numbers(0, 0), 0);
    }

    #[test]
    #[should_panic]
    fn test_divide_overflow_is_not_masked() {
        divide_two_numbers(i64::MIN, -1);
    }

    #[test]
    fn test_report_optional_number() {
        assert_eq!(
            printed(|c| report_optional_number(c, Some(10))),
            ["This unwrapped value is 10"]
        );
        assert_eq!(printed(|c| report_optional_number(c, None)), ["This value is nil"]);
    }

    #[test]
    fn test_add_num_in_array() {
        let mut console = MemoryConsole::new();
        assert_eq!(add_num_in_array(&mut console, &[1, 2, 3, 4, 5, 6]).unwrap(), 21);
        assert!(console.is_empty());

        assert_eq!(add_num_in_array(&mut console, &[]).unwrap(), 0);
        assert_eq!(console.lines(), ["This value is nil"]);
    }

    #[test]
    fn test_add_num_in_array_single_and_negative() {
        let mut console = MemoryConsole::new();
        assert_eq!(add_num_in_array(&mut console, &[-4]).unwrap(), -4);
        assert_eq!(add_num_in_array(&mut console, &[3, -3]).unwrap(), 0);
        assert!(console.is_empty());
    }
}
