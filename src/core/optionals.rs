//! 可選值的基本操作：宣告、指派、強制解包與條件解包。

use crate::domain::ports::Console;
use crate::utils::error::Result;

/// 一個可能沒有值的 Double
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OptionalDouble {
    value: Option<f64>,
}

impl OptionalDouble {
    /// 宣告時沒有值
    pub fn new() -> Self {
        Self { value: None }
    }

    pub fn assign(&mut self, value: f64) {
        self.value = Some(value);
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// 強制解包；沒有值時直接 panic
    pub fn force_unwrap(&self) -> f64 {
        self.value
            .expect("force unwrapped an optional value that holds no value")
    }

    /// 條件解包；只有在有值時才回傳 `Some`
    pub fn conditional_unwrap(&self) -> Option<f64> {
        self.value
    }

    /// 只有在有值時才執行 `f`，沒有值時略過
    pub fn if_let_unwrap<R, F: FnOnce(f64) -> R>(&self, f: F) -> Option<R> {
        self.value.map(f)
    }
}

impl From<Option<f64>> for OptionalDouble {
    fn from(value: Option<f64>) -> Self {
        Self { value }
    }
}

/// 以 Double 的慣用格式輸出（`5.0` 而不是 `5`）
pub fn format_double(value: f64) -> String {
    format!("{:?}", value)
}

/// 依序示範：宣告為空、指派、強制解包、條件解包並輸出
pub fn run_demo<C: Console>(console: &mut C, assigned: Option<f64>) -> Result<()> {
    let mut my_double = OptionalDouble::new();
    tracing::debug!("declared optional double, present: {}", my_double.is_present());

    if let Some(value) = assigned {
        my_double.assign(value);
    }

    if my_double.is_present() {
        let forced = my_double.force_unwrap();
        tracing::debug!("force unwrapped value: {}", format_double(forced));
    } else {
        tracing::warn!("⚠️ no value assigned, skipping the force unwrap");
    }

    my_double
        .if_let_unwrap(|unwrapped| console.print(&format_double(unwrapped)))
        .transpose()?;

    Ok(())
}
