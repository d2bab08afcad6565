use crate::utils::error::Result;

/// 課程輸出的目的地；每次呼叫輸出一行
pub trait Console {
    fn print(&mut self, line: &str) -> Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn print(&mut self, line: &str) -> Result<()> {
        (**self).print(line)
    }
}
