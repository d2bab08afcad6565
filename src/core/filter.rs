/// 移除空值，依原本順序回傳有值的元素；不修改輸入
pub fn remove_absent<T: Clone>(items: &[Option<T>]) -> Vec<T> {
    items.iter().flatten().cloned().collect()
}
