//! Операции над списками окон.
//!
//! Списки упорядочены, поэтому здесь не `HashSet` на входе, а `Vec` с
//! вспомогательным множеством только для проверки принадлежности.

use super::window::WindowId;
use std::collections::HashSet;

/// Элементы `b`, которые есть в `a`, в порядке `b`
pub fn intersect(a: &[WindowId], b: &[WindowId]) -> Vec<WindowId> {
    let members: HashSet<&WindowId> = a.iter().collect();
    b.iter()
        .filter(|window| members.contains(window))
        .cloned()
        .collect()
}

/// Элементы `a`, которых нет в `b`, в порядке `a`
pub fn subtract(a: &[WindowId], b: &[WindowId]) -> Vec<WindowId> {
    let excluded: HashSet<&WindowId> = b.iter().collect();
    a.iter()
        .filter(|window| !excluded.contains(window))
        .cloned()
        .collect()
}
