//! 焦点状态定义

use super::PanelKind;

/// 焦点状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusState {
    /// 当前面板在循环序列中的下标
    pub active: usize,
    /// 弹窗关闭后回到的面板
    pub next_panel: PanelKind,
}

impl Default for FocusState {
    fn default() -> Self {
        Self {
            active: 0,
            next_panel: PanelKind::ImageList,
        }
    }
}

impl FocusState {
    /// 循环序列中的下一个位置
    pub fn next_index(&self, len: usize) -> Option<usize> {
        (self.active + 1).checked_rem(len)
    }

    /// 循环序列中的上一个位置
    pub fn previous_index(&self, len: usize) -> Option<usize> {
        (self.active + len).checked_sub(1)?.checked_rem(len)
    }
}
