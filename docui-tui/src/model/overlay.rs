//! 弹窗状态

use crate::backend::Operation;

use super::PanelKind;

/// 弹窗种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// 错误信息，Enter 关闭
    Error,
    /// 确认操作，y/Enter 执行，n 取消
    Confirm,
    /// 后台操作进行中，没有按键
    State,
}

impl OverlayKind {
    pub fn panel(self) -> PanelKind {
        match self {
            Self::Error => PanelKind::ErrorMessage,
            Self::Confirm => PanelKind::Confirm,
            Self::State => PanelKind::State,
        }
    }

    pub fn name(self) -> &'static str {
        self.panel().name()
    }
}

/// 打开中的弹窗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub message: String,
    /// 确认后执行的操作，只有确认弹窗会带
    pub on_accept: Option<Operation>,
}

impl Overlay {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: OverlayKind::Error,
            message: message.into(),
            on_accept: None,
        }
    }

    pub fn confirm(message: impl Into<String>, operation: Operation) -> Self {
        Self {
            kind: OverlayKind::Confirm,
            message: message.into(),
            on_accept: Some(operation),
        }
    }

    pub fn state(message: impl Into<String>) -> Self {
        Self {
            kind: OverlayKind::State,
            message: message.into(),
            on_accept: None,
        }
    }
}

/// 打开中的弹窗集合，每种最多一个，按打开顺序保存
#[derive(Debug, Default)]
pub struct OverlayState {
    open: Vec<Overlay>,
}

impl OverlayState {
    /// 打开弹窗；同种弹窗已打开时替换其内容并返回 `false`
    pub fn upsert(&mut self, overlay: Overlay) -> bool {
        match self.open.iter_mut().find(|o| o.kind == overlay.kind) {
            Some(existing) => {
                *existing = overlay;
                false
            }
            None => {
                self.open.push(overlay);
                true
            }
        }
    }

    pub fn remove(&mut self, kind: OverlayKind) -> Option<Overlay> {
        let index = self.open.iter().position(|o| o.kind == kind)?;
        Some(self.open.remove(index))
    }

    pub fn get(&self, kind: OverlayKind) -> Option<&Overlay> {
        self.open.iter().find(|o| o.kind == kind)
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.get(kind).is_some()
    }

    /// 最后打开且仍未关闭的弹窗
    pub fn top(&self) -> Option<&Overlay> {
        self.open.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.open.iter()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
