//! 面板注册表

use std::collections::HashMap;

use crate::error::{GuiError, GuiResult};

use super::{Panel, PanelKind};

/// 主面板注册表
///
/// 面板按种类存放，遍历顺序不保证；可循环面板的顺序由 `cycle` 单独记录。
#[derive(Debug, Default)]
pub struct PanelRegistry {
    panels: HashMap<PanelKind, Panel>,
    cycle: Vec<PanelKind>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册面板，同种类的旧面板被替换
    ///
    /// 可循环面板第一次注册时追加到循环序列末尾，重复注册不会占用新位置。
    pub fn register(&mut self, panel: Panel) {
        let kind = panel.kind();
        if kind.is_cyclable() && !self.cycle.contains(&kind) {
            self.cycle.push(kind);
        }
        if self.panels.insert(kind, panel).is_some() {
            log::debug!("panel `{}` registered again", kind.name());
        }
    }

    /// 按视图名查找面板
    pub fn lookup(&self, name: &str) -> GuiResult<&Panel> {
        PanelKind::from_name(name)
            .and_then(|kind| self.panels.get(&kind))
            .ok_or_else(|| GuiError::PanelNotFound(name.to_string()))
    }

    pub fn lookup_mut(&mut self, name: &str) -> GuiResult<&mut Panel> {
        PanelKind::from_name(name)
            .and_then(|kind| self.panels.get_mut(&kind))
            .ok_or_else(|| GuiError::PanelNotFound(name.to_string()))
    }

    /// 可循环面板，按注册顺序
    pub fn cycle(&self) -> &[PanelKind] {
        &self.cycle
    }

    /// 面板在循环序列中的位置
    pub fn position(&self, kind: PanelKind) -> Option<usize> {
        self.cycle.iter().position(|k| *k == kind)
    }

    /// 以任意顺序遍历全部面板
    pub fn iter_unordered(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    pub fn iter_unordered_mut(&mut self) -> impl Iterator<Item = &mut Panel> {
        self.panels.values_mut()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
