//! 屏幕布局计算
//!
//! 主面板使用固定网格：左半边上下叠放三个资源列表，右半边是详情，
//! 底部三行是导航栏。弹窗居中放在屏幕三分之一高度处。

use ratatui::layout::Rect;

use super::{OverlayKind, PanelKind};

/// 导航栏高度（含边框）
pub const NAVIGATE_HEIGHT: u16 = 3;

/// 屏幕上的一块矩形区域，坐标含边框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// 去掉边框后的可写尺寸 (宽, 高)
    pub fn inner_size(self) -> (usize, usize) {
        (
            usize::from(self.width.saturating_sub(2)),
            usize::from(self.height.saturating_sub(2)),
        )
    }
}

impl From<Region> for Rect {
    fn from(region: Region) -> Self {
        Rect::new(region.x, region.y, region.width, region.height)
    }
}

/// 主面板网格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub images: Region,
    pub containers: Region,
    pub volumes: Region,
    pub detail: Region,
    pub navigate: Region,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        let body = height.saturating_sub(NAVIGATE_HEIGHT);
        let left = width / 2;
        let third = body / 3;

        Self {
            images: Region::new(0, 0, left, third),
            containers: Region::new(0, third, left, third),
            volumes: Region::new(0, third * 2, left, body - third * 2),
            detail: Region::new(left, 0, width - left, body),
            navigate: Region::new(0, body, width, height - body),
        }
    }

    /// 主面板对应的区域；弹窗不在网格内
    pub fn region_of(&self, kind: PanelKind) -> Option<Region> {
        match kind {
            PanelKind::ImageList => Some(self.images),
            PanelKind::ContainerList => Some(self.containers),
            PanelKind::VolumeList => Some(self.volumes),
            PanelKind::Detail => Some(self.detail),
            PanelKind::Navigate => Some(self.navigate),
            PanelKind::ErrorMessage | PanelKind::Confirm | PanelKind::State => None,
        }
    }
}

/// 弹窗区域
///
/// 错误与确认弹窗左右各留五分之一，高 5 行；状态弹窗左右各留三分之一，高 3 行。
pub fn overlay_region(kind: OverlayKind, width: u16, height: u16) -> Region {
    let (x, h) = match kind {
        OverlayKind::Error | OverlayKind::Confirm => (width / 5, 5),
        OverlayKind::State => (width / 3, 3),
    };
    let y = height / 3;
    Region::new(
        x,
        y,
        width.saturating_sub(x * 2),
        h.min(height.saturating_sub(y)),
    )
}
