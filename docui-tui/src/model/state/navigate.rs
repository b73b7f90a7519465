//! 导航栏状态

use crate::model::{PanelKind, Region};

/// 底部导航栏：当前面板名与可用按键
#[derive(Debug, Clone)]
pub struct Navigate {
    pub region: Region,
    pub active: PanelKind,
}

impl Navigate {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            active: PanelKind::ImageList,
        }
    }

    pub fn render_lines(&self) -> Vec<String> {
        vec![format!("{}: {}", self.active.name(), key_hints(self.active))]
    }
}

/// 各面板的按键提示
pub fn key_hints(kind: PanelKind) -> &'static str {
    match kind {
        PanelKind::ImageList | PanelKind::VolumeList => {
            "enter inspect | d remove | j/k move | ^f/^b page | h/l/tab switch | ^r refresh | q quit"
        }
        PanelKind::ContainerList => {
            "enter inspect | u start | s stop | d remove | j/k move | h/l/tab switch | ^r refresh | q quit"
        }
        PanelKind::Detail => "j/k scroll | ^f/^b page | h/l/tab switch | ^r refresh | q quit",
        PanelKind::ErrorMessage => "enter close",
        PanelKind::Confirm => "y/enter yes | n no",
        PanelKind::State => "working, ^q quit",
        PanelKind::Navigate => "",
    }
}
