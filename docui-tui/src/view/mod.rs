//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一帧按叠放顺序把视图表面上的所有视图画出来，后画的盖住先画的；
//! 当前视图使用焦点边框，并在开启高亮时高亮光标所在行。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod pane;           // 单个视图的渲染
//!         pub mod theme;      // 主题颜色与常用样式
//!

mod pane;
pub mod theme;

use ratatui::Frame;

use crate::model::{App, Surface};

/// 渲染整个界面
pub fn render<S: Surface>(app: &App<S>, frame: &mut Frame) {
    let current = app.surface.current_view();
    for view in app.surface.views() {
        pane::render(frame, view, current == Some(view.name()));
    }
}
