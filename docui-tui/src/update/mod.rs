//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层是唯一修改 Model 的地方。
//! 它接收 Message，修改 App，必要时排队后台任务（`App::queue`）。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;        // 后台结果 → 面板内容 / 错误弹窗
//!         mod content;        // 列表操作（inspect、删除、启停）
//!         mod cursor;         // 光标与翻页
//!         mod focus;          // 焦点切换与全量刷新
//!         mod overlay;        // 弹窗生命周期
//!
//!
//! ```text
//!     错误处理：
//!         后台失败不会从这里返回，而是变成错误弹窗；
//!         返回 Err 的只有生命周期契约被破坏（视图不存在、面板未注册），
//!         主循环遇到这种错误会恢复终端后退出。
//! ```
//!

mod backend;
mod content;
pub mod cursor;
pub mod focus;
pub mod overlay;

use docui_core::ResourceKind;

use crate::error::GuiResult;
use crate::event::{bind_global_keys, bind_panel_keys};
use crate::message::AppMessage;
use crate::model::state::{Detail, Navigate};
use crate::model::{overlay_region, App, Grid, Panel, Surface};

/// 处理应用消息，更新状态
pub fn update<S: Surface>(app: &mut App<S>, msg: AppMessage) -> GuiResult<()> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::NextPanel => focus::next_panel(app)?,

        AppMessage::PreviousPanel => focus::previous_panel(app)?,

        AppMessage::Refresh => focus::refresh_all(app)?,

        AppMessage::Cursor(cursor_msg) => cursor::update(app, cursor_msg),

        AppMessage::Overlay(overlay_msg) => overlay::update(app, overlay_msg)?,

        AppMessage::Content(content_msg) => content::update(app, content_msg)?,

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg)?,

        AppMessage::Resize(width, height) => resize(app, width, height),

        AppMessage::Noop => {}
    }
    Ok(())
}

/// 注册主面板、登记按键、排队首次加载并聚焦镜像列表
pub fn init<S: Surface>(app: &mut App<S>) -> GuiResult<()> {
    let (width, height) = app.surface.size();
    let grid = Grid::new(width, height);

    app.registry
        .register(Panel::list(ResourceKind::Image, grid.images));
    app.registry
        .register(Panel::list(ResourceKind::Container, grid.containers));
    app.registry
        .register(Panel::list(ResourceKind::Volume, grid.volumes));
    app.registry.register(Panel::Detail(Detail::new(grid.detail)));
    app.registry
        .register(Panel::Navigate(Navigate::new(grid.navigate)));

    for panel in app.registry.iter_unordered() {
        panel.set_view(&mut app.surface);
        bind_panel_keys(&mut app.surface, panel.kind());
    }
    bind_global_keys(&mut app.surface);

    log::info!("initialized {} panels on a {width}x{height} screen", app.registry.len());
    focus::refresh_all(app)
}

/// 终端尺寸变化：重新计算网格与弹窗区域
fn resize<S: Surface>(app: &mut App<S>, width: u16, height: u16) {
    app.surface.resize(width, height);
    let grid = Grid::new(width, height);

    for panel in app.registry.iter_unordered_mut() {
        if let Some(region) = grid.region_of(panel.kind()) {
            panel.set_region(region);
        }
        panel.set_view(&mut app.surface);
    }

    for overlay in app.overlays.iter() {
        if let Some(view) = app.surface.view_mut(overlay.kind.name()) {
            view.region = overlay_region(overlay.kind, width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Job;
    use crate::message::{BackendMessage, ContentMessage, CursorMessage, OverlayMessage};
    use crate::model::{OverlayKind, PanelKind, Region, ViewSurface};
    use crate::test_utils::{loaded_app, run_jobs};

    #[test]
    fn test_init_creates_views_and_queues_listings() {
        let mut app = App::new(ViewSurface::new(100, 30));
        init(&mut app).unwrap();

        let names: Vec<&str> = app.surface.views().map(|v| v.name()).collect();
        assert_eq!(names.len(), 5);
        assert_eq!(names.last(), Some(&"image list"));
        assert_eq!(app.surface.current_view(), Some("image list"));
        assert_eq!(app.pending_jobs().len(), 3);
        assert!(app.pending_jobs().contains(&Job::List(ResourceKind::Image)));
        assert!(app.surface.has_keybindings("detail"));
        assert!(!app.surface.has_keybindings("navigate"));
    }

    #[test]
    fn test_quit() {
        let (mut app, _backend) = loaded_app();
        update(&mut app, AppMessage::Quit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_resize_moves_panels_and_overlays() {
        let (mut app, _backend) = loaded_app();
        overlay::open_error(&mut app, "boom", PanelKind::ImageList).unwrap();

        update(&mut app, AppMessage::Resize(60, 20)).unwrap();

        assert_eq!(app.surface.size(), (60, 20));
        assert_eq!(
            app.surface.view("detail").unwrap().region,
            Region::new(30, 0, 30, 17)
        );
        assert_eq!(
            app.surface.view("error message").unwrap().region,
            overlay_region(OverlayKind::Error, 60, 20)
        );
        // 焦点不变
        assert_eq!(app.surface.current_view(), Some("error message"));
    }

    #[test]
    fn test_shrinking_keeps_scrolled_cursor_visible() {
        let (mut app, _backend) = loaded_app();
        // 40 行：方括号各一行，中间 38 个数字
        let value = serde_json::json!((0..38).collect::<Vec<u32>>());
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Inspected {
                kind: ResourceKind::Image,
                id: "sha256:big".to_string(),
                origin: PanelKind::ImageList,
                result: Ok(value),
            }),
        )
        .unwrap();
        for _ in 0..3 {
            update(&mut app, AppMessage::NextPanel).unwrap();
        }
        assert_eq!(app.surface.current_view(), Some("detail"));
        for _ in 0..20 {
            update(&mut app, AppMessage::Cursor(CursorMessage::Down)).unwrap();
        }
        assert_eq!(app.surface.view("detail").unwrap().cursor().y, 20);

        update(&mut app, AppMessage::Resize(60, 10)).unwrap();

        let view = app.surface.view("detail").unwrap();
        assert_eq!(view.size().1, 5);
        assert!(view.cursor().y < 5);
        assert_eq!(view.absolute_row(), 20);

        update(&mut app, AppMessage::Cursor(CursorMessage::Up)).unwrap();
        update(&mut app, AppMessage::Cursor(CursorMessage::Up)).unwrap();
        assert_eq!(app.surface.view("detail").unwrap().absolute_row(), 18);

        update(&mut app, AppMessage::Cursor(CursorMessage::PageUp)).unwrap();
        assert_eq!(app.surface.view("detail").unwrap().absolute_row(), 16);

        // 光标到顶后继续上移改为滚动原点
        update(&mut app, AppMessage::Cursor(CursorMessage::Up)).unwrap();
        let view = app.surface.view("detail").unwrap();
        assert_eq!(view.absolute_row(), 15);
        assert_eq!(view.cursor().y, 0);
    }

    #[test]
    fn test_remove_flow_end_to_end() {
        let (mut app, backend) = loaded_app();
        update(&mut app, AppMessage::NextPanel).unwrap();
        update(&mut app, AppMessage::NextPanel).unwrap();
        assert_eq!(app.surface.current_view(), Some("volume list"));

        // scratch 是第三个卷，没有被挂载
        update(&mut app, AppMessage::Cursor(CursorMessage::Down)).unwrap();
        update(&mut app, AppMessage::Cursor(CursorMessage::Down)).unwrap();
        update(&mut app, AppMessage::Content(ContentMessage::Remove)).unwrap();
        update(&mut app, AppMessage::Overlay(OverlayMessage::Accept)).unwrap();
        assert_eq!(app.surface.current_view(), Some("state"));

        run_jobs(&mut app, &backend);

        assert!(app.overlays.is_empty());
        assert_eq!(app.surface.current_view(), Some("volume list"));
        let view = app.surface.view("volume list").unwrap();
        assert_eq!(view.lines().len(), 3);
        assert!(!view.lines().iter().any(|line| line.contains("scratch")));
        // 删除最后一行后光标回到剩下的最后一行
        assert_eq!(view.absolute_row(), 2);
    }
}
