//! 弹窗更新逻辑
//!
//! 弹窗的生命周期：打开时创建视图、登记按键、记录返回目标并获得焦点；
//! 关闭时删除视图与按键，再按各自的规则恢复焦点。

use crate::backend::Operation;
use crate::error::GuiResult;
use crate::event::DefaultKeymap;
use crate::message::{AppMessage, OverlayMessage};
use crate::model::{overlay_region, App, Overlay, OverlayKind, PanelKind, Surface};

use super::{content, focus};

/// 处理弹窗消息
pub fn update<S: Surface>(app: &mut App<S>, msg: OverlayMessage) -> GuiResult<()> {
    match msg {
        OverlayMessage::Acknowledge => close_error(app),
        OverlayMessage::Accept => accept_confirm(app),
        OverlayMessage::Cancel => cancel_confirm(app),
    }
}

/// 显示弹窗；同种弹窗已打开时只替换文字
fn show<S: Surface>(app: &mut App<S>, overlay: Overlay, return_to: PanelKind) -> GuiResult<()> {
    app.focus.next_panel = return_to;

    let kind = overlay.kind;
    let (width, height) = app.surface.size();
    let view = app
        .surface
        .set_view(kind.name(), overlay_region(kind, width, height))
        .into_view();
    view.title = kind.panel().title().to_string();
    view.wrap = true;
    view.clear();
    view.write(&overlay.message);

    if !app.overlays.upsert(overlay) {
        log::debug!("{} overlay already open, message replaced", kind.name());
    }
    focus::switch_panel(app, kind.panel())
}

/// 删除弹窗视图与按键，返回它是否是当前视图
fn teardown<S: Surface>(app: &mut App<S>, kind: OverlayKind) -> GuiResult<bool> {
    let name = kind.name();
    let was_current = app.surface.current_view() == Some(name);

    app.surface.delete_view(name)?;
    app.surface.delete_keybindings(name);
    app.overlays.remove(kind);
    Ok(was_current)
}

/// 打开错误弹窗，Enter 关闭后回到 `return_to`
pub fn open_error<S: Surface>(
    app: &mut App<S>,
    message: impl Into<String>,
    return_to: PanelKind,
) -> GuiResult<()> {
    show(app, Overlay::error(message), return_to)?;
    app.surface.set_keybinding(
        Some(OverlayKind::Error.name()),
        DefaultKeymap::ACKNOWLEDGE,
        AppMessage::Overlay(OverlayMessage::Acknowledge),
    );
    Ok(())
}

/// 关闭错误弹窗并刷新全部面板
pub fn close_error<S: Surface>(app: &mut App<S>) -> GuiResult<()> {
    teardown(app, OverlayKind::Error)?;
    focus::refresh_all(app)
}

/// 打开确认弹窗，y/Enter 执行 `operation`，n 取消
pub fn open_confirm<S: Surface>(
    app: &mut App<S>,
    message: impl Into<String>,
    operation: Operation,
    return_to: PanelKind,
) -> GuiResult<()> {
    show(app, Overlay::confirm(message, operation), return_to)?;

    let view = Some(OverlayKind::Confirm.name());
    let accept = AppMessage::Overlay(OverlayMessage::Accept);
    app.surface
        .set_keybinding(view, DefaultKeymap::CONFIRM_YES, accept.clone());
    app.surface
        .set_keybinding(view, DefaultKeymap::CONFIRM_ENTER, accept);
    app.surface.set_keybinding(
        view,
        DefaultKeymap::CONFIRM_NO,
        AppMessage::Overlay(OverlayMessage::Cancel),
    );
    Ok(())
}

/// 确认：执行操作后关闭确认弹窗
///
/// 操作会打开状态弹窗并取得焦点，所以只有确认弹窗仍是当前视图时才恢复焦点。
pub fn accept_confirm<S: Surface>(app: &mut App<S>) -> GuiResult<()> {
    let operation = app
        .overlays
        .get(OverlayKind::Confirm)
        .and_then(|overlay| overlay.on_accept.clone());

    let started = match operation {
        Some(operation) => {
            let origin = app.focus.next_panel;
            content::start_operation(app, operation, origin)
        }
        None => {
            log::warn!("confirm accepted without a pending operation");
            Ok(())
        }
    };

    let was_current = teardown(app, OverlayKind::Confirm)?;
    started?;
    if was_current {
        focus::restore_focus(app)?;
    }
    Ok(())
}

/// 取消：关闭确认弹窗，不执行操作
pub fn cancel_confirm<S: Surface>(app: &mut App<S>) -> GuiResult<()> {
    teardown(app, OverlayKind::Confirm)?;
    focus::restore_focus(app)
}

/// 打开状态弹窗，没有按键绑定
pub fn open_state<S: Surface>(
    app: &mut App<S>,
    message: impl Into<String>,
    return_to: PanelKind,
) -> GuiResult<()> {
    show(app, Overlay::state(message), return_to)
}

/// 关闭状态弹窗
pub fn close_state<S: Surface>(app: &mut App<S>) -> GuiResult<()> {
    if teardown(app, OverlayKind::State)? {
        focus::restore_focus(app)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Job;
    use crate::error::GuiError;
    use crate::model::SurfaceError;
    use crate::test_utils::{loaded_app, navigate_line, test_app};
    use docui_core::ResourceKind;

    fn remove_volume() -> Operation {
        Operation::Remove {
            kind: ResourceKind::Volume,
            id: "scratch".to_string(),
            label: "scratch".to_string(),
        }
    }

    #[test]
    fn test_error_acknowledge_returns_to_recorded_panel() {
        let mut app = test_app();
        focus::switch_panel(&mut app, PanelKind::Detail).unwrap();

        open_error(&mut app, "boom", PanelKind::ContainerList).unwrap();
        assert_eq!(app.surface.current_view(), Some("error message"));
        assert!(app.surface.has_keybindings("error message"));
        assert!(navigate_line(&app).starts_with("error message: "));

        update(&mut app, OverlayMessage::Acknowledge).unwrap();

        assert_eq!(app.surface.current_view(), Some("container list"));
        assert!(app.surface.view("error message").is_none());
        assert!(!app.surface.has_keybindings("error message"));
        assert!(app.overlays.is_empty());
        // 关闭错误弹窗会刷新全部面板
        assert_eq!(app.pending_jobs().len(), 3);
    }

    #[test]
    fn test_error_overlay_geometry_and_text() {
        let mut app = test_app();
        open_error(&mut app, "daemon unreachable", PanelKind::ImageList).unwrap();

        let view = app.surface.view("error message").unwrap();
        assert_eq!(view.region, overlay_region(OverlayKind::Error, 100, 30));
        assert!(view.wrap);
        assert_eq!(view.lines(), &["daemon unreachable".to_string()]);
    }

    #[test]
    fn test_reopening_an_overlay_reuses_it() {
        let mut app = test_app();
        open_error(&mut app, "first", PanelKind::ImageList).unwrap();
        open_error(&mut app, "second", PanelKind::VolumeList).unwrap();

        let errors = app
            .surface
            .views()
            .filter(|v| v.name() == "error message")
            .count();
        assert_eq!(errors, 1);
        assert_eq!(app.overlays.len(), 1);
        assert_eq!(
            app.surface.view("error message").unwrap().lines(),
            &["second".to_string()]
        );
        assert_eq!(app.focus.next_panel, PanelKind::VolumeList);
    }

    #[test]
    fn test_confirm_cancel_skips_the_operation() {
        let mut app = test_app();
        focus::switch_panel(&mut app, PanelKind::VolumeList).unwrap();
        open_confirm(&mut app, "remove?", remove_volume(), PanelKind::VolumeList).unwrap();
        focus::switch_panel(&mut app, PanelKind::Confirm).unwrap();

        update(&mut app, OverlayMessage::Cancel).unwrap();

        assert!(app.take_jobs().is_empty());
        assert!(!app.overlays.is_open(OverlayKind::State));
        assert!(app.surface.view("confirm").is_none());
        assert!(!app.surface.has_keybindings("confirm"));
        assert_eq!(app.surface.current_view(), Some("volume list"));
    }

    #[test]
    fn test_confirm_accept_starts_operation_and_tears_down() {
        let mut app = test_app();
        open_confirm(&mut app, "remove?", remove_volume(), PanelKind::VolumeList).unwrap();

        update(&mut app, OverlayMessage::Accept).unwrap();

        assert!(app.surface.view("confirm").is_none());
        assert!(!app.surface.has_keybindings("confirm"));
        assert!(!app.overlays.is_open(OverlayKind::Confirm));
        // 状态弹窗取得焦点，确认弹窗关闭时不抢回来
        assert_eq!(app.surface.current_view(), Some("state"));
        assert_eq!(
            app.take_jobs(),
            vec![Job::Run {
                operation: remove_volume(),
                origin: PanelKind::VolumeList,
            }]
        );
    }

    #[test]
    fn test_state_close_returns_focus() {
        let mut app = test_app();
        open_state(&mut app, "working...", PanelKind::ContainerList).unwrap();
        assert!(!app.surface.has_keybindings("state"));
        assert_eq!(
            app.surface.view("state").unwrap().region,
            overlay_region(OverlayKind::State, 100, 30)
        );

        close_state(&mut app).unwrap();
        assert_eq!(app.surface.current_view(), Some("container list"));
        assert!(app.surface.view("state").is_none());
    }

    #[test]
    fn test_closing_a_missing_overlay_is_a_contract_error() {
        let mut app = test_app();
        let err = close_state(&mut app).unwrap_err();
        assert!(matches!(
            err,
            GuiError::Surface(SurfaceError::UnknownView(name)) if name == "state"
        ));
    }

    #[test]
    fn test_focus_goes_to_remaining_overlay() {
        let (mut app, _backend) = loaded_app();
        open_state(&mut app, "working...", PanelKind::ContainerList).unwrap();
        open_error(&mut app, "list failed", PanelKind::ImageList).unwrap();

        update(&mut app, OverlayMessage::Acknowledge).unwrap();

        // 状态弹窗仍在，焦点回到它上面
        assert_eq!(app.surface.current_view(), Some("state"));
    }
}
