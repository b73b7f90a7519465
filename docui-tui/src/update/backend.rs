//! 后台结果处理

use docui_core::{CoreError, CoreResult, Listing, ResourceKind};

use crate::error::GuiResult;
use crate::message::BackendMessage;
use crate::model::{App, OverlayKind, Panel, PanelKind, Surface};

use super::{focus, overlay};

/// 处理后台任务结果
pub fn update<S: Surface>(app: &mut App<S>, msg: BackendMessage) -> GuiResult<()> {
    match msg {
        BackendMessage::Listed { kind, result } => on_listed(app, kind, result),
        BackendMessage::Inspected {
            kind,
            id,
            origin,
            result,
        } => match result {
            Ok(value) => {
                show_detail(app, &value)?;
                log::debug!("inspected {kind} {id}");
                Ok(())
            }
            Err(err) => {
                log_failure(&err);
                overlay::open_error(app, format!("failed to inspect {kind} {id}: {err}"), origin)
            }
        },
        BackendMessage::Finished {
            operation,
            origin,
            result,
        } => {
            if app.overlays.is_open(OverlayKind::State) {
                overlay::close_state(app)?;
            }
            match result {
                Ok(()) => {
                    log::info!("{operation}: done");
                    focus::refresh_all(app)
                }
                Err(err) => {
                    log_failure(&err);
                    overlay::open_error(app, format!("failed to {operation}: {err}"), origin)
                }
            }
        }
    }
}

fn on_listed<S: Surface>(
    app: &mut App<S>,
    kind: ResourceKind,
    result: CoreResult<Listing>,
) -> GuiResult<()> {
    let panel_kind = PanelKind::for_resource(kind);
    match result {
        Ok(listing) => {
            let panel = app.registry.lookup_mut(panel_kind.name())?;
            if let Some(list) = panel.as_list_mut() {
                list.set_listing(&listing);
            }
            panel.set_view(&mut app.surface);
            log::debug!("listed {} {kind}(s)", listing.len());
            Ok(())
        }
        Err(err) => {
            log_failure(&err);
            overlay::open_error(app, format!("failed to list {kind}s: {err}"), panel_kind)
        }
    }
}

/// 在详情面板展示 JSON，并滚回顶部
fn show_detail<S: Surface>(app: &mut App<S>, value: &serde_json::Value) -> GuiResult<()> {
    let panel = app.registry.lookup_mut(PanelKind::Detail.name())?;
    if let Panel::Detail(detail) = &mut *panel {
        detail.show(value);
    }
    panel.set_view(&mut app.surface);

    if let Some(view) = app.surface.view_mut(PanelKind::Detail.name()) {
        view.set_origin(0, 0);
        let _ = view.set_cursor(0, 0);
    }
    Ok(())
}

fn log_failure(err: &CoreError) {
    if err.is_expected() {
        log::warn!("{err}");
    } else {
        log::error!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Job, Operation};
    use crate::test_utils::{loaded_app, run_jobs, test_app};
    use crate::update::overlay::open_state;

    #[test]
    fn test_listing_fills_panel() {
        let (app, _backend) = loaded_app();

        let view = app.surface.view("container list").unwrap();
        assert_eq!(view.lines().len(), 4);
        assert!(view.lines()[1].contains("web"));
        assert!(view.lines()[3].contains("exited"));
    }

    #[test]
    fn test_list_failure_opens_error_for_that_panel() {
        let mut app = test_app();
        update(
            &mut app,
            BackendMessage::Listed {
                kind: ResourceKind::Volume,
                result: Err(CoreError::Backend("daemon unreachable".to_string())),
            },
        )
        .unwrap();

        assert_eq!(app.surface.current_view(), Some("error message"));
        assert_eq!(app.focus.next_panel, PanelKind::VolumeList);
        let message = &app.overlays.get(OverlayKind::Error).unwrap().message;
        assert!(message.contains("daemon unreachable"));
    }

    #[test]
    fn test_inspect_result_goes_to_detail() {
        let (mut app, backend) = loaded_app();
        app.queue(Job::Inspect {
            kind: ResourceKind::Volume,
            id: "pgdata".to_string(),
            origin: PanelKind::VolumeList,
        });
        run_jobs(&mut app, &backend);

        let detail = app.surface.view("detail").unwrap();
        assert_eq!(detail.lines()[0], "{");
        assert!(detail
            .lines()
            .iter()
            .any(|line| line.trim_end_matches(',') == "    \"Name\": \"pgdata\""));
        assert_eq!(detail.absolute_row(), 0);
        // 焦点留在原来的列表上
        assert_eq!(app.surface.current_view(), Some("image list"));
    }

    #[test]
    fn test_successful_operation_closes_state_and_refreshes() {
        let (mut app, backend) = loaded_app();
        let operation = Operation::Stop {
            id: "web".to_string(),
            label: "web".to_string(),
        };
        open_state(&mut app, operation.progress_message(), PanelKind::ContainerList).unwrap();
        app.queue(Job::Run {
            operation,
            origin: PanelKind::ContainerList,
        });

        run_jobs(&mut app, &backend);

        assert!(app.surface.view("state").is_none());
        assert_eq!(app.surface.current_view(), Some("container list"));
        let view = app.surface.view("container list").unwrap();
        assert!(view.lines()[1].contains("exited"));
    }

    #[test]
    fn test_failed_operation_reports_error_and_returns_to_origin() {
        let (mut app, backend) = loaded_app();
        let operation = Operation::Remove {
            kind: ResourceKind::Volume,
            id: "pgdata".to_string(),
            label: "pgdata".to_string(),
        };
        open_state(&mut app, operation.progress_message(), PanelKind::VolumeList).unwrap();
        app.queue(Job::Run {
            operation,
            origin: PanelKind::VolumeList,
        });

        run_jobs(&mut app, &backend);

        assert!(app.surface.view("state").is_none());
        assert_eq!(app.surface.current_view(), Some("error message"));
        let message = &app.overlays.get(OverlayKind::Error).unwrap().message;
        assert!(message.starts_with("failed to remove volume pgdata:"));

        crate::update::update(
            &mut app,
            crate::message::AppMessage::Overlay(crate::message::OverlayMessage::Acknowledge),
        )
        .unwrap();
        assert_eq!(app.surface.current_view(), Some("volume list"));
    }
}
