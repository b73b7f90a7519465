//! 列表面板操作

use docui_core::ResourceKind;

use crate::backend::{Job, Operation};
use crate::error::GuiResult;
use crate::message::ContentMessage;
use crate::model::state::ListRow;
use crate::model::{App, PanelKind, Surface};

use super::overlay;

/// 处理列表面板消息，作用于当前列表光标所在的行
pub fn update<S: Surface>(app: &mut App<S>, msg: ContentMessage) -> GuiResult<()> {
    let Some((origin, kind, row)) = selection(app) else {
        log::debug!("{msg:?} ignored, nothing selected");
        return Ok(());
    };

    match msg {
        ContentMessage::Inspect => {
            app.queue(Job::Inspect {
                kind,
                id: row.id,
                origin,
            });
        }
        ContentMessage::Remove => {
            let message = format!("Are you sure you want to remove {kind} {}?", row.label);
            let operation = Operation::Remove {
                kind,
                id: row.id,
                label: row.label,
            };
            overlay::open_confirm(app, message, operation, origin)?;
        }
        ContentMessage::Start | ContentMessage::Stop if kind == ResourceKind::Container => {
            let operation = if msg == ContentMessage::Start {
                Operation::Start {
                    id: row.id,
                    label: row.label,
                }
            } else {
                Operation::Stop {
                    id: row.id,
                    label: row.label,
                }
            };
            start_operation(app, operation, origin)?;
        }
        ContentMessage::Start | ContentMessage::Stop => {
            log::debug!("{msg:?} is only available for containers");
        }
    }
    Ok(())
}

/// 当前列表面板及光标所在行
fn selection<S: Surface>(app: &App<S>) -> Option<(PanelKind, ResourceKind, ListRow)> {
    let origin = app.current_kind()?;
    let list = app.registry.lookup(origin.name()).ok()?.as_list()?;
    let view = app.surface.view(origin.name())?;
    let row = list.selected(view.absolute_row())?;
    Some((origin, list.kind(), row.clone()))
}

/// 打开状态弹窗并排队执行修改操作
pub fn start_operation<S: Surface>(
    app: &mut App<S>,
    operation: Operation,
    origin: PanelKind,
) -> GuiResult<()> {
    overlay::open_state(app, operation.progress_message(), origin)?;
    app.queue(Job::Run { operation, origin });
    Ok(())
}
