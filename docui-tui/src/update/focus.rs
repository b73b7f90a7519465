//! 焦点切换

use crate::backend::Job;
use crate::error::{GuiError, GuiResult};
use crate::model::{App, Panel, PanelKind, Surface};

/// 把焦点切到某个面板或弹窗
///
/// 视图成为当前视图并放到最上层；可循环面板同时更新循环下标；
/// 导航栏显示新面板的名字和按键提示。
pub fn switch_panel<S: Surface>(app: &mut App<S>, kind: PanelKind) -> GuiResult<()> {
    let name = kind.name();
    app.surface.set_current_view(name)?;
    app.surface.set_view_on_top(name)?;

    if let Some(index) = app.registry.position(kind) {
        app.focus.active = index;
    }

    set_navigation(app, kind)
}

fn set_navigation<S: Surface>(app: &mut App<S>, kind: PanelKind) -> GuiResult<()> {
    let panel = app.registry.lookup_mut(PanelKind::Navigate.name())?;

    if let Panel::Navigate(navigate) = &mut *panel {
        navigate.active = kind;
    }
    panel.set_view(&mut app.surface);
    Ok(())
}

/// 循环序列的下一个面板，末尾回到开头
pub fn next_panel<S: Surface>(app: &mut App<S>) -> GuiResult<()> {
    let cycle = app.registry.cycle();
    let index = app
        .focus
        .next_index(cycle.len())
        .ok_or(GuiError::EmptyCycle)?;
    let kind = cycle[index];

    switch_panel(app, kind)?;
    app.focus.active = index;
    Ok(())
}

/// 循环序列的上一个面板，开头回到末尾
pub fn previous_panel<S: Surface>(app: &mut App<S>) -> GuiResult<()> {
    let cycle = app.registry.cycle();
    let index = app
        .focus
        .previous_index(cycle.len())
        .ok_or(GuiError::EmptyCycle)?;
    let kind = cycle[index];

    switch_panel(app, kind)?;
    app.focus.active = index;
    Ok(())
}

/// 焦点回到打开中的最上层弹窗，没有弹窗时回到 `next_panel`
pub fn restore_focus<S: Surface>(app: &mut App<S>) -> GuiResult<()> {
    let target = app
        .overlays
        .top()
        .map_or(app.focus.next_panel, |overlay| overlay.kind.panel());
    switch_panel(app, target)
}

/// 重绘所有面板，为列表面板排队加载任务，然后恢复焦点
pub fn refresh_all<S: Surface>(app: &mut App<S>) -> GuiResult<()> {
    let jobs: Vec<Job> = app
        .registry
        .iter_unordered()
        .filter_map(|panel| panel.refresh(&mut app.surface))
        .collect();

    log::debug!("refreshing {} panels", app.registry.len());
    for job in jobs {
        app.queue(job);
    }

    restore_focus(app)
}
