//! 光标移动
//!
//! 光标在可见区域内移动；到达边缘时改为滚动原点。
//! 列表面板的第 0 行是表头，光标不会移上去。

use crate::message::CursorMessage;
use crate::model::{App, PanelKind, Surface, View};

/// 处理光标消息，作用于当前视图
pub fn update<S: Surface>(app: &mut App<S>, msg: CursorMessage) {
    let Some(name) = app.surface.current_view().map(str::to_string) else {
        return;
    };
    let header_rows = PanelKind::from_name(&name).map_or(0, PanelKind::header_rows);
    let view = app.surface.view_mut(&name);

    match msg {
        CursorMessage::Down => cursor_down(view),
        CursorMessage::Up => cursor_up(view, header_rows),
        CursorMessage::PageDown => page_down(view),
        CursorMessage::PageUp => page_up(view, header_rows),
    }
}

/// 下移一行；下一行为空或不存在时不动
pub fn cursor_down(view: Option<&mut View>) {
    let Some(view) = view else {
        return;
    };

    let cursor = view.cursor();
    if !matches!(view.line(cursor.y + 1), Some(line) if !line.is_empty()) {
        return;
    }

    if view.set_cursor(cursor.x, cursor.y + 1).is_err() {
        let origin = view.origin();
        view.set_origin(origin.x, origin.y + 1);
    }
}

/// 上移一行；已在 `header_rows` 所在行时不动
pub fn cursor_up(view: Option<&mut View>, header_rows: usize) {
    let Some(view) = view else {
        return;
    };

    if view.absolute_row() <= header_rows {
        return;
    }

    let cursor = view.cursor();
    let moved = cursor
        .y
        .checked_sub(1)
        .is_some_and(|y| view.set_cursor(cursor.x, y).is_ok());
    if !moved {
        let origin = view.origin();
        view.set_origin(origin.x, origin.y.saturating_sub(1));
    }
}

/// 翻页步长：可见高度的一半，至少一行
fn page_stride(view: &View) -> usize {
    (view.size().1 / 2).max(1)
}

/// 下翻半屏，不超过最后一个非空行
pub fn page_down(view: Option<&mut View>) {
    let Some(view) = view else {
        return;
    };

    let row = view.absolute_row();
    let Some(last) = view.last_content_row() else {
        return;
    };
    if row >= last {
        return;
    }

    let step = page_stride(view).min(last - row);
    let cursor = view.cursor();
    if view.set_cursor(cursor.x, cursor.y + step).is_err() {
        let origin = view.origin();
        view.set_origin(origin.x, origin.y + step);
    }
}

/// 上翻半屏，不越过表头
pub fn page_up(view: Option<&mut View>, header_rows: usize) {
    let Some(view) = view else {
        return;
    };

    let row = view.absolute_row();
    if row <= header_rows {
        return;
    }

    let step = page_stride(view).min(row - header_rows);
    let cursor = view.cursor();
    let origin = view.origin();
    let moved = cursor
        .y
        .checked_sub(step)
        .is_some_and(|y| view.set_cursor(cursor.x, y).is_ok());
    if moved {
        return;
    }

    if let Some(y) = origin.y.checked_sub(step) {
        view.set_origin(origin.x, y);
    } else if view.set_cursor(cursor.x, row - step).is_ok() {
        // 原点和光标各退一部分
        view.set_origin(origin.x, 0);
    } else {
        view.set_origin(origin.x, (row - step).saturating_sub(cursor.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Point, Region};
    use crate::test_utils::{loaded_app, lines};

    /// 可写区域 10x`height` 的视图
    fn view_with(content: &[&str], height: u16) -> View {
        let mut view = View::new("v", Region::new(0, 0, 12, height + 2));
        view.set_lines(content.iter().map(|s| (*s).to_string()).collect());
        view
    }

    #[test]
    fn test_down_stops_before_empty_line() {
        let mut view = view_with(&["a", "b", ""], 5);

        cursor_down(Some(&mut view));
        cursor_down(Some(&mut view));

        assert_eq!(view.cursor(), Point::new(0, 1));
        assert_eq!(view.origin(), Point::new(0, 0));
    }

    #[test]
    fn test_down_scrolls_at_bottom_edge() {
        let mut view = view_with(&lines(6).iter().map(String::as_str).collect::<Vec<_>>(), 3);

        for _ in 0..4 {
            cursor_down(Some(&mut view));
        }

        assert_eq!(view.cursor(), Point::new(0, 2));
        assert_eq!(view.origin(), Point::new(0, 2));
        assert_eq!(view.absolute_row(), 4);
    }

    #[test]
    fn test_missing_view_is_ignored() {
        cursor_down(None);
        cursor_up(None, 1);
        page_down(None);
        page_up(None, 0);
    }

    #[test]
    fn test_up_never_reaches_list_header() {
        let mut view = view_with(&["HEADER", "a", "b"], 5);
        view.set_cursor(0, 1).unwrap();

        cursor_up(Some(&mut view), 1);
        assert_eq!(view.cursor(), Point::new(0, 1));

        // 原点滚动过一行时，光标在第 0 行也同样不动
        view.set_origin(0, 1);
        view.set_cursor(0, 0).unwrap();
        cursor_up(Some(&mut view), 1);
        assert_eq!(view.origin(), Point::new(0, 1));
        assert_eq!(view.cursor(), Point::new(0, 0));
    }

    #[test]
    fn test_up_scrolls_back_at_top_edge() {
        let mut view = view_with(&["0", "1", "2", "3", "4"], 2);
        view.set_origin(0, 3);

        cursor_up(Some(&mut view), 0);
        assert_eq!(view.origin(), Point::new(0, 2));
        assert_eq!(view.cursor(), Point::new(0, 0));
    }

    #[test]
    fn test_up_scrolls_when_cursor_left_the_window() {
        let content = lines(10);
        let mut view = view_with(&content.iter().map(String::as_str).collect::<Vec<_>>(), 8);
        view.set_origin(0, 2);
        view.set_cursor(0, 6).unwrap();
        // 视图缩小，光标留在可写区域之外
        view.region = Region::new(0, 0, 12, 5);

        cursor_up(Some(&mut view), 0);
        assert_eq!(view.absolute_row(), 7);
        assert_eq!(view.origin(), Point::new(0, 1));

        page_up(Some(&mut view), 0);
        assert!(view.absolute_row() < 7);
    }

    #[test]
    fn test_page_down_clamps_to_last_line() {
        let content = lines(20);
        let mut view = view_with(&content.iter().map(String::as_str).collect::<Vec<_>>(), 8);

        page_down(Some(&mut view));
        assert_eq!(view.absolute_row(), 4);
        page_down(Some(&mut view));
        assert_eq!(view.absolute_row(), 8);
        assert!(view.origin().y > 0);

        for _ in 0..10 {
            page_down(Some(&mut view));
        }
        assert_eq!(view.absolute_row(), 19);
    }

    #[test]
    fn test_page_up_stops_below_header() {
        let content = lines(20);
        let mut view = view_with(&content.iter().map(String::as_str).collect::<Vec<_>>(), 8);
        view.set_origin(0, 2);
        view.set_cursor(0, 3).unwrap();

        page_up(Some(&mut view), 1);
        assert_eq!(view.absolute_row(), 1);
        assert_eq!(view.origin(), Point::new(0, 0));

        page_up(Some(&mut view), 1);
        assert_eq!(view.absolute_row(), 1);
    }

    #[test]
    fn test_update_targets_current_view() {
        let (mut app, _backend) = loaded_app();
        assert_eq!(app.surface.current_view(), Some("image list"));

        update(&mut app, CursorMessage::Up);
        assert_eq!(app.surface.view("image list").unwrap().absolute_row(), 1);

        update(&mut app, CursorMessage::Down);
        update(&mut app, CursorMessage::Down);
        assert_eq!(app.surface.view("image list").unwrap().absolute_row(), 3);
        // 其他面板不受影响
        assert_eq!(app.surface.view("volume list").unwrap().absolute_row(), 1);
    }
}
