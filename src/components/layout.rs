//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    /// Static banner rendered by the root container
    pub banner: Rect,
    /// Area handed to the parent component (log + child button row)
    pub content: Rect,
    /// Key-hint bar at the bottom
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout: banner on top, content, help bar below
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    MainLayout {
        banner: chunks[0],
        content: chunks[1],
        help: chunks[2],
    }
}

/// Split the parent's area into the greeting log and the child button row
pub fn split_parent_area(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_partitions_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = calculate_main_layout(area);

        assert_eq!(layout.banner.height, 3);
        assert_eq!(layout.help.height, 3);
        assert_eq!(layout.content.height, 24 - 3 - 3);
        assert_eq!(
            layout.banner.height + layout.content.height + layout.help.height,
            area.height
        );
    }

    #[test]
    fn test_split_parent_area() {
        let area = Rect::new(0, 3, 80, 18);
        let (log, buttons) = split_parent_area(area);

        assert_eq!(buttons.height, 5);
        assert_eq!(log.height, 13);
        assert_eq!(log.y, 3);
        assert_eq!(buttons.y, 16);
    }

    #[test]
    fn test_centered_popup_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_popup(area, 40, 7);

        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 7);
        assert_eq!(popup.x, 20);

        // Popup never exceeds a small area
        let tiny = Rect::new(0, 0, 10, 4);
        let clamped = centered_popup(tiny, 40, 7);
        assert!(clamped.width <= tiny.width);
        assert!(clamped.height <= tiny.height);
    }
}
