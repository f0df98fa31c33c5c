//! Editor tab bar widget.
//!
//! One tab per entry in the manager's [`TabContainer`](crate::state::TabContainer),
//! labelled with the file name of the tab's most recently used view.

use crate::resolve::ViewResolutionPolicy;
use crate::state::{Tab, ViewManager, ViewRegistry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

/// Rows taken by the bordered tab bar.
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Narrowest width the tab bar renders at.
pub const MIN_TAB_BAR_WIDTH: u16 = 8;

/// Title for one tab: `main.rs`, or `main.rs +2` with two extra views.
pub fn tab_title(tab: &Tab, registry: &ViewRegistry) -> String {
    let name = registry
        .most_recent_in(tab.id)
        .map(|view| view.document.file_name())
        .unwrap_or("(empty)");
    match tab.views.len() {
        0 | 1 => name.to_string(),
        n => format!("{} +{}", name, n - 1),
    }
}

/// Titles for every tab, in tab order.
pub fn tab_titles<P: ViewResolutionPolicy>(manager: &ViewManager<P>) -> Vec<String> {
    manager
        .tabs()
        .tabs()
        .iter()
        .map(|tab| tab_title(tab, manager.registry()))
        .collect()
}

/// Build the tab bar widget for `manager`.
///
/// The current tab is highlighted. With no current tab nothing is.
pub fn tab_bar<P: ViewResolutionPolicy>(manager: &ViewManager<P>) -> Tabs<'static> {
    let titles: Vec<Line<'static>> = tab_titles(manager).into_iter().map(Line::from).collect();

    let mut tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Editors"))
        .style(Style::default().fg(Color::White));

    // Tabs always highlights some index, so only select when there is a current tab
    if let Some(index) = manager.tabs().current_index() {
        tabs = tabs
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .select(index);
    }
    tabs
}

/// Render the tab bar off-screen and return its text rows.
///
/// Trailing whitespace is trimmed from each row.
pub fn render_tab_bar<P: ViewResolutionPolicy>(manager: &ViewManager<P>, width: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width.max(MIN_TAB_BAR_WIDTH), TAB_BAR_HEIGHT);
    let mut buffer = Buffer::empty(area);
    tab_bar(manager).render(area, &mut buffer);

    buffer
        .content()
        .chunks(usize::from(area.width))
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentId, Placement};

    fn doc(name: &str) -> DocumentId {
        DocumentId::new(name).expect("valid document id")
    }

    #[test]
    fn single_view_tab_uses_file_name() {
        let mut manager = ViewManager::headless();
        manager.create_editor(doc("src/state/registry.rs"), Placement::NewTab);

        assert_eq!(tab_titles(&manager), vec!["registry.rs".to_string()]);
    }

    #[test]
    fn extra_views_add_count_suffix() {
        let mut manager = ViewManager::headless();
        let first = manager.create_editor(doc("a.rs"), Placement::NewTab);
        manager.create_editor(doc("b.rs"), Placement::CurrentTab);
        let third = manager.create_editor(doc("c.rs"), Placement::CurrentTab);

        // Never-activated views fall back to the first one opened
        assert_eq!(tab_titles(&manager), vec!["a.rs +2".to_string()]);

        manager.activate_editor(third).expect("open view");
        assert_eq!(tab_titles(&manager), vec!["c.rs +2".to_string()]);

        manager.activate_editor(first).expect("open view");
        assert_eq!(tab_titles(&manager), vec!["a.rs +2".to_string()]);
    }

    #[test]
    fn render_shows_block_title_and_tabs() {
        let mut manager = ViewManager::headless();
        manager.create_editor(doc("main.rs"), Placement::NewTab);
        manager.create_editor(doc("lib.rs"), Placement::NewTab);

        let rows = render_tab_bar(&manager, 60);

        assert_eq!(rows.len(), usize::from(TAB_BAR_HEIGHT));
        assert!(rows[0].contains("Editors"), "Top border should carry the title: {:?}", rows);
        assert!(rows[1].contains("main.rs"), "Should contain main.rs: {:?}", rows);
        assert!(rows[1].contains("lib.rs"), "Should contain lib.rs: {:?}", rows);
    }

    #[test]
    fn render_empty_manager_draws_only_the_block() {
        let manager = ViewManager::headless();
        let rows = render_tab_bar(&manager, 20);

        assert_eq!(rows.len(), usize::from(TAB_BAR_HEIGHT));
        assert!(rows[0].contains("Editors"));
        assert_eq!(rows[1].trim_matches(|c| c == '│' || c == ' '), "");
    }

    #[test]
    fn render_clamps_tiny_widths() {
        let mut manager = ViewManager::headless();
        manager.create_editor(doc("main.rs"), Placement::NewTab);

        let rows = render_tab_bar(&manager, 0);
        assert_eq!(rows.len(), usize::from(TAB_BAR_HEIGHT));
    }

    #[test]
    fn current_tab_is_highlighted() {
        let mut manager = ViewManager::headless();
        manager.create_editor(doc("one.rs"), Placement::NewTab);
        let second = manager.create_editor(doc("two.rs"), Placement::NewTab);
        manager.activate_editor(second).expect("open view");

        let area = Rect::new(0, 0, 40, TAB_BAR_HEIGHT);
        let mut buffer = Buffer::empty(area);
        tab_bar(&manager).render(area, &mut buffer);

        let row: Vec<_> = buffer.content()[40..80].to_vec();
        let start = row
            .windows(3)
            .position(|w| w[0].symbol() == "t" && w[1].symbol() == "w" && w[2].symbol() == "o")
            .expect("second tab rendered");
        assert_eq!(row[start].fg, Color::Yellow);
    }
}
