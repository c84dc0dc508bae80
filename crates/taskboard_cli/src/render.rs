//! Plain-text rendering of board columns.

use taskboard_core::RenderedList;

/// Renders one column as an indented text block.
pub fn render_list(list: &RenderedList) -> String {
    let mut out = format!("{} [{}]\n", list.heading, list.list_id);
    if list.items.is_empty() {
        out.push_str("  (empty)\n");
    }
    for card in &list.items {
        out.push_str(&format!(
            "  - {} ({})\n    {}\n    id={}\n",
            card.title, card.assigned, card.description, card.id
        ));
    }
    out
}
