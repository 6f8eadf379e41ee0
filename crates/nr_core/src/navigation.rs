use crate::categories::Category;

/// Id of the element a category section is rendered into.
pub fn section_anchor(category_id: &str) -> String {
    format!("category-{}", category_id)
}

/// Decides where a category nav entry leads.
pub trait Navigation: Send + Sync {
    fn href(&self, category: &Category) -> String;
}

/// In-page anchors: `all` goes back to the top, others to their section.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorNavigation;

impl Navigation for AnchorNavigation {
    fn href(&self, category: &Category) -> String {
        if category.is_all() {
            "#top".to_string()
        } else {
            format!("#{}", section_anchor(category.id))
        }
    }
}
