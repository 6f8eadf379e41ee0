use serde::Serialize;

/// Id of the synthetic category that only exists for navigation.
pub const ALL_CATEGORY_ID: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub static CATEGORIES: [Category; 7] = [
    Category { id: ALL_CATEGORY_ID, name: "전체", icon: "📰" },
    Category { id: "중독 정책", name: "중독 정책", icon: "📋" },
    Category { id: "알코올·약물 중독", name: "알코올·약물", icon: "💊" },
    Category { id: "도박 중독", name: "도박", icon: "🎲" },
    Category { id: "게임·디지털 중독", name: "게임·디지털", icon: "🎮" },
    Category { id: "AI와 중독 정책", name: "AI와 중독", icon: "🤖" },
    Category { id: "시사 이슈", name: "시사", icon: "📡" },
];

impl Category {
    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }

    /// Categories that get a section of their own, in display order.
    pub fn sections() -> impl Iterator<Item = &'static Category> {
        CATEGORIES.iter().filter(|c| !c.is_all())
    }

    pub fn find(id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id == id)
    }

    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}
