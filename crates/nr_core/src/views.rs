use serde::Serialize;

use crate::categories::{Category, ALL_CATEGORY_ID, CATEGORIES};
use crate::navigation::section_anchor;
use crate::types::Article;

pub const FEATURED_LIMIT: usize = 3;
pub const LATEST_LIMIT: usize = 5;
pub const SECTION_VISIBLE_LIMIT: usize = 4;

/// Articles tagged with `category_id`, in load order. `"all"` is unfiltered.
pub fn by_category<'a>(all: &'a [Article], category_id: &str) -> Vec<&'a Article> {
    if category_id == ALL_CATEGORY_ID {
        return all.iter().collect();
    }
    all.iter().filter(|a| a.category == category_id).collect()
}

pub fn featured(all: &[Article]) -> &[Article] {
    &all[..all.len().min(FEATURED_LIMIT)]
}

pub fn latest(all: &[Article]) -> &[Article] {
    &all[..all.len().min(LATEST_LIMIT)]
}

/// The part of a category list that is shown, plus how many are hidden.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CategorySlice<'a, T> {
    pub visible: &'a [T],
    pub more: usize,
}

pub fn visible_slice<T>(items: &[T]) -> CategorySlice<'_, T> {
    let shown = items.len().min(SECTION_VISIBLE_LIMIT);
    CategorySlice {
        visible: &items[..shown],
        more: items.len() - shown,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_articles: usize,
    pub categories: usize,
}

/// A non-empty category section, ready for display.
#[derive(Debug, Serialize)]
pub struct Section<'a> {
    pub category: &'static Category,
    pub anchor: String,
    pub total: usize,
    pub visible: Vec<&'a Article>,
    pub more: usize,
}

impl<'a> Section<'a> {
    fn new(category: &'static Category, articles: &[&'a Article]) -> Self {
        let slice = visible_slice(articles);
        Self {
            category,
            anchor: section_anchor(category.id),
            total: articles.len(),
            visible: slice.visible.to_vec(),
            more: slice.more,
        }
    }
}

/// The loaded article list. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn by_category(&self, category_id: &str) -> Vec<&Article> {
        by_category(&self.articles, category_id)
    }

    pub fn featured(&self) -> &[Article] {
        featured(&self.articles)
    }

    pub fn latest(&self) -> &[Article] {
        latest(&self.articles)
    }

    /// Sections in category-table order, skipping categories with no articles.
    pub fn sections(&self) -> Vec<Section<'_>> {
        Category::sections()
            .filter_map(|category| {
                let articles = self.by_category(category.id);
                (!articles.is_empty()).then(|| Section::new(category, &articles))
            })
            .collect()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total_articles: self.articles.len(),
            categories: CATEGORIES.len() - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::article;
    use proptest::prelude::*;

    fn articles_with(categories: &[&str]) -> Vec<Article> {
        categories
            .iter()
            .enumerate()
            .map(|(i, c)| article(&i.to_string(), c))
            .collect()
    }

    fn category_strategy() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["중독 정책", "도박 중독", "시사 이슈", "스포츠"])
    }

    proptest! {
        #[test]
        fn prop_all_is_identity(cats in prop::collection::vec(category_strategy(), 0..20)) {
            let all = articles_with(&cats);
            let filtered: Vec<Article> = by_category(&all, ALL_CATEGORY_ID).into_iter().cloned().collect();
            prop_assert_eq!(filtered, all);
        }

        #[test]
        fn prop_filter_keeps_order_and_category(
            cats in prop::collection::vec(category_strategy(), 0..20),
            wanted in category_strategy(),
        ) {
            let all = articles_with(&cats);
            let filtered = by_category(&all, wanted);
            prop_assert!(filtered.iter().all(|a| a.category == wanted));

            let expected: Vec<&Article> = all.iter().filter(|a| a.category == wanted).collect();
            prop_assert_eq!(filtered, expected);
        }

        #[test]
        fn prop_prefix_views(len in 0usize..12) {
            let all = articles_with(&vec!["도박 중독"; len]);

            prop_assert_eq!(featured(&all).len(), len.min(3));
            prop_assert_eq!(featured(&all), &all[..len.min(3)]);
            prop_assert_eq!(latest(&all).len(), len.min(5));
            prop_assert_eq!(latest(&all), &all[..len.min(5)]);

            let slice = visible_slice(&all);
            prop_assert_eq!(slice.visible.len(), len.min(4));
            prop_assert_eq!(slice.more, len.saturating_sub(4));
        }
    }

    #[test]
    fn test_split_by_category_preserves_relative_order() {
        let all = articles_with(&["X", "X", "Y", "X", "Y", "Y"]);

        let xs: Vec<&str> = by_category(&all, "X").iter().map(|a| a.id.as_str()).collect();
        let ys: Vec<&str> = by_category(&all, "Y").iter().map(|a| a.id.as_str()).collect();

        assert_eq!(xs, vec!["0", "1", "3"]);
        assert_eq!(ys, vec!["2", "4", "5"]);
    }

    #[test]
    fn test_empty_store() {
        let store = ArticleStore::new(vec![]);

        assert!(store.featured().is_empty());
        assert!(store.latest().is_empty());
        assert!(store.sections().is_empty());
        assert_eq!(store.stats().total_articles, 0);
        assert_eq!(store.stats().categories, 6);
    }

    #[test]
    fn test_two_articles_have_no_more_affordance() {
        let store = ArticleStore::new(articles_with(&["도박 중독", "도박 중독"]));

        assert_eq!(store.featured().len(), 2);
        assert_eq!(store.latest().len(), 2);
        let sections = store.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].more, 0);
    }

    #[test]
    fn test_sections_follow_table_order_and_skip_unknown() {
        let store = ArticleStore::new(articles_with(&[
            "시사 이슈", "스포츠", "중독 정책", "시사 이슈", "시사 이슈", "시사 이슈", "시사 이슈",
        ]));
        let sections = store.sections();

        let ids: Vec<&str> = sections.iter().map(|s| s.category.id).collect();
        assert_eq!(ids, vec!["중독 정책", "시사 이슈"]);
        assert_eq!(sections[1].total, 5);
        assert_eq!(sections[1].visible.len(), 4);
        assert_eq!(sections[1].more, 1);
        assert_eq!(sections[1].anchor, "category-시사 이슈");
        assert_eq!(store.featured().len(), 3);
        assert_eq!(store.featured()[1].category, "스포츠");
    }
}
