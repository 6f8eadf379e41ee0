//! HTML rendering of the news page.
//!
//! The page is a single minijinja template registered under an `.html`
//! name, so every value coming from an article is HTML-escaped on output.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::categories::Category;
use crate::navigation::Navigation;
use crate::state::DisplayState;
use crate::types::{parse_day, Article};
use crate::views::{Section, Stats};
use crate::Result;

pub const PAGE_LANG: &str = "ko";
pub const LOADING_MESSAGE: &str = "뉴스를 불러오는 중...";
pub const ERROR_HINT: &str = "news.json 파일이 public/data/ 폴더에 있는지 확인하세요.";

const PAGE_TEMPLATE_NAME: &str = "page.html";
const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

#[derive(Serialize)]
struct NavLink {
    href: String,
    category: &'static Category,
}

#[derive(Serialize)]
struct PageContext<'a> {
    lang: &'static str,
    status: &'static str,
    loading_message: &'static str,
    error_hint: &'static str,
    message: Option<&'a str>,
    nav: Vec<NavLink>,
    featured: &'a [Article],
    sections: Vec<Section<'a>>,
    latest: &'a [Article],
    stats: Option<Stats>,
}

impl<'a> PageContext<'a> {
    fn new(state: &'a DisplayState, nav: &dyn Navigation) -> Self {
        let mut context = Self {
            lang: PAGE_LANG,
            status: "loading",
            loading_message: LOADING_MESSAGE,
            error_hint: ERROR_HINT,
            message: None,
            nav: Vec::new(),
            featured: &[],
            sections: Vec::new(),
            latest: &[],
            stats: None,
        };
        match state {
            DisplayState::Loading => {}
            DisplayState::Error(message) => {
                context.status = "error";
                context.message = Some(message);
            }
            DisplayState::Loaded(store) => {
                context.status = "loaded";
                context.nav = Category::all()
                    .iter()
                    .map(|category| NavLink {
                        href: nav.href(category),
                        category,
                    })
                    .collect();
                context.featured = store.featured();
                context.sections = store.sections();
                context.latest = store.latest();
                context.stats = Some(store.stats());
            }
        }
        context
    }
}

fn iso_date(value: &str) -> String {
    parse_day(value)
        .map(|day| day.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn render_page(state: &DisplayState, nav: &dyn Navigation) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_filter("iso_date", iso_date);
    env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

    let page = env
        .get_template(PAGE_TEMPLATE_NAME)?
        .render(PageContext::new(state, nav))?;
    Ok(page)
}
