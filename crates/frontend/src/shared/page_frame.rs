//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_color--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{module}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
