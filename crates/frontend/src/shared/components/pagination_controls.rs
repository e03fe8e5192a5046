use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page cursor behind [`PaginationControls`].
///
/// Keeps the committed page (1-based, always inside `[1, total_pages]`) apart
/// from the text the user is typing. Every method that commits returns the
/// page the owner must be notified about; the component emits it exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    draft: String,
    total_pages: usize,
}

impl PageCursor {
    pub fn new(total_pages: usize) -> Self {
        Self {
            page: 1,
            draft: "1".to_string(),
            total_pages: total_pages.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Clamp into range and commit page and draft together
    pub fn go_to_page(&mut self, requested: i64) -> usize {
        let clamped = requested.clamp(1, self.total_pages as i64) as usize;
        self.page = clamped;
        self.draft = clamped.to_string();
        clamped
    }

    /// Typing only touches the draft
    pub fn edit_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Blur / Enter. A draft that is not a number keeps the committed page.
    pub fn commit_draft(&mut self) -> usize {
        let requested = parse_page(&self.draft).unwrap_or(self.page as i64);
        self.go_to_page(requested)
    }

    /// Owner changed the page count. Returns the new page when the committed
    /// one fell out of range.
    pub fn set_total_pages(&mut self, total_pages: usize) -> Option<usize> {
        self.total_pages = total_pages.max(1);
        if self.page > self.total_pages {
            Some(self.go_to_page(self.total_pages as i64))
        } else {
            None
        }
    }

    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    pub fn first(&mut self) -> Option<usize> {
        (!self.is_first()).then(|| self.go_to_page(1))
    }

    pub fn previous(&mut self) -> Option<usize> {
        (!self.is_first()).then(|| self.go_to_page(self.page as i64 - 1))
    }

    pub fn next(&mut self) -> Option<usize> {
        (!self.is_last()).then(|| self.go_to_page(self.page as i64 + 1))
    }

    pub fn last(&mut self) -> Option<usize> {
        (!self.is_last()).then(|| self.go_to_page(self.total_pages as i64))
    }
}

/// "7" -> 7, " 3 " -> 3, "3.7" -> 3; anything else is not a page
fn parse_page(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return Some(n);
    }
    let n = text.parse::<f64>().ok()?;
    if !n.is_finite() {
        return None;
    }
    Some(n.trunc().clamp(i64::MIN as f64, i64::MAX as f64) as i64)
}

/// Runs `change` on the cursor, then notifies outside the update; one call
/// per emitted page
fn commit_and_notify(
    cursor: RwSignal<PageCursor>,
    change: impl FnOnce(&mut PageCursor) -> Option<usize>,
    notify: impl Fn(usize),
) {
    let mut emitted = None;
    cursor.update(|c| emitted = change(c));
    if let Some(page) = emitted {
        notify(page);
    }
}

const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// PaginationControls component - first/previous/next/last plus direct entry
///
/// Pages are 1-based. `on_page_change` fires once per commit.
#[component]
pub fn PaginationControls(
    /// Total number of pages (0 is treated as 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Total count of items, shown next to the page counter
    #[prop(optional, into)]
    total_count: MaybeProp<usize>,

    /// Current page size (only used with `on_page_size_change`)
    #[prop(optional, into)]
    page_size: MaybeProp<usize>,

    /// Callback when page size changes; the selector is hidden without it
    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,
) -> impl IntoView {
    let cursor = RwSignal::new(PageCursor::new(total_pages.get_untracked()));

    let notify = move |page: usize| on_page_change.run(page);
    let commit =
        move |f: fn(&mut PageCursor) -> Option<usize>| commit_and_notify(cursor, f, notify);

    // Owner shrank or grew the data set
    Effect::new(move |_| {
        let total = total_pages.get();
        commit_and_notify(cursor, |c| c.set_total_pages(total), notify);
    });

    let commit_draft = move || commit_and_notify(cursor, |c| Some(c.commit_draft()), notify);

    let page_size_select = on_page_size_change.map(|on_size| {
        view! {
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse() {
                        on_size.run(val);
                    }
                }
                prop:value=move || page_size.get().unwrap_or_default().to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == Some(size)>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        }
    });

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| commit(PageCursor::first)
                disabled=move || cursor.with(|c| c.is_first())
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| commit(PageCursor::previous)
                disabled=move || cursor.with(|c| c.is_first())
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                "Page "
                <input
                    class="pagination-input"
                    type="text"
                    inputmode="numeric"
                    prop:value=move || cursor.with(|c| c.draft().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        cursor.update(|c| c.edit_draft(&text));
                    }
                    on:blur=move |_| commit_draft()
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            commit_draft();
                        }
                    }
                />
                {move || format!(" / {}", cursor.with(|c| c.total_pages()))}
                {move || total_count.get().map(|count| format!(" ({})", count))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| commit(PageCursor::next)
                disabled=move || cursor.with(|c| c.is_last())
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| commit(PageCursor::last)
                disabled=move || cursor.with(|c| c.is_last())
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            {page_size_select}
        </div>
    }
}
