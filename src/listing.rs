//! Search, status filtering and pagination shared by the list views.

use std::ops::Range;

use crate::models::{Client, Project, ProjectStatus, WebsiteStatus};

pub const DEFAULT_PAGE_SIZE: usize = 8;

// Page numbers shown before collapsing to "... last"
const VISIBLE_PAGE_BUTTONS: usize = 4;

/// Records that can be matched by a free-text query and a status
pub trait Searchable {
    type Status: Copy + PartialEq;

    fn search_fields(&self) -> Vec<&str>;
    fn status(&self) -> Self::Status;
}

impl Searchable for Client {
    type Status = WebsiteStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.business_name.as_str(),
            self.contact_person.as_str(),
            self.email.as_str(),
        ]
    }

    fn status(&self) -> WebsiteStatus {
        self.website_status
    }
}

impl Searchable for Project {
    type Status = ProjectStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.client_name.as_str(), self.project_type.label()]
    }

    fn status(&self) -> ProjectStatus {
        self.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Step to the next menu entry: All, each option in order, then back to All
    pub fn cycle(&self, options: &[S]) -> Self {
        match self {
            StatusFilter::All => options
                .first()
                .map_or(StatusFilter::All, |s| StatusFilter::Only(*s)),
            StatusFilter::Only(current) => {
                match options.iter().position(|s| s == current) {
                    Some(i) if i + 1 < options.len() => StatusFilter::Only(options[i + 1]),
                    _ => StatusFilter::All,
                }
            }
        }
    }
}

impl<S: std::fmt::Display> StatusFilter<S> {
    pub fn label(&self) -> String {
        match self {
            StatusFilter::All => "All Status".to_string(),
            StatusFilter::Only(s) => s.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<S> {
    pub search: String,
    pub status: StatusFilter<S>,
}

impl<S> Default for ListQuery<S> {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
        }
    }
}

impl<S: Copy + PartialEq> ListQuery<S> {
    pub fn matches<T: Searchable<Status = S>>(&self, record: &T) -> bool {
        let needle = self.search.to_lowercase();
        let hit = needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));

        hit && self.status.matches(record.status())
    }

    /// Matching records in their original order
    pub fn apply<'a, T: Searchable<Status = S>>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// 1-based page cursor over a result set of known size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn range(&self, total: usize) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.current < self.total_pages(total)
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.current -= 1;
        }
    }

    pub fn next(&mut self, total: usize) {
        if self.has_next(total) {
            self.current += 1;
        }
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    pub fn summary(&self, total: usize) -> String {
        let range = self.range(total);
        let first = if total == 0 { 0 } else { range.start + 1 };
        format!("Showing data {} to {} of {} entries", first, range.end, total)
    }

    pub fn buttons(&self, total: usize) -> Vec<PageButton> {
        let pages = self.total_pages(total);
        let mut buttons: Vec<PageButton> = (1..=pages.min(VISIBLE_PAGE_BUTTONS))
            .map(PageButton::Page)
            .collect();
        if pages > VISIBLE_PAGE_BUTTONS {
            buttons.push(PageButton::Ellipsis);
            buttons.push(PageButton::Page(pages));
        }
        buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleData;

    #[test]
    fn status_filter_keeps_only_that_status() {
        let data = SampleData::load();
        let query = ListQuery {
            search: String::new(),
            status: StatusFilter::Only(WebsiteStatus::Live),
        };

        let live = query.apply(data.clients());
        assert_eq!(live.len(), 4);
        assert!(live.iter().all(|c| c.website_status == WebsiteStatus::Live));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let data = SampleData::load();
        let mut query = ListQuery::<WebsiteStatus>::default();

        query.search = "PLUMBING".to_string();
        let names: Vec<&str> = query
            .apply(data.clients())
            .into_iter()
            .map(|c| c.business_name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Mike's Plumbing Services", "Fast Fix Plumbing", "Pro Plumbing Solutions"]
        );

        query.search = "lisa@".to_string();
        assert_eq!(query.apply(data.clients()).len(), 1);

        query.search = "Sarah".to_string();
        assert_eq!(query.apply(data.clients())[0].id, "2");
    }

    #[test]
    fn search_and_filter_combine() {
        let data = SampleData::load();
        let query = ListQuery {
            search: "hvac".to_string(),
            status: StatusFilter::Only(WebsiteStatus::Inactive),
        };
        let hits = query.apply(data.clients());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].business_name, "AllTemp HVAC Services");
    }

    #[test]
    fn project_search_covers_type_label() {
        let data = SampleData::load();
        let query = ListQuery {
            search: "seo".to_string(),
            status: StatusFilter::<ProjectStatus>::All,
        };
        let hits = query.apply(data.projects());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].client_name, "Bright Light Electrical");
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let data = SampleData::load();
        let query = ListQuery {
            search: "zzz".to_string(),
            status: StatusFilter::<WebsiteStatus>::All,
        };
        assert!(query.apply(data.clients()).is_empty());
    }

    #[test]
    fn filter_cycles_through_options_and_back() {
        let mut filter = StatusFilter::All;
        let mut seen = Vec::new();
        for _ in 0..=WebsiteStatus::ALL.len() {
            filter = filter.cycle(WebsiteStatus::ALL);
            seen.push(filter.label());
        }
        assert_eq!(
            seen,
            ["Live", "Development", "Design", "Planning", "Inactive", "All Status"]
        );
    }

    #[test]
    fn page_never_exceeds_page_size() {
        let items: Vec<u32> = (0..19).collect();
        let mut pagination = Pagination::new(8);

        for _ in 0..5 {
            assert!(pagination.page(&items).len() <= 8);
            pagination.next(items.len());
        }
        assert_eq!(pagination.current(), 3);
        assert_eq!(pagination.page(&items), &[16, 17, 18]);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut pagination = Pagination::new(8);
        pagination.previous();
        assert_eq!(pagination.current(), 1);
        assert!(!pagination.has_previous());

        pagination.next(8);
        assert_eq!(pagination.current(), 1);
        assert!(!pagination.has_next(8));

        pagination.next(9);
        assert_eq!(pagination.current(), 2);
        assert!(pagination.has_previous());
    }

    #[test]
    fn summary_text() {
        let mut pagination = Pagination::new(8);
        assert_eq!(pagination.summary(8), "Showing data 1 to 8 of 8 entries");
        assert_eq!(pagination.summary(0), "Showing data 0 to 0 of 0 entries");

        pagination.next(12);
        assert_eq!(pagination.summary(12), "Showing data 9 to 12 of 12 entries");
    }

    #[test]
    fn buttons_collapse_past_four_pages() {
        let pagination = Pagination::new(1);
        assert_eq!(
            pagination.buttons(3),
            [PageButton::Page(1), PageButton::Page(2), PageButton::Page(3)]
        );
        assert_eq!(
            pagination.buttons(10),
            [
                PageButton::Page(1),
                PageButton::Page(2),
                PageButton::Page(3),
                PageButton::Page(4),
                PageButton::Ellipsis,
                PageButton::Page(10),
            ]
        );
        assert_eq!(pagination.buttons(0), [PageButton::Page(1)]);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let pagination = Pagination::new(0);
        assert_eq!(pagination.total_pages(3), 3);
        assert_eq!(pagination.range(3), 0..1);
    }
}
