//! List-identity keys for rendered issues.

use crate::model::IssueRecord;

/// Derive the render key for the issue at `index` of the filtered list.
///
/// First applicable rule wins: a null slot gets `issue-<index>`; then the
/// issue id; then the CVE reference unless it is the `N/A` sentinel; then
/// the title with whitespace runs joined by hyphens and `-<index>` appended;
/// otherwise `issue-<index>`. Only the title form carries the index suffix.
#[must_use]
pub fn issue_key(issue: Option<&IssueRecord>, index: usize) -> String {
    let Some(issue) = issue else {
        return placeholder_key(index);
    };
    if let Some(id) = issue.id.as_deref().filter(|id| !id.is_empty()) {
        return id.to_string();
    }
    if let Some(cve) = issue.reference() {
        return cve.to_string();
    }
    match issue.title.as_deref().filter(|title| !title.is_empty()) {
        Some(title) => {
            let slug = title
                .split(' ')
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("-");
            format!("{slug}-{index}")
        }
        None => placeholder_key(index),
    }
}

fn placeholder_key(index: usize) -> String {
    format!("issue-{index}")
}
