mod overview;
mod rides;
mod users;

pub use overview::Overview;
pub use rides::RidesManagement;
pub use users::UsersManagement;

/// Empty search boxes send no filter.
pub(crate) fn search_filter(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
