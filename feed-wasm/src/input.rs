//! Разбор значений из полей ввода страницы.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use feed_core::SortDirection;

/// Значение `<select>` автора: пустая строка означает "все авторы".
pub(crate) fn parse_user_selection(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Значение `<select>` сортировки; неизвестное значение даёт A → Z.
pub(crate) fn parse_sort_selection(raw: &str) -> SortDirection {
    raw.parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_user_selection_means_all_users() {
        assert_eq!(parse_user_selection(""), None);
        assert_eq!(parse_user_selection("  "), None);
    }

    #[test]
    fn numeric_user_selection_is_parsed() {
        assert_eq!(parse_user_selection("3"), Some(3));
        assert_eq!(parse_user_selection("x3"), None);
    }

    #[test]
    fn sort_selection_falls_back_to_ascending() {
        assert_eq!(parse_sort_selection("desc"), SortDirection::Descending);
        assert_eq!(parse_sort_selection("asc"), SortDirection::Ascending);
        assert_eq!(parse_sort_selection(""), SortDirection::Ascending);
    }
}
