/// Toggle used by the FAQ accordion and reward cards: picking the current
/// choice clears it, picking anything else replaces it.
pub fn toggle<T: PartialEq>(current: Option<T>, picked: T) -> Option<T> {
    match current {
        Some(open) if open == picked => None,
        _ => Some(picked),
    }
}

#[cfg(test)]
mod tests {
    use super::toggle;

    #[test]
    fn accordion_keeps_at_most_one_open() {
        // first question starts open
        let open = Some(0);
        let open = toggle(open, 2);
        assert_eq!(open, Some(2));
        let open = toggle(open, 2);
        assert_eq!(open, None);
        let open = toggle(open, 0);
        assert_eq!(open, Some(0));
    }

    #[test]
    fn reward_selection_toggles_by_id() {
        let selected = toggle(None, "family");
        assert_eq!(selected, Some("family"));
        assert_eq!(toggle(selected, "founders"), Some("founders"));
        assert_eq!(toggle(selected, "family"), None);
    }
}
