use feed_core::{PAGE_SIZE, Post, SortDirection, ViewController};
use proptest::prelude::*;

fn arb_post() -> impl Strategy<Value = (i64, String)> {
    (1i64..=5, "[a-zA-Z ]{0,12}")
}

fn arb_posts() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec(arb_post(), 0..60).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(idx, (user_id, title))| Post {
                id: idx as i64 + 1,
                user_id,
                title,
                body: String::new(),
            })
            .collect()
    })
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

fn ids(posts: &[Post]) -> Vec<i64> {
    posts.iter().map(|p| p.id).collect()
}

proptest! {
    #[test]
    fn search_keeps_only_matching_titles(posts in arb_posts(), term in "[a-zA-Z]{0,3}") {
        let mut view = ViewController::new(posts);
        view.set_search_term(term.clone());

        let needle = term.to_lowercase();
        for post in view.filtered() {
            prop_assert!(post.title.to_lowercase().contains(&needle));
        }
        let expected = view
            .posts()
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(view.filtered().len(), expected);
    }

    #[test]
    fn user_filter_keeps_only_that_user(posts in arb_posts(), user_id in 1i64..=6) {
        let mut view = ViewController::new(posts);

        view.select_user(Some(user_id));
        prop_assert!(view.filtered().iter().all(|p| p.user_id == user_id));

        view.select_user(None);
        prop_assert_eq!(view.filtered().len(), view.posts().len());
    }

    #[test]
    fn search_and_sort_commute(
        posts in arb_posts(),
        term in "[a-z]{0,2}",
        direction in arb_direction(),
    ) {
        let mut search_first = ViewController::new(posts.clone());
        search_first.set_search_term(term.clone());
        search_first.set_sort_direction(direction);

        let mut sort_first = ViewController::new(posts);
        sort_first.set_sort_direction(direction);
        sort_first.set_search_term(term);

        prop_assert_eq!(ids(search_first.filtered()), ids(sort_first.filtered()));
    }

    #[test]
    fn every_input_change_resets_page(
        posts in arb_posts(),
        steps in 0usize..6,
        which in 0u8..3,
    ) {
        let mut view = ViewController::new(posts);
        for _ in 0..steps {
            view.go_to_next_page();
        }

        match which {
            0 => view.set_search_term(""),
            1 => view.select_user(None),
            _ => view.set_sort_direction(SortDirection::Descending),
        }
        prop_assert_eq!(view.state().current_page, 1);
    }

    #[test]
    fn pages_partition_filtered_view(posts in arb_posts(), direction in arb_direction()) {
        let mut view = ViewController::new(posts);
        view.set_sort_direction(direction);
        let expected = ids(view.filtered());

        let mut collected = Vec::new();
        loop {
            let page = view.page();
            prop_assert!(page.items.len() <= PAGE_SIZE);
            prop_assert!((page.number - 1) * PAGE_SIZE < page.total_items.max(1));
            collected.extend(ids(page.items));
            if !view.go_to_next_page() {
                break;
            }
        }
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn navigation_noops_match_bounds(posts in arb_posts(), steps in 0usize..8) {
        let mut view = ViewController::new(posts);
        for _ in 0..steps {
            let before = view.state().current_page;
            let at_end = before * PAGE_SIZE >= view.filtered().len();
            let moved = view.go_to_next_page();
            prop_assert_eq!(moved, !at_end);
            if at_end {
                prop_assert_eq!(view.state().current_page, before);
            }
        }
        while view.go_to_previous_page() {}
        prop_assert_eq!(view.state().current_page, 1);
        prop_assert!(!view.go_to_previous_page());
    }
}
