//! Property-based tests for the dashboard view-model.
//!
//! Random sequences of paging, page-size and search commands are run
//! against an in-memory collection, with every request executed and applied
//! before the next command.
//!
//! Tests validate:
//! 1. The working set always equals the server page for the current offset
//! 2. The page index never points past the last page
//! 3. Ids in the working set are unique
//! 4. Nothing is left loading once every completion is applied

use postdeck::client::{CollectionApi, MemoryCollection, MemoryRecipes};
use postdeck::dispatch::execute;
use postdeck::model::{Post, PostId};
use postdeck::state::{
    BrowseMode, DashboardState, Operation, Outcome, Request, RequestId, PAGE_SIZE_OPTIONS,
};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Command {
    Next,
    Prev,
    Jump(usize),
    CycleSize,
    Search(String),
    ClearSearch,
    Refresh,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => Just(Command::Next),
        2 => Just(Command::Prev),
        1 => (0usize..15).prop_map(Command::Jump),
        1 => Just(Command::CycleSize),
        1 => prop::sample::select(vec!["post", "7", "zzz", "  "])
            .prop_map(|q| Command::Search(q.to_string())),
        1 => Just(Command::ClearSearch),
        1 => Just(Command::Refresh),
    ]
}

fn collection(size: u64) -> MemoryCollection {
    MemoryCollection::with_posts(
        (1..=size)
            .map(|i| Post::new(PostId::new(i), format!("post {i}")))
            .collect(),
    )
}

fn run(dashboard: &mut DashboardState, api: &MemoryCollection, operation: Option<Operation>) {
    let Some(operation) = operation else {
        return;
    };
    let completion = execute(
        api,
        &MemoryRecipes::default(),
        Request {
            id: RequestId::new(1),
            operation,
        },
    );
    dashboard.apply(completion.outcome);
}

fn step(dashboard: &mut DashboardState, command: &Command) -> Option<Operation> {
    match command {
        Command::Next => dashboard.next_page(),
        Command::Prev => dashboard.prev_page(),
        Command::Jump(index) => dashboard.set_page(*index),
        Command::CycleSize => dashboard.cycle_page_size(),
        Command::Search(query) => Some(dashboard.set_search_query(query)),
        Command::ClearSearch => Some(dashboard.set_search_query("")),
        Command::Refresh => Some(dashboard.refresh()),
    }
}

proptest! {
    #[test]
    fn working_set_tracks_server_page(
        size in 0u64..60,
        start_size in prop::sample::select(PAGE_SIZE_OPTIONS.to_vec()),
        commands in prop::collection::vec(command(), 1..40),
    ) {
        let api = collection(size);
        let mut dashboard = DashboardState::new(start_size);
        let first = dashboard.enter();
        run(&mut dashboard, &api, Some(first));

        for command in &commands {
            let operation = step(&mut dashboard, command);
            run(&mut dashboard, &api, operation);

            prop_assert!(!dashboard.is_loading());

            let ids: Vec<u64> = dashboard.items().iter().map(|p| p.id.get()).collect();
            let unique: HashSet<u64> = ids.iter().copied().collect();
            prop_assert_eq!(unique.len(), ids.len());

            match dashboard.mode() {
                BrowseMode::Browsing => {
                    let expected = api
                        .list(dashboard.page_size(), dashboard.offset())
                        .unwrap();
                    let expected_ids: Vec<u64> =
                        expected.items.iter().map(|p| p.id.get()).collect();
                    prop_assert_eq!(&ids, &expected_ids);
                    prop_assert_eq!(dashboard.total_count(), size as usize);
                    prop_assert!(dashboard.page_index() < dashboard.page_count());
                }
                BrowseMode::Searching { query } => {
                    prop_assert_eq!(dashboard.total_count(), ids.len());
                    prop_assert!(!query.as_str().trim().is_empty());
                }
            }
        }
    }

    #[test]
    fn page_size_cycles_within_options(cycles in 1usize..10) {
        let mut dashboard = DashboardState::default();
        for _ in 0..cycles {
            dashboard.cycle_page_size();
            prop_assert!(PAGE_SIZE_OPTIONS.contains(&dashboard.page_size()));
            prop_assert_eq!(dashboard.page_index(), 0);
        }
    }

    #[test]
    fn listed_duplicates_are_collapsed(ids in prop::collection::vec(1u64..8, 0..20)) {
        let mut dashboard = DashboardState::default();
        dashboard.enter();
        let items = ids.iter().map(|&i| Post::new(PostId::new(i), "dup")).collect();
        dashboard.apply(Outcome::Listed(postdeck::client::ListPage {
            items,
            total: ids.len(),
        }));

        let seen: Vec<u64> = dashboard.items().iter().map(|p| p.id.get()).collect();
        let unique: HashSet<u64> = seen.iter().copied().collect();
        prop_assert_eq!(unique.len(), seen.len());
        prop_assert_eq!(unique, ids.iter().copied().collect::<HashSet<_>>());
        prop_assert!(dashboard.cursor() <= seen.len().saturating_sub(1));
    }
}
