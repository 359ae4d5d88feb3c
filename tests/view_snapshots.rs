//! Snapshot tests for the header and status lines.
//!
//! Uses insta + ratatui TestBackend so wording and placement changes show up
//! as snapshot diffs.

use postdeck::client::ListPage;
use postdeck::config::KeyBindings;
use postdeck::model::{Post, PostId};
use postdeck::session::User;
use postdeck::state::{AppState, Completion, DashboardState, Outcome};
use postdeck::view::{pagination_status, render_layout, Palette};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

/// Rows of the rendered buffer with surrounding blanks trimmed.
fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim().to_string()
        })
        .collect()
}

fn listed(dashboard: &mut DashboardState, total: usize) {
    dashboard.apply(Outcome::Listed(ListPage {
        items: Vec::new(),
        total,
    }));
}

// ===== Snapshots =====

#[test]
fn pagination_status_variants() {
    let mut first = DashboardState::new(10);
    first.enter();
    listed(&mut first, 251);

    let mut third = DashboardState::new(25);
    third.enter();
    listed(&mut third, 251);
    third.set_page(2);
    listed(&mut third, 251);

    let mut empty = DashboardState::new(10);
    empty.enter();
    listed(&mut empty, 0);

    let mut searching = DashboardState::new(10);
    searching.set_search_query("love");
    searching.apply(Outcome::Searched(vec![
        Post::new(PostId::new(4), "love"),
        Post::new(PostId::new(9), "lovely"),
    ]));

    let lines = [&first, &third, &empty, &searching]
        .iter()
        .map(|d| pagination_status(d))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(lines, @r###"
    Page 1/26 | 10 per page | 251 posts
    Page 3/11 | 25 per page | 251 posts
    Page 1/1 | 10 per page | 0 posts
    2 results for "love" | Esc to clear
    "###);
}

#[test]
fn header_and_status_lines() {
    let mut state = AppState::new(User::from_email("ada@example.com").unwrap(), 5);
    let request = state.start(None);
    state.complete(Completion {
        id: request.id,
        outcome: Outcome::Listed(ListPage {
            items: vec![Post::new(PostId::new(1), "His mother had always taught him")],
            total: 12,
        }),
    });

    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, &state, &KeyBindings::default(), &Palette::default()))
        .unwrap();
    let lines = buffer_lines(terminal.backend().buffer());

    let chrome = format!("{}\n{}", lines[0], lines[lines.len() - 1]);
    insta::assert_snapshot!(chrome, @r###"
    postdeck | Posts                    Hello, ada@example.com
    Page 1/3 | 5 per page | 12 posts            ? help  q quit
    "###);
}
