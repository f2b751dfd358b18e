use std::io::{self, Write};

use feed_core::{Comment, DataStore, ViewController};

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn render_page(out: &mut impl Write, view: &ViewController, store: &DataStore) -> io::Result<()> {
    let page = view.page();

    if page.items.is_empty() {
        writeln!(out, "Постов не найдено")?;
    }

    for post in page.items {
        let author = store.author_name(post).unwrap_or("unknown");
        writeln!(out, "[{}] {} ({author})", post.id, post.title)?;
        for line in post.body.lines() {
            writeln!(out, "    {line}")?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "{}/{} (posts: {}, prev: {}, next: {})",
        view.page_label(),
        view.page_count(),
        page.total_items,
        yes_no(page.has_previous),
        yes_no(page.has_next),
    )
}

pub fn render_users(out: &mut impl Write, store: &DataStore) -> io::Result<()> {
    for user in store.users() {
        writeln!(out, "{:>3}  {}", user.id, user.name)?;
    }
    Ok(())
}

pub fn render_comments(out: &mut impl Write, comments: &[Comment]) -> io::Result<()> {
    writeln!(out, "Comments")?;
    for comment in comments {
        writeln!(out)?;
        writeln!(out, "## {}", comment.name)?;
        writeln!(out, "{}", comment.body)?;
        writeln!(out, "---")?;
    }
    Ok(())
}
