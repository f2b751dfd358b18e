use std::io::{BufRead, Write};

use anyhow::Result;
use feed_core::{DataStore, FeedSource, SortDirection, ViewController};
use tracing::debug;

use crate::render::{render_comments, render_page};

const HELP: &str = "\
Команды:
  n, next            следующая страница
  p, prev            предыдущая страница
  s, search [текст]  поиск по заголовку (без текста сбрасывает)
  u, user [id]       фильтр по автору (без id сбрасывает)
  o, sort asc|desc   направление сортировки
  c, comments <id>   комментарии к посту
  h, help            эта справка
  q, quit            выход";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Search(String),
    User(Option<i64>),
    Sort(SortDirection),
    Comments(i64),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "n" | "next" => Ok(BrowseCommand::Next),
        "p" | "prev" => Ok(BrowseCommand::Prev),
        "s" | "search" => Ok(BrowseCommand::Search(rest.to_string())),
        "u" | "user" if rest.is_empty() => Ok(BrowseCommand::User(None)),
        "u" | "user" => rest
            .parse::<i64>()
            .map(|id| BrowseCommand::User(Some(id)))
            .map_err(|_| format!("некорректный id пользователя: {rest}")),
        "o" | "sort" => rest.parse::<SortDirection>().map(BrowseCommand::Sort),
        "c" | "comments" => rest
            .parse::<i64>()
            .map(BrowseCommand::Comments)
            .map_err(|_| format!("некорректный id поста: {rest:?}")),
        "h" | "help" | "?" => Ok(BrowseCommand::Help),
        "q" | "quit" | "exit" => Ok(BrowseCommand::Quit),
        "" => Err("пустая команда".to_string()),
        other => Err(format!("неизвестная команда: {other}")),
    }
}

/// Интерактивный цикл: читает команды построчно, после каждого изменения
/// состояния перерисовывает страницу. Ошибки загрузки комментариев
/// печатаются и цикл продолжается.
pub async fn run_browse<S, R, W>(
    source: &S,
    store: &DataStore,
    view: &mut ViewController,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: FeedSource + ?Sized,
    R: BufRead,
    W: Write,
{
    render_page(out, view, store)?;
    writeln!(out, "(h — справка)")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message} (h — справка)")?;
                continue;
            }
        };
        debug!(?command, "browse command");

        match command {
            BrowseCommand::Next => {
                if !view.go_to_next_page() {
                    writeln!(out, "Это последняя страница")?;
                    continue;
                }
            }
            BrowseCommand::Prev => {
                if !view.go_to_previous_page() {
                    writeln!(out, "Это первая страница")?;
                    continue;
                }
            }
            BrowseCommand::Search(term) => view.set_search_term(term),
            BrowseCommand::User(user_id) => view.select_user(user_id),
            BrowseCommand::Sort(direction) => view.set_sort_direction(direction),
            BrowseCommand::Comments(post_id) => {
                match source.fetch_comments(post_id).await {
                    Ok(comments) => render_comments(out, &comments)?,
                    Err(err) => writeln!(out, "Ошибка: не удалось загрузить комментарии: {err}")?,
                }
                continue;
            }
            BrowseCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            BrowseCommand::Quit => break,
        }

        render_page(out, view, store)?;
    }

    Ok(())
}
