use std::cmp::Ordering;

use crate::models::{Post, SortDirection};

/// Количество постов на странице.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Входные параметры представления и номер текущей страницы.
pub struct ViewState {
    /// Подстрока для поиска по заголовку (без учёта регистра).
    pub search_term: String,
    /// Выбранный автор; `None` означает всех авторов.
    pub selected_user_id: Option<i64>,
    /// Направление сортировки по заголовку.
    pub sort_direction: SortDirection,
    /// Номер страницы, начиная с 1.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_user_id: None,
            sort_direction: SortDirection::default(),
            current_page: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Снимок текущей страницы для рендера.
pub struct Page<'a> {
    /// Посты на странице, не больше [`PAGE_SIZE`].
    pub items: &'a [Post],
    /// Номер страницы, начиная с 1.
    pub number: usize,
    /// Можно ли перейти на предыдущую страницу.
    pub has_previous: bool,
    /// Можно ли перейти на следующую страницу.
    pub has_next: bool,
    /// Размер всего отфильтрованного списка.
    pub total_items: usize,
}

/// Проверяет, проходит ли пост фильтры по автору и по заголовку.
pub fn matches(post: &Post, state: &ViewState) -> bool {
    matches_lowered(post, state.selected_user_id, &state.search_term.to_lowercase())
}

fn matches_lowered(post: &Post, selected_user_id: Option<i64>, term_lower: &str) -> bool {
    let matches_user = selected_user_id.is_none_or(|user_id| post.user_id == user_id);
    matches_user && post.title.to_lowercase().contains(term_lower)
}

/// Сравнение заголовков "как у человека": сначала без учёта регистра,
/// затем по исходной строке.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Срез страницы `page` (с 1) из `items`. Страница за пределами списка
/// даёт пустой срез.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone)]
/// Контроллер представления: владеет всеми постами, состоянием фильтров
/// и производным отфильтрованным списком.
///
/// Любое изменение фильтра или сортировки проходит через [`recompute`],
/// который пересобирает список и возвращает на первую страницу.
/// Листание страниц список не пересчитывает.
///
/// [`recompute`]: ViewController::recompute
pub struct ViewController {
    posts: Vec<Post>,
    filtered: Vec<Post>,
    state: ViewState,
}

impl ViewController {
    /// Создаёт контроллер. До первого изменения ввода список показывается
    /// в исходном порядке, без сортировки.
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            filtered: posts.clone(),
            posts,
            state: ViewState::default(),
        }
    }

    /// Текущее состояние ввода и номер страницы.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Все посты, с которыми работает контроллер.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Отфильтрованный и отсортированный список целиком.
    pub fn filtered(&self) -> &[Post] {
        &self.filtered
    }

    /// Пересобирает отфильтрованный список по текущему состоянию и
    /// сбрасывает страницу на первую.
    pub fn recompute(&mut self) {
        let term_lower = self.state.search_term.to_lowercase();
        let selected_user_id = self.state.selected_user_id;

        let mut filtered: Vec<Post> = self
            .posts
            .iter()
            .filter(|post| matches_lowered(post, selected_user_id, &term_lower))
            .cloned()
            .collect();

        // sort_by стабильный: равные заголовки остаются в порядке API.
        match self.state.sort_direction {
            SortDirection::Ascending => {
                filtered.sort_by(|a, b| compare_titles(&a.title, &b.title));
            }
            SortDirection::Descending => {
                filtered.sort_by(|a, b| compare_titles(&b.title, &a.title));
            }
        }

        self.filtered = filtered;
        self.state.current_page = 1;
    }

    /// Новый поисковый запрос.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.recompute();
    }

    /// Новый фильтр по автору; `None` снимает фильтр.
    pub fn select_user(&mut self, user_id: Option<i64>) {
        self.state.selected_user_id = user_id;
        self.recompute();
    }

    /// Новое направление сортировки.
    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.state.sort_direction = direction;
        self.recompute();
    }

    /// Переходит на предыдущую страницу. Возвращает `false`, если уже на первой.
    pub fn go_to_previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.state.current_page -= 1;
        true
    }

    /// Переходит на следующую страницу. Возвращает `false`, если дальше
    /// постов нет.
    pub fn go_to_next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.state.current_page += 1;
        true
    }

    /// Есть ли страница перед текущей.
    pub fn has_previous(&self) -> bool {
        self.state.current_page > 1
    }

    /// Есть ли посты после текущей страницы.
    pub fn has_next(&self) -> bool {
        self.state.current_page.saturating_mul(PAGE_SIZE) < self.filtered.len()
    }

    /// Общее число страниц; пустой список занимает одну страницу.
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Подпись для индикатора страницы.
    pub fn page_label(&self) -> String {
        format!("Page {}", self.state.current_page)
    }

    /// Снимок текущей страницы.
    pub fn page(&self) -> Page<'_> {
        Page {
            items: paginate(&self.filtered, self.state.current_page),
            number: self.state.current_page,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            total_items: self.filtered.len(),
        }
    }
}
