use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Пост из ленты.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Идентификатор автора (ссылка на [`User::id`]).
    pub user_id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Автор постов.
///
/// API отдаёт и другие поля (email, адрес и т.д.), они игнорируются.
pub struct User {
    /// Идентификатор пользователя.
    pub id: i64,
    /// Отображаемое имя.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Комментарий к посту.
pub struct Comment {
    /// Идентификатор поста, к которому относится комментарий.
    #[serde(default)]
    pub post_id: i64,
    /// Идентификатор комментария.
    #[serde(default)]
    pub id: i64,
    /// Имя (заголовок) комментария.
    pub name: String,
    /// Email автора комментария.
    #[serde(default)]
    pub email: String,
    /// Текст комментария.
    pub body: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Направление сортировки по заголовку.
pub enum SortDirection {
    /// A → Z.
    #[default]
    Ascending,
    /// Z → A.
    Descending,
}

impl SortDirection {
    /// Короткое имя для селекторов и CLI: `asc` / `desc`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort direction: {other:?} (expected asc or desc)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_camel_case_user_id() {
        let raw = r#"{"userId":3,"id":21,"title":"asperiores ea ipsam","body":"text"}"#;
        let post: Post = serde_json::from_str(raw).expect("post should parse");
        assert_eq!(post.user_id, 3);
        assert_eq!(post.id, 21);
    }

    #[test]
    fn user_ignores_extra_fields() {
        let raw = r#"{"id":1,"name":"Leanne Graham","username":"Bret","email":"x@y.z","address":{"city":"Gwenborough"}}"#;
        let user: User = serde_json::from_str(raw).expect("user should parse");
        assert_eq!(
            user,
            User {
                id: 1,
                name: "Leanne Graham".to_string()
            }
        );
    }

    #[test]
    fn comment_needs_only_name_and_body() {
        let raw = r#"{"name":"id labore ex et quam laborum","body":"laudantium"}"#;
        let comment: Comment = serde_json::from_str(raw).expect("comment should parse");
        assert_eq!(comment.name, "id labore ex et quam laborum");
        assert_eq!(comment.post_id, 0);
        assert!(comment.email.is_empty());
    }

    #[test]
    fn sort_direction_parses_short_and_long_names() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Ascending));
        assert_eq!(" DESC ".parse::<SortDirection>(), Ok(SortDirection::Descending));
        assert_eq!(
            "descending".parse::<SortDirection>(),
            Ok(SortDirection::Descending)
        );
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn sort_direction_defaults_to_ascending() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(SortDirection::Descending.to_string(), "desc");
    }
}
