//! Parameter and payload types for the grouped calls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Filters for the product listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// How the backend matches a search query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    #[default]
    Fuzzy,
    Semantic,
}

/// Product search parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }
}

/// Filters for the generic recommendation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationQuery {
    pub product_id: Option<u64>,
    pub user_id: Option<u64>,
    pub limit: Option<u32>,
}

/// Personalized recommendation API generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationVersion {
    V1,
    #[default]
    V2,
}

impl RecommendationVersion {
    pub fn as_segment(self) -> &'static str {
        match self {
            RecommendationVersion::V1 => "v1",
            RecommendationVersion::V2 => "v2",
        }
    }
}

/// Registration payload for a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

impl RegisterUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            user_id: None,
            preferences: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
}

/// Kinds of user interaction the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    Click,
    View,
    Favorite,
    Purchase,
    Dislike,
}

impl std::str::FromStr for InteractionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "click" => Ok(Self::Click),
            "view" => Ok(Self::View),
            "favorite" => Ok(Self::Favorite),
            "purchase" => Ok(Self::Purchase),
            "dislike" => Ok(Self::Dislike),
            other => Err(format!("unknown interaction type '{}'", other)),
        }
    }
}

/// A single user interaction to record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: u64,
    pub product_id: u64,
    pub interaction_type: InteractionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// User preference document. The backend defines its shape.
pub type Preferences = Map<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_query_serialization() {
        let query = SearchQuery {
            search_type: Some(SearchType::Semantic),
            ..SearchQuery::new("red shoes")
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"q": "red shoes", "type": "semantic", "page": null, "per_page": null})
        );
    }

    #[test]
    fn test_interaction_serialization() {
        let interaction = Interaction {
            user_id: 1,
            product_id: 42,
            interaction_type: InteractionType::Favorite,
            interaction_score: None,
            session_id: Some("s-1".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&interaction).unwrap(),
            json!({"user_id": 1, "product_id": 42, "interaction_type": "favorite", "session_id": "s-1"})
        );
    }

    #[test]
    fn test_interaction_type_parse() {
        assert_eq!("Purchase".parse::<InteractionType>().unwrap(), InteractionType::Purchase);
        assert!("share".parse::<InteractionType>().is_err());
    }

    #[test]
    fn test_version_segment() {
        assert_eq!(RecommendationVersion::default().as_segment(), "v2");
        assert_eq!(RecommendationVersion::V1.as_segment(), "v1");
    }
}
