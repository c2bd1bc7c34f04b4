use serde::{Deserialize, Serialize};

use crate::entities::movie;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub watched: bool,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl From<movie::Model> for Movie {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            watched: m.watched,
            poster_path: m.poster_path,
            overview: m.overview,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateMovie {
    #[serde(default)]
    pub title: Option<String>,
}

impl CreateMovie {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
