use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

use crate::{entities::movie, error::AppResult, models::Movie};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<Movie>> {
        let rows = movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    pub async fn create(&self, title: &str) -> AppResult<Movie> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(title.to_string()),
            watched: Set(false),
            poster_path: Set(None),
            overview: Set(None),
        };
        let created = model.insert(&self.db).await?;
        Ok(created.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    pub async fn toggle(&self, id: i32) -> AppResult<Option<Movie>> {
        let updated = movie::Entity::update_many()
            .col_expr(movie::Column::Watched, Expr::col(movie::Column::Watched).not())
            .filter(movie::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await?;

        Ok(updated.into_iter().next().map(Movie::from))
    }
}
