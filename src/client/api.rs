use reqwest::StatusCode;

use crate::models::{CreateMovie, ErrorBody, Movie};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },
}

#[allow(async_fn_in_trait)]
pub trait MovieApi {
    async fn list(&self) -> Result<Vec<Movie>, ClientError>;
    async fn create(&self, title: &str) -> Result<Movie, ClientError>;
    async fn delete(&self, id: i32) -> Result<(), ClientError>;
    async fn toggle(&self, id: i32) -> Result<Movie, ClientError>;
}

pub struct HttpMovieApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMovieApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl MovieApi for HttpMovieApi {
    async fn list(&self) -> Result<Vec<Movie>, ClientError> {
        let resp = self.client.get(self.url("/movies")).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn create(&self, title: &str) -> Result<Movie, ClientError> {
        let body = CreateMovie { title: Some(title.to_string()) };
        let resp = self.client.post(self.url("/movies")).json(&body).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    async fn delete(&self, id: i32) -> Result<(), ClientError> {
        let resp = self.client.delete(self.url(&format!("/movies/{id}"))).send().await?;
        check(resp).await?;
        Ok(())
    }

    async fn toggle(&self, id: i32) -> Result<Movie, ClientError> {
        let resp = self.client.patch(self.url(&format!("/movies/{id}/toggle"))).send().await?;
        Ok(check(resp).await?.json().await?)
    }
}

async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) => text,
    };
    Err(ClientError::Api { status, message })
}
