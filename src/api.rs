use gloo_net::http::{Request, Response};

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::model::{Reply, Snapshot};

/// The three calls the board makes against the activities server.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    async fn fetch_activities(&self) -> Result<Snapshot, BoardError>;
    async fn sign_up(&self, activity: &str, email: &str) -> Result<Reply, BoardError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<Reply, BoardError>;
}

pub fn activities_url(base: &str) -> String {
    format!("{base}/activities")
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/unregister?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// Browser fetch client.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    config: BoardConfig,
}

impl HttpApi {
    pub fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    async fn read_reply(resp: Response) -> Result<Reply, BoardError> {
        let ok = resp.ok();
        let text = resp.text().await?;
        let reply = Reply::from_body(ok, &text)?;
        log::debug!("HTTP {} -> {:?}", resp.status(), reply.note);
        Ok(reply)
    }
}

impl ActivityApi for HttpApi {
    async fn fetch_activities(&self) -> Result<Snapshot, BoardError> {
        let resp = Request::get(&activities_url(&self.config.api_base))
            .header("Accept", "application/json")
            .send()
            .await?;

        if !resp.ok() {
            return Err(BoardError::Status(resp.status()));
        }

        let text = resp.text().await?;
        Snapshot::from_json(&text)
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<Reply, BoardError> {
        let resp = Request::post(&signup_url(&self.config.api_base, activity, email))
            .header("Accept", "application/json")
            .send()
            .await?;
        Self::read_reply(resp).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Reply, BoardError> {
        let resp = Request::delete(&unregister_url(&self.config.api_base, activity, email))
            .header("Accept", "application/json")
            .send()
            .await?;
        Self::read_reply(resp).await
    }
}
