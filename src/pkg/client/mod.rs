pub mod session;

use reqwest::{StatusCode, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    conf::Settings,
    pkg::{
        internal::adaptors::jobs::spec::{JobEntry, JobPage},
        server::handlers::auth::{LoginInput, LoginOutput},
    },
    prelude::{Error, Result},
};
use session::{Session, SessionStore};

/// Thin HTTP wrapper over the job board API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutput> {
        let res = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginInput {
                email: email.into(),
                password: password.into(),
            })
            .send()
            .await?;
        if res.status() == StatusCode::UNAUTHORIZED {
            return Err(Error::InvalidCredentials);
        }
        decode(res).await
    }

    pub async fn list_jobs(&self, token: &str, session: &Session) -> Result<JobPage> {
        let mut query = vec![
            ("page", session.current_page.to_string()),
            ("limit", session.limit.to_string()),
        ];
        if !session.current_search.is_empty() {
            query.push(("search", session.current_search.clone()));
        }
        let res = self
            .http
            .get(format!("{}/jobs", self.base_url))
            .query(&query)
            .header(AUTHORIZATION, token)
            .send()
            .await?;
        decode(res).await
    }

    pub async fn job(&self, token: &str, id: u32) -> Result<JobEntry> {
        let res = self
            .http
            .get(format!("{}/jobs/{}", self.base_url, id))
            .header(AUTHORIZATION, token)
            .send()
            .await?;
        decode(res).await
    }
}

async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json().await?);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(Error::Unauthorized);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(Error::JobNotFound);
    }
    let message = res
        .json::<Value>()
        .await
        .ok()
        .and_then(|b| b.get("error").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").into());
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

/// Session-aware client: keeps the token and view state on disk and forgets
/// both on any 401.
pub struct JobBoard {
    api: ApiClient,
    store: SessionStore,
    pub session: Session,
}

impl JobBoard {
    pub fn new(api: ApiClient, store: SessionStore, limit: u32) -> Result<Self> {
        let session = Session::restore(&store, limit)?;
        Ok(JobBoard {
            api,
            store,
            session,
        })
    }

    pub fn from_settings(s: &Settings) -> Result<Self> {
        JobBoard::new(
            ApiClient::new(&s.api_base_url),
            SessionStore::new(&s.session_file),
            s.page_limit,
        )
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<LoginOutput> {
        let out = self.api.login(email, password).await?;
        self.store.save_token(&out.token)?;
        self.session.token = Some(out.token.clone());
        tracing::debug!("stored token in session");
        Ok(out)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.session.clear();
        self.store.clear()
    }

    fn token(&self) -> Result<String> {
        self.session.token.clone().ok_or(Error::NotLoggedIn)
    }

    pub async fn fetch_jobs(&mut self) -> Result<JobPage> {
        let token = self.token()?;
        let res = self.api.list_jobs(&token, &self.session).await;
        let page = self.forget_on_unauthorized(res)?;
        self.store.save_view(&self.session)?;
        Ok(page)
    }

    pub async fn fetch_job(&mut self, id: u32) -> Result<JobEntry> {
        let token = self.token()?;
        let res = self.api.job(&token, id).await;
        self.forget_on_unauthorized(res)
    }

    fn forget_on_unauthorized<T>(&mut self, res: Result<T>) -> Result<T> {
        if let Err(Error::Unauthorized) = &res {
            tracing::warn!("token rejected, clearing session");
            self.logout()?;
        }
        res
    }
}
