//! Shared fixtures: a scripted `RemoteSource` and project builders.

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use folio_cache::{CacheStore, MemoryStore};
use folio_core::{ProjectConfig, RemotePayload, RepoId, Stat};
use folio_gallery::{ProjectResolver, RemoteSource};
use folio_github::FetchError;

pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Clone)]
pub enum Reply {
    Payload(RemotePayload),
    Delayed(Duration, RemotePayload),
    RateLimited,
    ServerError,
}

/// Answers each repository with a scripted reply and records every call.
/// Unscripted repositories get a server error.
#[derive(Default)]
pub struct FakeSource {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, repo: &str, reply: Reply) -> Self {
        self.replies.insert(repo.to_string(), reply);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl RemoteSource for FakeSource {
    fn fetch_remote(
        &self,
        id: &RepoId,
        _custom_image: Option<&str>,
    ) -> impl Future<Output = Result<RemotePayload, FetchError>> {
        let key = id.to_string();
        self.calls.lock().unwrap().push(key.clone());
        let reply = self.replies.get(&key).cloned();
        async move {
            match reply {
                Some(Reply::Payload(payload)) => Ok(payload),
                Some(Reply::Delayed(delay, payload)) => {
                    tokio::time::sleep(delay).await;
                    Ok(payload)
                }
                Some(Reply::RateLimited) => Err(FetchError::RateLimited {
                    status: 403,
                    retry_after_secs: 0,
                }),
                Some(Reply::ServerError) | None => Err(FetchError::Api {
                    status: 500,
                    message: format!("scripted failure for {key}"),
                }),
            }
        }
    }
}

pub fn resolver(source: FakeSource) -> ProjectResolver<FakeSource, MemoryStore> {
    ProjectResolver::new(source, CacheStore::new(MemoryStore::new(), "github_repo_", DAY))
}

pub fn live_payload(repo: &str, stars: u64) -> RemotePayload {
    let id: RepoId = repo.parse().unwrap();
    RemotePayload {
        name: id.name().to_string(),
        description: format!("{} from the API", id.name()),
        stars: Stat::Count(stars),
        forks: Stat::Count(1),
        languages: vec!["Rust".into()],
        homepage: None,
        html_url: format!("https://github.com/{repo}"),
        topics: vec![],
        image: format!("https://opengraph.githubassets.com/1/{repo}"),
        last_updated: Some(folio_core::now_millis()),
    }
}

pub fn hosted(name: &str, repo: &str) -> ProjectConfig {
    ProjectConfig {
        name: name.into(),
        github: Some(repo.parse().unwrap()),
        ..ProjectConfig::default()
    }
}

pub fn closed(name: &str, store: &str) -> ProjectConfig {
    ProjectConfig {
        name: name.into(),
        chrome_store: Some(store.into()),
        description: Some(format!("{name} description")),
        ..ProjectConfig::default()
    }
}

pub fn failing_fallback(_repo: &str, _config: Option<&ProjectConfig>) -> Option<RemotePayload> {
    None
}
