// src/domain/article/services/mod.rs
use std::future::Future;
use std::sync::Arc;

use crate::domain::article::repository::ArticleRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// Turns free text into a URL-safe base slug. Implementations must be pure.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    repo: Arc<dyn ArticleRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(repo: Arc<dyn ArticleRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    /// Probes `base`, `base-2`, `base-3`, ... against `exists` and returns the
    /// first free candidate. Performs no I/O other than through `exists`.
    pub async fn generate_unique_slug<F, Fut>(
        &self,
        title: &ArticleTitle,
        mut exists: F,
    ) -> DomainResult<ArticleSlug>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = DomainResult<bool>>,
    {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            return Err(DomainError::invalid(
                "title",
                "must contain at least one letter or digit",
            ));
        }

        let mut candidate = fit_slug(&base, "");
        let mut counter = 2u64;

        while exists(candidate.clone()).await? {
            let suffix = format!("-{counter}");
            candidate = format!("{}{suffix}", fit_slug(&base, &suffix));
            counter += 1;
        }

        ArticleSlug::new(candidate)
    }

    /// Unique slug for `title` checked against stored articles, ignoring the
    /// article identified by `ignore_id` (the one being edited).
    pub async fn slug_for(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let repo = Arc::clone(&self.repo);
        self.generate_unique_slug(title, move |candidate| {
            let repo = Arc::clone(&repo);
            async move { repo.slug_exists(&candidate, ignore_id).await }
        })
        .await
    }
}

/// Cuts `base` so that it plus `suffix` stays within [`ArticleSlug::MAX_LENGTH`].
fn fit_slug(base: &str, suffix: &str) -> String {
    let room = ArticleSlug::MAX_LENGTH.saturating_sub(suffix.len());
    if base.len() <= room {
        return base.to_string();
    }
    let cut = base
        .char_indices()
        .map(|(idx, ch)| idx + ch.len_utf8())
        .take_while(|end| *end <= room)
        .last()
        .unwrap_or(0);
    base[..cut].trim_end_matches('-').to_string()
}
