// tests/support/mocks/store.rs
//! One `Mutex`-guarded state shared by every repository and query port, so a
//! write through a command service is visible to the query services.
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;
use conduit_core::application::{
    ApplicationResult,
    dto::{ArticleView, CommentView, PageRequest, ProfileView},
    ports::queries::{ArticleFilter, ArticleQueries, CommentQueries, ProfileQueries},
};
use conduit_core::domain::article::{
    Article, ArticleId, ArticleRepository, ArticleSlug, NewArticle, TagName,
};
use conduit_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use conduit_core::domain::errors::{DomainError, DomainResult};
use conduit_core::domain::user::{
    Email, FollowRepository, NewUser, User, UserId, UserRepository, Username,
};

#[derive(Default)]
struct State {
    next_id: i64,
    users: BTreeMap<UserId, User>,
    articles: BTreeMap<ArticleId, Article>,
    comments: BTreeMap<CommentId, Comment>,
    tags: BTreeSet<String>,
    favorites: BTreeSet<(ArticleId, UserId)>,
    follows: BTreeSet<(UserId, UserId)>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn user_by_name(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username.as_str() == username)
    }

    fn profile(&self, user_id: UserId, viewer: Option<UserId>) -> Option<ProfileView> {
        let user = self.users.get(&user_id)?;
        Some(ProfileView {
            username: user.username.to_string(),
            bio: user.bio.clone(),
            image: user.image.clone(),
            following: viewer.is_some_and(|v| self.follows.contains(&(v, user_id))),
        })
    }

    fn article_view(&self, article: &Article, viewer: Option<UserId>) -> Option<ArticleView> {
        Some(ArticleView {
            slug: article.slug.to_string(),
            title: article.title.to_string(),
            description: article.description.to_string(),
            body: article.body.to_string(),
            tag_list: article.tags.names(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited: viewer.is_some_and(|v| self.favorites.contains(&(article.id, v))),
            favorites_count: self
                .favorites
                .iter()
                .filter(|(a, _)| *a == article.id)
                .count() as i64,
            author: self.profile(article.author_id, viewer)?,
        })
    }

    fn comment_view(&self, comment: &Comment, viewer: Option<UserId>) -> Option<CommentView> {
        Some(CommentView {
            id: comment.id.into(),
            body: comment.body.to_string(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            author: self.profile(comment.author_id, viewer)?,
        })
    }

    fn page(
        &self,
        mut articles: Vec<&Article>,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> Vec<ArticleView> {
        let page = page.normalized();
        articles.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        articles
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .filter_map(|article| self.article_view(article, viewer))
            .collect()
    }

    fn slug_taken(&self, slug: &str, excluding: Option<ArticleId>) -> bool {
        self.articles
            .values()
            .any(|a| a.slug.as_str() == slug && Some(a.id) != excluding)
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn favorite_count(&self) -> usize {
        self.state.lock().unwrap().favorites.len()
    }

    pub fn follow_count(&self) -> usize {
        self.state.lock().unwrap().follows.len()
    }

    pub fn stored_article(&self, slug: &str) -> Option<Article> {
        let state = self.state.lock().unwrap();
        state.articles.values().find(|a| a.slug.as_str() == slug).cloned()
    }

    pub fn stored_user(&self, username: &str) -> Option<User> {
        self.state.lock().unwrap().user_by_name(username).cloned()
    }
}

/* -------------------------------- UserRepository -------------------------------- */

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        if state.users.values().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let id = UserId::new(state.next_id())?;
        let user = User {
            id,
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            bio: None,
            image: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if !state.users.contains_key(&user.id) {
            return Err(DomainError::NotFound("user not found".into()));
        }
        let clash = state
            .users
            .values()
            .any(|u| u.id != user.id && (u.email == user.email || u.username == user.username));
        if clash {
            return Err(DomainError::Conflict("unique constraint violated".into()));
        }
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.values().find(|u| &u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.user_by_name(username.as_str()).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.users.values().any(|u| &u.email == email))
    }

    async fn exists_by_username(&self, username: &Username) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.user_by_name(username.as_str()).is_some())
    }
}

/* -------------------------------- FollowRepository -------------------------------- */

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.state.lock().unwrap().follows.insert((follower, followee));
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.state.lock().unwrap().follows.remove(&(follower, followee));
        Ok(())
    }

    async fn is_following(&self, follower: UserId, followee: UserId) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().follows.contains(&(follower, followee)))
    }
}

/* -------------------------------- ArticleRepository -------------------------------- */

#[async_trait]
impl ArticleRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if state.slug_taken(article.slug.as_str(), None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if !state.users.contains_key(&article.author_id) {
            return Err(DomainError::NotFound("author not found".into()));
        }
        let id = ArticleId::new(state.next_id())?;
        state.tags.extend(article.tags.names());
        let stored = Article {
            id,
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            author_id: article.author_id,
            tags: article.tags,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        state.articles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.contains_key(&article.id) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        if state.slug_taken(article.slug.as_str(), Some(article.id)) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        state.tags.extend(article.tags.names());
        state.articles.insert(article.id, article.clone());
        Ok(article)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state.lock().unwrap().articles.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.values().find(|a| &a.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &str, excluding: Option<ArticleId>) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().slug_taken(slug, excluding))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.favorites.retain(|(article_id, _)| *article_id != id);
        state.comments.retain(|_, comment| comment.article_id != id);
        state
            .articles
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn favorite(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()> {
        self.state.lock().unwrap().favorites.insert((article_id, user_id));
        Ok(())
    }

    async fn unfavorite(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()> {
        self.state.lock().unwrap().favorites.remove(&(article_id, user_id));
        Ok(())
    }

    async fn is_favorited(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().favorites.contains(&(article_id, user_id)))
    }

    async fn all_tags(&self) -> DomainResult<Vec<TagName>> {
        let state = self.state.lock().unwrap();
        state.tags.iter().map(TagName::new).collect()
    }
}

/* -------------------------------- CommentRepository -------------------------------- */

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.contains_key(&comment.article_id) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        let id = CommentId::new(state.next_id())?;
        let stored = Comment {
            id,
            article_id: comment.article_id,
            author_id: comment.author_id,
            body: comment.body,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state.comments.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.state.lock().unwrap().comments.get(&id).cloned())
    }

    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .values()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .comments
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))
    }
}

/* -------------------------------- Query ports -------------------------------- */

#[async_trait]
impl ArticleQueries for InMemoryStore {
    async fn find_by_slug(
        &self,
        slug: &str,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<ArticleView>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .values()
            .find(|a| a.slug.as_str() == slug)
            .and_then(|a| state.article_view(a, viewer)))
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Vec<ArticleView>> {
        let state = self.state.lock().unwrap();
        let author = filter.author.as_deref().map(|name| state.user_by_name(name).map(|u| u.id));
        let favoriter = filter
            .favorited_by
            .as_deref()
            .map(|name| state.user_by_name(name).map(|u| u.id));

        let matching = state
            .articles
            .values()
            .filter(|a| {
                filter
                    .tag
                    .as_deref()
                    .is_none_or(|tag| a.tags.iter().any(|t| t.as_str() == tag))
            })
            .filter(|a| author.is_none_or(|id| id == Some(a.author_id)))
            .filter(|a| {
                favoriter.is_none_or(|id| {
                    id.is_some_and(|user| state.favorites.contains(&(a.id, user)))
                })
            })
            .collect();

        Ok(state.page(matching, page, viewer))
    }

    async fn feed(&self, viewer: UserId, page: PageRequest) -> ApplicationResult<Vec<ArticleView>> {
        let state = self.state.lock().unwrap();
        let followed = state
            .articles
            .values()
            .filter(|a| state.follows.contains(&(viewer, a.author_id)))
            .collect();
        Ok(state.page(followed, page, Some(viewer)))
    }
}

#[async_trait]
impl CommentQueries for InMemoryStore {
    async fn list_by_article_slug(
        &self,
        slug: &str,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<Vec<CommentView>>> {
        let state = self.state.lock().unwrap();
        let Some(article) = state.articles.values().find(|a| a.slug.as_str() == slug) else {
            return Ok(None);
        };
        let mut comments: Vec<&Comment> = state
            .comments
            .values()
            .filter(|c| c.article_id == article.id)
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(Some(
            comments
                .into_iter()
                .filter_map(|c| state.comment_view(c, viewer))
                .collect(),
        ))
    }

    async fn find_by_id(
        &self,
        comment_id: i64,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<CommentView>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .values()
            .find(|c| i64::from(c.id) == comment_id)
            .and_then(|c| state.comment_view(c, viewer)))
    }
}

#[async_trait]
impl ProfileQueries for InMemoryStore {
    async fn find_by_username(
        &self,
        username: &str,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<ProfileView>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .user_by_name(username)
            .and_then(|u| state.profile(u.id, viewer)))
    }
}
