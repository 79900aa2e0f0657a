// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            profiles::ProfileCommandService, users::UserCommandService,
        },
        ports::{
            queries::{ArticleQueries, CommentQueries, ProfileQueries},
            security::PasswordHasher,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            profiles::ProfileQueryService,
        },
    },
    domain::{
        article::{ArticleRepository, services::ArticleSlugService},
        comment::CommentRepository,
        user::{FollowRepository, UserRepository},
    },
};

/// Write-side adapters handed to [`ApplicationServices::new`].
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub articles: Arc<dyn ArticleRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

/// Read-side adapters handed to [`ApplicationServices::new`].
pub struct QueryPorts {
    pub articles: Arc<dyn ArticleQueries>,
    pub comments: Arc<dyn CommentQueries>,
    pub profiles: Arc<dyn ProfileQueries>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub profile_queries: Arc<ProfileQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repositories: Repositories,
        queries: QueryPorts,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let Repositories {
            users,
            follows,
            articles,
            comments,
        } = repositories;

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&users),
            password_hasher,
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(ArticleSlugService::new(Arc::clone(&articles), slugger));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&articles),
            slug_service,
            Arc::clone(&clock),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&articles),
            comments,
            Arc::clone(&clock),
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(users, follows));

        Self {
            user_commands,
            article_commands,
            comment_commands,
            profile_commands,
            article_queries: Arc::new(ArticleQueryService::new(queries.articles)),
            comment_queries: Arc::new(CommentQueryService::new(queries.comments)),
            profile_queries: Arc::new(ProfileQueryService::new(queries.profiles)),
        }
    }
}
