// tests/support/builders.rs
use conduit_core::application::commands::{
    FieldUpdate,
    articles::{CreateArticleCommand, UpdateArticleCommand},
    users::{RegisterUserCommand, UpdateUserCommand},
};

pub const DEFAULT_PASSWORD: &str = "jakejake";

/// Registration for `username` with a derived email and a valid password.
pub fn registration(username: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        email: format!("{username}@example.com"),
        username: username.into(),
        password: DEFAULT_PASSWORD.into(),
    }
}

pub fn article(title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .description("Ever wonder how?")
        .body("You have to believe")
        .build()
        .expect("complete article command")
}

pub fn tagged_article(title: &str, tags: &[&str]) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .description("Ever wonder how?")
        .body("You have to believe")
        .tags(tags.iter().copied())
        .build()
        .expect("complete article command")
}

pub struct ArticleUpdateBuilder {
    command: UpdateArticleCommand,
}

impl ArticleUpdateBuilder {
    pub fn new() -> Self {
        Self {
            command: UpdateArticleCommand::default(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.command.title = FieldUpdate::from(Some(title.to_string()));
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.command.description = FieldUpdate::from(Some(description.to_string()));
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.command.body = FieldUpdate::from(Some(body.to_string()));
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.command.tags = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn build(self) -> UpdateArticleCommand {
        self.command
    }
}

impl Default for ArticleUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct UserUpdateBuilder {
    command: UpdateUserCommand,
}

impl UserUpdateBuilder {
    pub fn new() -> Self {
        Self {
            command: UpdateUserCommand::default(),
        }
    }

    pub fn email(mut self, email: &str) -> Self {
        self.command.email = FieldUpdate::from(Some(email.to_string()));
        self
    }

    pub fn username(mut self, username: &str) -> Self {
        self.command.username = FieldUpdate::from(Some(username.to_string()));
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.command.password = FieldUpdate::from(Some(password.to_string()));
        self
    }

    pub fn bio(mut self, bio: &str) -> Self {
        self.command.bio = FieldUpdate::from(Some(bio.to_string()));
        self
    }

    pub fn image(mut self, image: &str) -> Self {
        self.command.image = FieldUpdate::from(Some(image.to_string()));
        self
    }

    pub fn build(self) -> UpdateUserCommand {
        self.command
    }
}

impl Default for UserUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
