//! askama page templates.
//!
//! Every page extends `base.html`, whose chrome needs the visitor's login
//! state and any pending flash message, so those fields appear on each
//! page struct. The error page stands alone.

use askama::Template;
use quill_db::models::post::PostWithAuthor;

/// Post index (`GET /`).
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub logged_in: bool,
    pub is_admin: bool,
    pub flash: Option<String>,
    pub posts: Vec<PostWithAuthor>,
}

/// Post detail with comments (`GET /post/{id}`).
#[derive(Template)]
#[template(path = "post.html")]
pub struct PostPage {
    pub logged_in: bool,
    pub is_admin: bool,
    pub flash: Option<String>,
    pub post: PostWithAuthor,
    pub comments: Vec<CommentView>,
}

/// A comment prepared for rendering: author name and gravatar resolved.
pub struct CommentView {
    pub author_name: String,
    pub avatar_url: String,
    pub body: String,
}

/// Registration form (`GET /register`).
#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub logged_in: bool,
    pub is_admin: bool,
    pub flash: Option<String>,
}

/// Login form (`GET /login`).
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub logged_in: bool,
    pub is_admin: bool,
    pub flash: Option<String>,
}

/// Shared form for creating and editing a post.
#[derive(Template)]
#[template(path = "make_post.html")]
pub struct MakePostPage {
    pub logged_in: bool,
    pub is_admin: bool,
    pub flash: Option<String>,
    /// Page heading: "New Post" or "Edit Post".
    pub heading: &'static str,
    /// URL the form posts back to.
    pub action: String,
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    pub body: String,
}

/// About page (`GET /about`).
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub logged_in: bool,
    pub is_admin: bool,
    pub flash: Option<String>,
}

/// Contact page (`GET /contact`).
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub logged_in: bool,
    pub is_admin: bool,
    pub flash: Option<String>,
}

/// Standalone error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub message: String,
}
