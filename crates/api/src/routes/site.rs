//! Public site routes: page contexts, forms, and the chat proxy.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{chat, forms, labs, news, pages, team};
use crate::state::AppState;

/// Build the public route tree, mounted at the root.
pub fn site_routes() -> Router<AppState> {
    Router::new()
        // General pages.
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/contacts", get(pages::contacts))
        .route("/how", get(pages::how))
        // Forms.
        .route("/form/contact", post(forms::contact_form))
        .route("/form/mailing", post(forms::mailing_form))
        // Chat proxy.
        .route("/api/chat", post(chat::chat))
        // Labs and projects. The static `/all` segment takes priority over
        // the `{field_slug}` parameter at the same position.
        .route("/labs", get(labs::lab_list))
        .route("/labs/{lab_slug}", get(labs::lab_detail))
        .route("/labs/{lab_slug}/all", get(labs::all_projects))
        .route("/labs/{lab_slug}/{field_slug}", get(labs::projects_by_field))
        .route(
            "/how/{lab_slug}/{field_slug}/{project_slug}",
            get(labs::project_detail),
        )
        // News.
        .route("/news", get(news::news_list))
        .route("/news/{news_slug}", get(news::news_detail))
        // Team profiles.
        .route("/team/{id}", get(team::team_member_detail))
}
