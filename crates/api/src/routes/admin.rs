//! Admin route definitions, guarded by the bearer-token middleware.

use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::admin::{fields, labs, news, projects, site, submissions, team};
use crate::middleware::admin::require_admin;
use crate::state::AppState;

/// Build the admin route tree, intended to be nested under `/api/v1/admin`.
///
/// The token guard is attached here so every admin route is covered; the
/// state is threaded in by the caller via `with_state`.
pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/labs", get(labs::list).post(labs::create))
        .route(
            "/labs/{id}",
            get(labs::get_by_id).put(labs::update).delete(labs::delete),
        )
        .route(
            "/labs/{id}/fields",
            get(labs::list_fields).put(labs::set_fields),
        )
        .route("/fields", get(fields::list).post(fields::create))
        .route(
            "/fields/{id}",
            get(fields::get_by_id)
                .put(fields::update)
                .delete(fields::delete),
        )
        .route("/projects", get(projects::list).post(projects::create))
        .route(
            "/projects/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route(
            "/projects/{id}/team",
            get(projects::list_team).put(projects::set_team),
        )
        .route(
            "/team-members",
            get(team::list_members).post(team::create_member),
        )
        .route(
            "/team-members/{id}",
            get(team::get_member)
                .put(team::update_member)
                .delete(team::delete_member),
        )
        .route(
            "/management",
            get(team::list_management).post(team::create_management),
        )
        .route(
            "/management/{id}",
            get(team::get_management)
                .put(team::update_management)
                .delete(team::delete_management),
        )
        .route("/news", get(news::list_news).post(news::create_news))
        .route(
            "/news/{id}",
            get(news::get_news)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .route(
            "/announcements",
            get(news::list_announcements).post(news::create_announcement),
        )
        .route(
            "/announcements/{id}",
            get(news::get_announcement)
                .put(news::update_announcement)
                .delete(news::delete_announcement),
        )
        .route(
            "/settings",
            get(site::get_settings)
                .post(site::create_settings)
                .put(site::update_settings)
                .delete(site::delete_settings),
        )
        .route(
            "/mission-items",
            get(site::list_mission_items).post(site::create_mission_item),
        )
        .route(
            "/mission-items/{id}",
            get(site::get_mission_item)
                .put(site::update_mission_item)
                .delete(site::delete_mission_item),
        )
        .route(
            "/success-facts",
            get(site::list_success_facts).post(site::create_success_fact),
        )
        .route(
            "/success-facts/{id}",
            get(site::get_success_fact)
                .put(site::update_success_fact)
                .delete(site::delete_success_fact),
        )
        .route(
            "/partners",
            get(site::list_partners).post(site::create_partner),
        )
        .route(
            "/partners/{id}",
            get(site::get_partner)
                .put(site::update_partner)
                .delete(site::delete_partner),
        )
        .route("/applications", get(submissions::list_applications))
        .route(
            "/applications/{id}",
            get(submissions::get_application).delete(submissions::delete_application),
        )
        .route("/mailings", get(submissions::list_mailings))
        .route("/mailings/{id}", delete(submissions::delete_mailing))
        .route_layer(from_fn_with_state(state, require_admin))
}
