//! Route definitions.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                                          service + DB health
//!
//! /                                                home page context
//! /about                                           about page context
//! /contacts                                        contacts page context
//! /how                                             how-it-works page context
//! /labs                                            lab list
//! /labs/{lab_slug}                                 lab detail
//! /labs/{lab_slug}/all                             all projects of a lab
//! /labs/{lab_slug}/{field_slug}                    lab projects in a field
//! /how/{lab_slug}/{field_slug}/{project_slug}      project detail
//! /news                                            news list
//! /news/{news_slug}                                news detail
//! /team/{id}                                       team member profile
//!
//! /form/contact                                    contact form (POST)
//! /form/mailing                                    mailing signup (POST)
//! /api/chat                                        chat proxy (POST)
//!
//! /api/v1/admin/labs[/{id}]                        CRUD (+ /{id}/fields)
//! /api/v1/admin/fields[/{id}]                      CRUD
//! /api/v1/admin/projects[/{id}]                    CRUD (+ /{id}/team)
//! /api/v1/admin/team-members[/{id}]                CRUD
//! /api/v1/admin/management[/{id}]                  CRUD
//! /api/v1/admin/news[/{id}]                        CRUD
//! /api/v1/admin/announcements[/{id}]               CRUD
//! /api/v1/admin/settings                           get, create, update;
//!                                                  delete always denied
//! /api/v1/admin/mission-items[/{id}]               CRUD
//! /api/v1/admin/success-facts[/{id}]               CRUD
//! /api/v1/admin/partners[/{id}]                    CRUD
//! /api/v1/admin/applications[/{id}]                list, get, delete
//! /api/v1/admin/mailings[/{id}]                    list, delete
//! ```

pub mod admin;
pub mod health;
pub mod site;

pub use admin::admin_routes;
pub use site::site_routes;
