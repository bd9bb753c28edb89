//! Web UI handlers

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use minijinja::{context, Value};
use serde::{Deserialize, Serialize};

use crate::api::server::{AppState, SharedState};
use crate::auth::{LoginRequest, Role, SessionUser, SignupRequest, DEMO_ACCOUNTS};
use crate::error::{Error, Result};
use crate::site::content;
use crate::site::nav::{self, landing_path, Destination, JobsView, ProfileView};

/// A one-off message shown at the top of a page
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: &'static str,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: "error",
            title: title.into(),
            message: message.into(),
        }
    }
}

const LOGIN_FAILED: &str = "Invalid credentials. Please check your username, password, and role.";
const SIGNUP_FAILED: &str = "An error occurred during registration. Please try again.";

/// Success notice carried on a redirect as `?notice=login` or `?notice=signup`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Login,
    Signup,
}

impl Flash {
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "login" => Some(Flash::Login),
            "signup" => Some(Flash::Signup),
            _ => None,
        }
    }

    pub fn param(self) -> &'static str {
        match self {
            Flash::Login => "login",
            Flash::Signup => "signup",
        }
    }

    /// Redirect target with this notice attached
    pub fn attach(self, path: &str) -> String {
        format!("{}?notice={}", path, self.param())
    }

    /// The notice for the user now in session
    pub fn notice(self, user: &SessionUser) -> Notice {
        match self {
            Flash::Login => Notice::success(
                "Login Successful",
                format!("Welcome back! You're logged in as a {}.", user.role),
            ),
            Flash::Signup => Notice::success(
                "Account Created",
                format!("Welcome to Shatam! Your {} account has been created.", user.role),
            ),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

impl NoticeQuery {
    /// Notice named by the query; nothing once the session is gone
    fn resolve(&self, state: &AppState) -> Option<Notice> {
        let flash = Flash::from_param(self.notice.as_deref()?)?;
        state.session.current().map(|user| flash.notice(user))
    }
}

/// Render a page inside the site layout
fn render_page(
    state: &AppState,
    template: &str,
    path: &str,
    notice: Option<Notice>,
    page: Value,
) -> Result<Html<String>> {
    let viewer = state.session.viewer();
    let ctx = context! {
        nav => nav::nav_links(viewer.navigation(), path),
        user => state.session.current(),
        initials => state.session.current().map(SessionUser::initials),
        notice => notice,
        path => path,
        ..page
    };
    let html = state.templates.get_template(template)?.render(ctx)?;
    Ok(Html(html))
}

/// Home page
pub async fn home(
    State(state): State<SharedState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>> {
    let state = state.read().await;
    render_page(
        &state,
        "home.html",
        Destination::Home.path(),
        query.resolve(&state),
        context! { features => content::HOME_FEATURES },
    )
}

#[derive(Debug, Deserialize)]
pub struct AboutQuery {
    pub story: Option<i64>,
}

/// About page with the success-story carousel
pub async fn about(
    State(state): State<SharedState>,
    Query(query): Query<AboutQuery>,
    Query(notice): Query<NoticeQuery>,
) -> Result<Html<String>> {
    let current = content::story_index(query.story.unwrap_or(0));
    let len = content::STORIES.len();
    let state = state.read().await;
    render_page(
        &state,
        "about.html",
        Destination::About.path(),
        notice.resolve(&state),
        context! {
            story => content::STORIES[current],
            current => current,
            story_count => len,
            prev => (current + len - 1) % len,
            next => (current + 1) % len,
            values => content::VALUES,
        },
    )
}

/// Services page
pub async fn services(
    State(state): State<SharedState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>> {
    let state = state.read().await;
    render_page(
        &state,
        "services.html",
        Destination::Services.path(),
        query.resolve(&state),
        context! {
            steps => content::SERVICE_STEPS,
            options => content::CARE_OPTIONS,
            features => content::PLATFORM_FEATURES,
        },
    )
}

/// Learning page
pub async fn learning(
    State(state): State<SharedState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>> {
    let state = state.read().await;
    render_page(
        &state,
        "learning.html",
        Destination::Learning.path(),
        query.resolve(&state),
        context! {
            courses => content::COURSES,
            benefits => content::LEARNING_BENEFITS,
            steps => content::LEARNING_STEPS,
        },
    )
}

/// Jobs page; the listing is only shown to caregivers and admins
pub async fn jobs(
    State(state): State<SharedState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>> {
    let state = state.read().await;
    let view = match state.session.viewer().jobs_view() {
        JobsView::Listing => "listing",
        JobsView::LoginRequired => "login_required",
        JobsView::CaregiverRoleRequired => "role_required",
    };
    render_page(
        &state,
        "jobs.html",
        Destination::Jobs.path(),
        query.resolve(&state),
        context! { view => view, jobs => content::JOBS },
    )
}

/// Profile page: one dashboard per role, anonymous viewers go to /login
pub async fn profile(
    State(state): State<SharedState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response> {
    let state = state.read().await;
    let (template, page) = match state.session.viewer().profile_view() {
        ProfileView::LoginRedirect => {
            return Ok(Redirect::to(Destination::Login.path()).into_response());
        }
        ProfileView::AdminDashboard => {
            let accounts: Vec<Value> = state
                .session
                .roster()
                .accounts()
                .map(|(username, user)| context! { username => username, user => user })
                .collect();
            (
                "profile_admin.html",
                context! {
                    stats => content::ADMIN_STATS,
                    activity => content::ADMIN_ACTIVITY,
                    accounts => accounts,
                },
            )
        }
        ProfileView::CaregiverDashboard => (
            "profile_caregiver.html",
            context! {
                stats => content::CAREGIVER_STATS,
                courses => content::COURSES,
                jobs => content::JOBS,
            },
        ),
        ProfileView::CareseekerDashboard => (
            "profile_careseeker.html",
            context! { preferences => content::CARESEEKER_PREFERENCES },
        ),
    };
    let notice = query.resolve(&state);
    let html = render_page(&state, template, Destination::Profile.path(), notice, page)?;
    Ok(html.into_response())
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub tab: Option<String>,
}

/// Login and signup page
pub async fn login_page(
    State(state): State<SharedState>,
    Query(query): Query<LoginQuery>,
) -> Result<Html<String>> {
    let state = state.read().await;
    let tab = match query.tab.as_deref() {
        Some("signup") => "signup",
        _ => "login",
    };
    render_login(&state, tab, None, context! {})
}

fn render_login(
    state: &AppState,
    tab: &str,
    notice: Option<Notice>,
    form: Value,
) -> Result<Html<String>> {
    let demo: Vec<Value> = DEMO_ACCOUNTS
        .iter()
        .map(|a| {
            context! {
                label => a.role.label(),
                username => a.username,
                password => a.password,
            }
        })
        .collect();
    let signup_roles: Vec<Value> = [Role::Careseeker, Role::Caregiver]
        .iter()
        .map(|r| context! { value => r.as_str(), label => signup_role_label(*r) })
        .collect();
    let login_roles: Vec<Value> = [Role::Careseeker, Role::Caregiver, Role::Admin]
        .iter()
        .map(|r| context! { value => r.as_str(), label => login_role_label(*r) })
        .collect();

    render_page(
        state,
        "login.html",
        Destination::Login.path(),
        notice,
        context! {
            tab => tab,
            demo_accounts => demo,
            login_roles => login_roles,
            signup_roles => signup_roles,
            form => form,
        },
    )
}

fn login_role_label(role: Role) -> &'static str {
    match role {
        Role::Careseeker => "Careseeker (Family)",
        Role::Caregiver => "Caregiver",
        Role::Admin => "Admin",
    }
}

fn signup_role_label(role: Role) -> &'static str {
    match role {
        Role::Careseeker => "Find a caregiver for my family",
        Role::Caregiver => "Become a professional caregiver",
        Role::Admin => "Administer the platform",
    }
}

/// Handle the sign-in form
pub async fn login_submit(
    State(state): State<SharedState>,
    Form(form): Form<LoginRequest>,
) -> Result<Response> {
    let mut state = state.write().await;

    if state.session.login(&form) {
        let role = state
            .session
            .current()
            .map(|user| user.role)
            .ok_or_else(|| Error::Other("Session missing after login".to_string()))?;
        let target = Flash::Login.attach(landing_path(role));
        return Ok(Redirect::to(&target).into_response());
    }

    let html = render_login(
        &state,
        "login",
        Some(Notice::error("Login Failed", LOGIN_FAILED)),
        context! { username => form.username, role => form.role },
    )?;
    Ok((StatusCode::UNAUTHORIZED, html).into_response())
}

/// Handle the sign-up form
pub async fn signup_submit(
    State(state): State<SharedState>,
    Form(form): Form<SignupRequest>,
) -> Result<Response> {
    let mut state = state.write().await;
    let refill = context! {
        name => form.name.clone(),
        email => form.email.clone(),
        phone => form.phone.clone(),
        location => form.location.clone(),
        age => form.age.clone(),
        signup_role => form.role.clone(),
    };

    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(e) => {
            let notice = match e {
                Error::PasswordMismatch => Notice::error("Error", "Passwords do not match"),
                _ => Notice::error("Signup Failed", SIGNUP_FAILED),
            };
            let html = render_login(&state, "signup", Some(notice), refill)?;
            return Ok((StatusCode::BAD_REQUEST, html).into_response());
        }
    };

    state.session.signup(fields);
    let target = Flash::Signup.attach(Destination::Profile.path());
    Ok(Redirect::to(&target).into_response())
}

/// Handle the logout button
pub async fn logout_submit(State(state): State<SharedState>) -> Redirect {
    state.write().await.session.logout();
    Redirect::to(Destination::Home.path())
}

/// Catch-all page
pub async fn not_found(State(state): State<SharedState>, uri: Uri) -> Result<Response> {
    tracing::debug!("No page for {}", uri.path());
    let state = state.read().await;
    let html = render_page(
        &state,
        "not_found.html",
        uri.path(),
        None,
        context! { missing => uri.path() },
    )?;
    Ok((StatusCode::NOT_FOUND, html).into_response())
}
