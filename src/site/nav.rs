//! Role-based navigation and page variants

use serde::Serialize;

use crate::auth::models::{Role, SessionUser};

/// Who is viewing a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Admin,
    Caregiver,
    Careseeker,
}

impl Viewer {
    pub fn from_role(role: Role) -> Self {
        match role {
            Role::Admin => Viewer::Admin,
            Role::Caregiver => Viewer::Caregiver,
            Role::Careseeker => Viewer::Careseeker,
        }
    }

    pub fn from_session(user: Option<&SessionUser>) -> Self {
        user.map_or(Viewer::Anonymous, |user| Viewer::from_role(user.role))
    }

    /// Navigation destinations, in display order
    pub fn navigation(self) -> &'static [Destination] {
        use Destination::*;
        match self {
            Viewer::Anonymous => &[Home, About, Services, Learning, Jobs, Login],
            Viewer::Caregiver => &[Home, About, Services, Learning, Jobs, Profile],
            Viewer::Careseeker => &[Home, About, Services, Profile],
            Viewer::Admin => &[Home, About, Services, Learning, Jobs, AdminDashboard],
        }
    }

    /// Which variant of `/profile` this viewer gets
    pub fn profile_view(self) -> ProfileView {
        match self {
            Viewer::Anonymous => ProfileView::LoginRedirect,
            Viewer::Admin => ProfileView::AdminDashboard,
            Viewer::Caregiver => ProfileView::CaregiverDashboard,
            Viewer::Careseeker => ProfileView::CareseekerDashboard,
        }
    }

    /// Which variant of `/jobs` this viewer gets
    pub fn jobs_view(self) -> JobsView {
        match self {
            Viewer::Admin | Viewer::Caregiver => JobsView::Listing,
            Viewer::Anonymous => JobsView::LoginRequired,
            Viewer::Careseeker => JobsView::CaregiverRoleRequired,
        }
    }
}

/// Navigation for viewers without a recognized role
pub const BASE_NAVIGATION: &[Destination] =
    &[Destination::Home, Destination::About, Destination::Services];

/// Navigation looked up by role name. `None` means logged out; names that
/// are not a known role get [`BASE_NAVIGATION`].
pub fn navigation_for_role_name(role: Option<&str>) -> &'static [Destination] {
    match role {
        None => Viewer::Anonymous.navigation(),
        Some(name) => match name.parse::<Role>() {
            Ok(role) => Viewer::from_role(role).navigation(),
            Err(_) => BASE_NAVIGATION,
        },
    }
}

/// Where a freshly logged-in user lands
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Caregiver => Destination::Jobs.path(),
        Role::Admin | Role::Careseeker => Destination::Profile.path(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Home,
    About,
    Services,
    Learning,
    Jobs,
    Profile,
    AdminDashboard,
    Login,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::About => "/about",
            Destination::Services => "/services",
            Destination::Learning => "/learning",
            Destination::Jobs => "/jobs",
            Destination::Profile | Destination::AdminDashboard => "/profile",
            Destination::Login => "/login",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::About => "About",
            Destination::Services => "Services",
            Destination::Learning => "Learning",
            Destination::Jobs => "Jobs",
            Destination::Profile => "Profile",
            Destination::AdminDashboard => "Admin Dashboard",
            Destination::Login => "Login",
        }
    }
}

/// A rendered navigation entry
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Navigation links with the entry for `current_path` marked active
pub fn nav_links(destinations: &[Destination], current_path: &str) -> Vec<NavLink> {
    destinations
        .iter()
        .map(|d| NavLink {
            path: d.path(),
            label: d.label(),
            active: d.path() == current_path,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileView {
    LoginRedirect,
    AdminDashboard,
    CaregiverDashboard,
    CareseekerDashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobsView {
    Listing,
    LoginRequired,
    CaregiverRoleRequired,
}

#[cfg(test)]
mod tests {
    use super::*;
    use Destination::*;

    #[test]
    fn test_navigation_per_viewer() {
        assert_eq!(
            Viewer::Anonymous.navigation(),
            &[Home, About, Services, Learning, Jobs, Login]
        );
        assert_eq!(
            Viewer::Caregiver.navigation(),
            &[Home, About, Services, Learning, Jobs, Profile]
        );
        assert_eq!(
            Viewer::Careseeker.navigation(),
            &[Home, About, Services, Profile]
        );
        assert_eq!(
            Viewer::Admin.navigation(),
            &[Home, About, Services, Learning, Jobs, AdminDashboard]
        );
    }

    #[test]
    fn test_navigation_by_role_name() {
        assert_eq!(navigation_for_role_name(None), Viewer::Anonymous.navigation());
        assert_eq!(
            navigation_for_role_name(Some("careseeker")),
            Viewer::Careseeker.navigation()
        );
        assert_eq!(navigation_for_role_name(Some("nurse")), BASE_NAVIGATION);
        assert_eq!(navigation_for_role_name(Some("")), BASE_NAVIGATION);
    }

    #[test]
    fn test_admin_dashboard_is_the_profile_page() {
        assert_eq!(AdminDashboard.path(), Profile.path());
        assert_eq!(AdminDashboard.label(), "Admin Dashboard");
    }

    #[test]
    fn test_page_variants() {
        assert_eq!(Viewer::Anonymous.profile_view(), ProfileView::LoginRedirect);
        assert_eq!(Viewer::Admin.profile_view(), ProfileView::AdminDashboard);
        assert_eq!(Viewer::Anonymous.jobs_view(), JobsView::LoginRequired);
        assert_eq!(Viewer::Careseeker.jobs_view(), JobsView::CaregiverRoleRequired);
        assert_eq!(Viewer::Caregiver.jobs_view(), JobsView::Listing);
        assert_eq!(Viewer::Admin.jobs_view(), JobsView::Listing);
    }

    #[test]
    fn test_landing_paths() {
        assert_eq!(landing_path(Role::Admin), "/profile");
        assert_eq!(landing_path(Role::Caregiver), "/jobs");
        assert_eq!(landing_path(Role::Careseeker), "/profile");
    }

    #[test]
    fn test_nav_links_mark_active() {
        let links = nav_links(Viewer::Careseeker.navigation(), "/about");
        let active: Vec<_> = links.iter().filter(|l| l.active).map(|l| l.label).collect();
        assert_eq!(active, vec!["About"]);
    }
}
