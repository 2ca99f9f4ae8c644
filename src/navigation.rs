//! Navigation surface
//!
//! One lookup table maps the current route and login state to the ordered
//! actions the header shows.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use ts_rs::TS;

use crate::data::TS_EXPORT_PATH;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    TS,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub enum Route {
    #[serde(rename = "/")]
    #[strum(to_string = "/", serialize = "")]
    Home,
    #[serde(rename = "/dashboard")]
    #[strum(to_string = "/dashboard")]
    Dashboard,
    #[serde(rename = "/fail_account")]
    #[strum(to_string = "/fail_account")]
    FailAccount,
    #[serde(rename = "/login")]
    #[strum(to_string = "/login")]
    Login,
    #[serde(rename = "/add")]
    #[strum(to_string = "/add")]
    Add,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, EnumIter, Display, AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "kebab-case")]
pub enum NavAction {
    #[strum(to_string = "Review")]
    Review,
    #[strum(to_string = "Keyword Edit")]
    KeywordEdit,
    #[strum(to_string = "Account Edit")]
    AccountEdit,
    #[strum(to_string = "Add")]
    Add,
    #[strum(to_string = "Remove")]
    Remove,
    #[strum(to_string = "Dashboard")]
    Dashboard,
    #[strum(to_string = "Fail ID")]
    FailId,
    #[strum(to_string = "Check All")]
    CheckAll,
    #[strum(to_string = "Logout")]
    Logout,
}

impl NavAction {
    /// Route the action navigates to; `None` for dialogs and logout
    pub fn target(&self) -> Option<Route> {
        match self {
            Self::Review => Some(Route::Home),
            Self::Add => Some(Route::Add),
            Self::Dashboard => Some(Route::Dashboard),
            Self::FailId => Some(Route::FailAccount),
            Self::KeywordEdit
            | Self::AccountEdit
            | Self::Remove
            | Self::CheckAll
            | Self::Logout => None,
        }
    }
}

const HEADER_ACTIONS: &[NavAction] = &[
    NavAction::Review,
    NavAction::KeywordEdit,
    NavAction::AccountEdit,
    NavAction::Add,
    NavAction::Remove,
    NavAction::Dashboard,
    NavAction::FailId,
    NavAction::Logout,
];

/// Home also offers the bulk review launcher
const HOME_ACTIONS: &[NavAction] = &[
    NavAction::Review,
    NavAction::KeywordEdit,
    NavAction::AccountEdit,
    NavAction::Add,
    NavAction::Remove,
    NavAction::Dashboard,
    NavAction::FailId,
    NavAction::CheckAll,
    NavAction::Logout,
];

const NAV_TABLE: &[(Route, &[NavAction])] = &[
    (Route::Home, HOME_ACTIONS),
    (Route::Dashboard, HEADER_ACTIONS),
    (Route::FailAccount, HEADER_ACTIONS),
    (Route::Add, HEADER_ACTIONS),
    (Route::Login, &[]),
];

/// Ordered actions visible on `route`; nothing while logged out
pub fn actions_for(route: Route, authenticated: bool) -> &'static [NavAction] {
    if !authenticated {
        return &[];
    }
    NAV_TABLE
        .iter()
        .find(|(r, _)| *r == route)
        .map(|(_, actions)| *actions)
        .unwrap_or(&[])
}

/// Serialized form of one header button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct NavItem {
    pub action: NavAction,
    pub label: String,
    pub href: Option<Route>,
}

pub fn nav_items(route: Route, authenticated: bool) -> Vec<NavItem> {
    actions_for(route, authenticated)
        .iter()
        .map(|action| NavItem {
            action: *action,
            label: action.to_string(),
            href: action.target(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_route_parses_paths() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Home);
        assert_eq!(Route::from_str("").unwrap(), Route::Home);
        assert_eq!(Route::from_str("/fail_account").unwrap(), Route::FailAccount);
        assert!(Route::from_str("/test").is_err());
    }

    #[test]
    fn test_every_route_has_a_table_entry() {
        for route in Route::iter() {
            assert!(NAV_TABLE.iter().any(|(r, _)| *r == route), "{route}");
        }
    }

    #[test]
    fn test_logged_out_sees_nothing() {
        for route in Route::iter() {
            assert!(actions_for(route, false).is_empty());
        }
    }

    #[test]
    fn test_login_route_sees_nothing() {
        assert!(actions_for(Route::Login, true).is_empty());
    }

    #[test]
    fn test_header_order() {
        let labels: Vec<String> = actions_for(Route::Dashboard, true)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            labels,
            [
                "Review",
                "Keyword Edit",
                "Account Edit",
                "Add",
                "Remove",
                "Dashboard",
                "Fail ID",
                "Logout"
            ]
        );
        assert!(actions_for(Route::Home, true).contains(&NavAction::CheckAll));
    }

    #[test]
    fn test_nav_items_carry_targets() {
        let items = nav_items(Route::Add, true);
        let fail = items.iter().find(|i| i.action == NavAction::FailId).unwrap();
        assert_eq!(fail.href, Some(Route::FailAccount));
        let value = serde_json::to_value(fail).unwrap();
        assert_eq!(value["action"], "fail-id");
        assert_eq!(value["href"], "/fail_account");
    }
}
