//! The activity board controller.
//!
//! Every flow ends in a full re-fetch of `/activities`; nothing the user does
//! is patched into the view locally. The controller talks to the page only
//! through [`Surface`], so the same flows run against the Yew page in the
//! browser and against recording fakes in tests.

use crate::api::ActivityApi;
use crate::model::Snapshot;

pub const LOAD_FAILED: &str = "Failed to load activities.";
pub const SIGNUP_OK_DEFAULT: &str = "Successfully signed up!";
pub const SIGNUP_FAILED_DEFAULT: &str = "Sign-up failed.";
pub const UNREGISTER_FAILED_DEFAULT: &str = "Failed to unregister.";
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

/// What the activities list area currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Ready(Snapshot),
    Failed,
}

/// The feedback area under the signup form. Exactly one style applies.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Flash {
    #[default]
    Hidden,
    Success(String),
    Error(String),
}

impl Flash {
    pub fn class(&self) -> &'static str {
        match self {
            Flash::Hidden => "hidden",
            Flash::Success(_) => "success",
            Flash::Error(_) => "error",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Flash::Hidden => "",
            Flash::Success(t) | Flash::Error(t) => t,
        }
    }
}

/// Rendering surface the controller drives.
pub trait Surface {
    /// Rebuild the list and the activity selector from a fresh snapshot.
    fn show_snapshot(&self, snapshot: Snapshot);
    /// Replace the list with the load failure text. The selector is left as is.
    fn show_load_failure(&self);
    fn flash(&self, flash: Flash);
    /// Blocking notice, used by the unregister buttons.
    fn alert(&self, text: &str);
}

#[derive(Debug, Clone)]
pub struct Board<A, S> {
    api: A,
    surface: S,
}

impl<A: ActivityApi, S: Surface> Board<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        Self { api, surface }
    }

    pub async fn load_activities(&self) {
        match self.api.fetch_activities().await {
            Ok(snapshot) => {
                if snapshot.is_empty() {
                    log::info!("server has no activities");
                } else {
                    log::info!("loaded {} activities", snapshot.len());
                }
                self.surface.show_snapshot(snapshot);
            }
            Err(e) => {
                log::warn!("loading activities failed: {e}");
                self.surface.show_load_failure();
            }
        }
    }

    pub async fn submit_signup(&self, activity: &str, email: &str) {
        log::debug!("signing up {email} for {activity}");
        match self.api.sign_up(activity, email).await {
            Ok(reply) if reply.ok => {
                let text = reply
                    .note
                    .message_text()
                    .unwrap_or(SIGNUP_OK_DEFAULT)
                    .to_string();
                self.surface.flash(Flash::Success(text));
                self.load_activities().await;
            }
            Ok(reply) => {
                let text = reply
                    .note
                    .detail_text()
                    .unwrap_or(SIGNUP_FAILED_DEFAULT)
                    .to_string();
                log::info!("signup rejected: {text}");
                self.surface.flash(Flash::Error(text));
            }
            Err(e) => {
                log::warn!("signup request failed: {e}");
                self.surface.flash(Flash::Error(GENERIC_ERROR.to_string()));
            }
        }
    }

    pub async fn unregister(&self, activity: &str, email: &str) {
        log::debug!("unregistering {email} from {activity}");
        match self.api.unregister(activity, email).await {
            Ok(reply) if reply.ok => self.load_activities().await,
            Ok(reply) => {
                let text = reply
                    .note
                    .detail_text()
                    .unwrap_or(UNREGISTER_FAILED_DEFAULT)
                    .to_string();
                log::info!("unregister rejected: {text}");
                self.surface.alert(&text);
            }
            Err(e) => {
                log::warn!("unregister request failed: {e}");
                self.surface.alert(GENERIC_ERROR);
            }
        }
    }
}
