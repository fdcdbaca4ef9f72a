use yew::prelude::*;

use crate::board::{Flash, ListState, Surface, LOAD_FAILED};
use crate::model::{Activity, Snapshot};

pub const LOADING: &str = "Loading activities...";
pub const NO_PARTICIPANTS: &str = "No participants yet — be the first!";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// The Yew side of the board: state handles the controller writes into.
#[derive(Clone)]
pub struct PageSurface {
    list: UseStateHandle<ListState>,
    choices: UseStateHandle<Vec<String>>,
    flash: UseStateHandle<Flash>,
}

impl PageSurface {
    pub fn new(
        list: UseStateHandle<ListState>,
        choices: UseStateHandle<Vec<String>>,
        flash: UseStateHandle<Flash>,
    ) -> Self {
        Self { list, choices, flash }
    }
}

impl Surface for PageSurface {
    fn show_snapshot(&self, snapshot: Snapshot) {
        self.choices.set(snapshot.names().map(str::to_string).collect());
        self.list.set(ListState::Ready(snapshot));
    }

    fn show_load_failure(&self) {
        self.list.set(ListState::Failed);
    }

    fn flash(&self, flash: Flash) {
        self.flash.set(flash);
    }

    fn alert(&self, text: &str) {
        gloo::dialogs::alert(text);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Roster {
    Empty,
    Members(Vec<String>),
}

/// Display-ready text for one activity card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub description: String,
    pub schedule: String,
    pub availability: String,
    pub roster: Roster,
}

impl From<&Activity> for CardView {
    fn from(a: &Activity) -> Self {
        let roster = if a.participants.is_empty() {
            Roster::Empty
        } else {
            Roster::Members(a.participants.clone())
        };
        Self {
            title: a.name.clone(),
            description: a.description.clone(),
            schedule: a.schedule.clone(),
            availability: a.availability(),
            roster,
        }
    }
}

pub fn cards(snapshot: &Snapshot) -> Vec<CardView> {
    snapshot.activities.iter().map(CardView::from).collect()
}

/// `(value, label)` pairs for the activity selector, placeholder first.
pub fn select_options(choices: &[String]) -> Vec<(String, String)> {
    std::iter::once((String::new(), SELECT_PLACEHOLDER.to_string()))
        .chain(choices.iter().map(|c| (c.clone(), c.clone())))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ActivitiesListProps {
    pub state: ListState,
    /// Emits `(activity, email)` when a participant's delete button is pressed.
    pub on_unregister: Callback<(String, String)>,
}

#[function_component(ActivitiesList)]
pub fn activities_list(props: &ActivitiesListProps) -> Html {
    let body = match &props.state {
        ListState::Loading => html! { <p>{ LOADING }</p> },
        ListState::Failed => html! { <p>{ LOAD_FAILED }</p> },
        ListState::Ready(snapshot) => html! {
            <>{ for cards(snapshot).into_iter().map(|card| activity_card(card, &props.on_unregister)) }</>
        },
    };

    html! {
        <div id="activities-list">{ body }</div>
    }
}

fn activity_card(card: CardView, on_unregister: &Callback<(String, String)>) -> Html {
    let roster = match card.roster {
        Roster::Empty => html! { <p class="no-participants">{ NO_PARTICIPANTS }</p> },
        Roster::Members(members) => html! {
            <ul>
                { for members.into_iter().map(|email| participant_row(&card.title, email, on_unregister)) }
            </ul>
        },
    };

    html! {
        <div class="activity-card" key={card.title.clone()}>
            <h4>{ card.title.clone() }</h4>
            <p>{ card.description }</p>
            <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
            <p><strong>{ "Availability:" }</strong>{ format!(" {}", card.availability) }</p>
            <div class="participants">
                <h5>{ "Participants" }</h5>
                { roster }
            </div>
        </div>
    }
}

fn participant_row(activity: &str, email: String, on_unregister: &Callback<(String, String)>) -> Html {
    let onclick = {
        let activity = activity.to_string();
        let email = email.clone();
        on_unregister.reform(move |_: MouseEvent| (activity.clone(), email.clone()))
    };

    html! {
        <li>
            <span>{ email }</span>
            <button class="delete-btn" title="Unregister" {onclick}>{ "\u{1f5d1}" }</button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub choices: Vec<String>,
    pub flash: Flash,
    /// Emits `(activity, email)` on submit.
    pub on_submit: Callback<(String, String)>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let email_ref = use_node_ref();
    let activity_ref = use_node_ref();

    let onsubmit = {
        let email_ref = email_ref.clone();
        let activity_ref = activity_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email_ref
                .cast::<web_sys::HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let activity = activity_ref
                .cast::<web_sys::HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();
            on_submit.emit((activity, email));
        })
    };

    html! {
        <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <form id="signup-form" {onsubmit}>
                <div class="form-group">
                    <label for="email">{ "Student Email:" }</label>
                    <input type="email" id="email" required=true placeholder="your-email@mergington.edu" ref={email_ref} />
                </div>
                <div class="form-group">
                    <label for="activity">{ "Select Activity:" }</label>
                    <select id="activity" required=true ref={activity_ref}>
                        { for select_options(&props.choices).into_iter().map(|(value, label)| html! {
                            <option value={value}>{ label }</option>
                        }) }
                    </select>
                </div>
                <button type="submit">{ "Sign Up" }</button>
            </form>
            <div id="message" class={props.flash.class()}>{ props.flash.text().to_string() }</div>
        </section>
    }
}
