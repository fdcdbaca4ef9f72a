mod api;
mod board;
mod config;
mod error;
mod model;
mod view;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpApi;
use crate::board::{Board, Flash, ListState};
use crate::config::BoardConfig;
use crate::view::{ActivitiesList, PageSurface, SignupForm};

#[function_component(App)]
fn app() -> Html {
    let list = use_state(ListState::default);
    let choices = use_state(Vec::<String>::new);
    let flash = use_state(Flash::default);

    // Built once; the captured state handles keep dispatching to this component.
    let board = {
        let surface = PageSurface::new(list.clone(), choices.clone(), flash.clone());
        use_memo((), move |_| {
            Board::new(HttpApi::new(BoardConfig::from_build_env()), surface)
        })
    };

    // First load when the page mounts
    {
        let board = board.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { board.load_activities().await });
            || ()
        });
    }

    let on_submit = {
        let board = board.clone();
        Callback::from(move |(activity, email): (String, String)| {
            let board = board.clone();
            spawn_local(async move { board.submit_signup(&activity, &email).await });
        })
    };

    let on_unregister = {
        let board = board.clone();
        Callback::from(move |(activity, email): (String, String)| {
            let board = board.clone();
            spawn_local(async move { board.unregister(&activity, &email).await });
        })
    };

    html! {
        <>
            <header>
                <h1>{ "Mergington High School" }</h1>
                <h2>{ "Extracurricular Activities" }</h2>
            </header>
            <main>
                <section id="activities-container">
                    <h3>{ "Available Activities" }</h3>
                    <ActivitiesList state={(*list).clone()} {on_unregister} />
                </section>
                <SignupForm choices={(*choices).clone()} flash={(*flash).clone()} {on_submit} />
            </main>
        </>
    }
}

/// One-time page setup: panic hook, console logger, then mount the app.
fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("activity board starting");
    yew::Renderer::<App>::new().render();
}

fn main() {
    init();
}
