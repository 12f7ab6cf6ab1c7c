//! An interactive node board: nodes with input and output ports placed on a
//! canvas that pans by dragging and zooms with the wheel.
//!
//! [`run`] is the browser entry point; [`App`] can also be mounted by hand.

use leptos::prelude::*;
use leptos_meta::{Html, Meta, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use log::{Level, info};

mod components;
mod pages;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Install the console logger at `level` and the panic hook.
pub fn init_logging(level: Level) {
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!("node board logging at {level}");
}

/// Set up logging and mount [`App`] on the document body.
pub fn run() {
	init_logging(Level::Debug);
	leptos::mount::mount_to_body(App)
}

/// The board app: document metadata plus a router with the board at `/`
/// and a not-found page for everything else.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Node Board" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta
			name="description"
			content="Place nodes, drag them around, and connect outputs to inputs."
		/>

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
