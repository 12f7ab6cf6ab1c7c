use std::num::IntErrorKind;

use leptos::prelude::*;

/// Upper bound on ports per side a node can be created with.
const MAX_PORTS: usize = 16;

fn parse_count(raw: &str) -> usize {
	match raw.trim().parse::<usize>() {
		Ok(n) => n.min(MAX_PORTS),
		Err(e) if *e.kind() == IntErrorKind::PosOverflow => MAX_PORTS,
		Err(_) => 0,
	}
}

/// Add/delete controls floating above the board.
#[component]
pub fn Toolbar(
	#[prop(into)] show_delete: Signal<bool>,
	on_click_add: Callback<(usize, usize)>,
	on_click_delete: Callback<()>,
) -> impl IntoView {
	let inputs = RwSignal::new(1_usize);
	let outputs = RwSignal::new(1_usize);

	view! {
		<div class="toolbar">
			<label>
				"Inputs"
				<input
					type="number"
					min="0"
					max=MAX_PORTS.to_string()
					prop:value=move || inputs.get().to_string()
					on:input=move |ev| inputs.set(parse_count(&event_target_value(&ev)))
				/>
			</label>
			<label>
				"Outputs"
				<input
					type="number"
					min="0"
					max=MAX_PORTS.to_string()
					prop:value=move || outputs.get().to_string()
					on:input=move |ev| outputs.set(parse_count(&event_target_value(&ev)))
				/>
			</label>
			<button
				class="toolbar-add"
				on:click=move |_| on_click_add.run((inputs.get_untracked(), outputs.get_untracked()))
			>
				"Add node"
			</button>
			<button
				class="toolbar-delete"
				disabled=move || !show_delete.get()
				on:click=move |_| on_click_delete.run(())
			>
				"Delete node"
			</button>
		</div>
	}
}
