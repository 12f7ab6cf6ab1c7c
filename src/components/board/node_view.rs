use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{Element, MouseEvent};

use super::anchor::resolve_anchor;
use super::types::{NodeId, Point};

pub(super) fn client_point(ev: &MouseEvent) -> Point {
	Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn measure_port(port: NodeRef<Div>) -> Option<Point> {
	let el = port.get_untracked()?;
	let element: &Element = el.as_ref();
	Some(resolve_anchor(element))
}

/// One node on the board.
///
/// Presses on the node or its outputs never reach the board surface, so a
/// node gesture cannot also start a board pan.
#[component]
pub fn NodeView(
	id: NodeId,
	#[prop(into)] position: Signal<Point>,
	number_inputs: usize,
	number_outputs: usize,
	#[prop(into)] selected: Signal<bool>,
	on_mouse_down_node: Callback<(NodeId, Point)>,
	on_mouse_down_output: Callback<(Point, NodeId, usize)>,
	on_mouse_enter_input: Callback<(Point, NodeId, usize)>,
	on_mouse_leave_input: Callback<(NodeId, usize)>,
) -> impl IntoView {
	let node_id = id.clone();
	let on_mousedown = move |ev: MouseEvent| {
		ev.stop_propagation();
		on_mouse_down_node.run((node_id.clone(), client_point(&ev)));
	};

	let inputs = (0..number_inputs)
		.map(|index| {
			view! {
				<InputPort
					node=id.clone()
					index=index
					on_enter=on_mouse_enter_input
					on_leave=on_mouse_leave_input
				/>
			}
		})
		.collect_view();
	let outputs = (0..number_outputs)
		.map(|index| {
			view! { <OutputPort node=id.clone() index=index on_down=on_mouse_down_output /> }
		})
		.collect_view();

	view! {
		<div
			class=move || if selected.get() { "node node-selected" } else { "node" }
			data-node-id=id.to_string()
			style:transform=move || {
				let p = position.get();
				format!("translate({}px, {}px)", p.x, p.y)
			}
			on:mousedown=on_mousedown
		>
			<div class="inputs-wrapper">{inputs}</div>
			<div class="outputs-wrapper">{outputs}</div>
		</div>
	}
}

#[component]
fn InputPort(
	node: NodeId,
	index: usize,
	on_enter: Callback<(Point, NodeId, usize)>,
	on_leave: Callback<(NodeId, usize)>,
) -> impl IntoView {
	let port_ref = NodeRef::<Div>::new();
	let hovered = Arc::new(AtomicBool::new(false));

	let enter_node = node.clone();
	let enter_hovered = Arc::clone(&hovered);
	let on_mouseenter = move |_: MouseEvent| {
		let Some(anchor) = measure_port(port_ref) else {
			return;
		};
		enter_hovered.store(true, Ordering::Relaxed);
		on_enter.run((anchor, enter_node.clone(), index));
	};

	let leave_node = node.clone();
	let leave_hovered = Arc::clone(&hovered);
	let on_mouseleave = move |_: MouseEvent| {
		leave_hovered.store(false, Ordering::Relaxed);
		on_leave.run((leave_node.clone(), index));
	};

	// An input removed from under the pointer never sees mouseleave.
	on_cleanup(move || {
		if hovered.load(Ordering::Relaxed) {
			let _ = on_leave.try_run((node, index));
		}
	});

	view! {
		<div
			node_ref=port_ref
			class="input"
			on:mouseenter=on_mouseenter
			on:mouseleave=on_mouseleave
		></div>
	}
}

#[component]
fn OutputPort(node: NodeId, index: usize, on_down: Callback<(Point, NodeId, usize)>) -> impl IntoView {
	let port_ref = NodeRef::<Div>::new();
	let on_mousedown = move |ev: MouseEvent| {
		ev.stop_propagation();
		let Some(anchor) = measure_port(port_ref) else {
			return;
		};
		on_down.run((anchor, node.clone(), index));
	};

	view! { <div node_ref=port_ref class="output" on:mousedown=on_mousedown></div> }
}
