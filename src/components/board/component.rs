use std::fmt::Write as _;

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::{KeyboardEvent, MouseEvent, WheelEvent};

use super::node_view::{NodeView, client_point};
use super::state::{BoardConfig, BoardState, Gesture, Viewport, random_position};
use super::types::{NodeId, Point};
use crate::components::toolbar::Toolbar;

fn window_viewport() -> Viewport {
	let window = window();
	let extent = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Viewport {
		width: extent(window.inner_width()),
		height: extent(window.inner_height()),
	}
}

fn status_line(board: &BoardState) -> String {
	let mut line = format!(
		"{} nodes, {} edges, zoom {:.0}%",
		board.nodes().len(),
		board.edges().len(),
		board.scale() * 100.0
	);
	if let Some(id) = board.selected() {
		let _ = write!(line, " | selected {id}");
	}
	if let (Some(pending), Some(end)) = (board.pending_edge(), board.floating_endpoint()) {
		let _ = match board.hovered_input() {
			Some(port) => write!(line, " | connect to {}:{}", port.node, port.index),
			None => write!(
				line,
				" | connecting ({:.0}, {:.0}) -> ({:.0}, {:.0})",
				pending.start.x, pending.start.y, end.x, end.y
			),
		};
	}
	line
}

/// The pannable, zoomable node board.
///
/// Panning scrolls the wrapper element; zooming scales the board element
/// and offsets it by a margin so the scaled board stays centred.
#[component]
pub fn Board(#[prop(optional)] config: Option<BoardConfig>) -> impl IntoView {
	let board = RwSignal::new(BoardState::new(config.unwrap_or_default()));
	view! { <BoardView board=board /> }
}

/// Renders and drives a board whose state is owned by the caller.
#[component]
pub fn BoardView(board: RwSignal<BoardState>) -> impl IntoView {
	let wrapper_ref = NodeRef::<Div>::new();

	let grabbing = Memo::new(move |_| board.with(|b| b.grabbing()));
	let connecting = Memo::new(move |_| board.with(|b| b.pending_edge().is_some()));
	let status = Memo::new(move |_| board.with(status_line));
	let zoom = Memo::new(move |_| board.with(|b| b.zoom_style()));
	let node_ids = Memo::new(move |_| board.with(|b| b.node_ids()));
	let can_delete = Signal::derive(move || board.with(|b| b.can_delete()));

	let keydown = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
		if ev.key() == "Escape" {
			board.update(|b| b.cancel_gesture());
		}
	});
	// Releases over the toolbar or outside the board still end the gesture.
	let mouseup = window_event_listener(ev::mouseup, move |_: MouseEvent| {
		board.update(|b| {
			if let Some(edge) = b.pointer_up() {
				debug!("edge {edge} created");
			}
		});
	});
	on_cleanup(move || {
		keydown.remove();
		mouseup.remove();
	});

	let on_click_add = Callback::new(move |(inputs, outputs): (usize, usize)| {
		let at = random_position(window_viewport(), js_sys::Math::random);
		board.update(|b| {
			b.add_node(inputs, outputs, at);
		});
	});
	let on_click_delete = Callback::new(move |()| {
		board.update(|b| {
			b.delete_selected();
		});
	});

	let on_mouse_down_node = Callback::new(move |(id, at): (NodeId, Point)| {
		board.update(|b| {
			b.pointer_down_node(&id, at);
		});
	});
	let on_mouse_down_output = Callback::new(move |(anchor, id, index): (Point, NodeId, usize)| {
		board.update(|b| {
			b.pointer_down_output(anchor, &id, index);
		});
	});
	let on_mouse_enter_input = Callback::new(move |(anchor, id, index): (Point, NodeId, usize)| {
		board.update(|b| {
			b.pointer_enter_input(anchor, &id, index);
		});
	});
	let on_mouse_leave_input = Callback::new(move |(id, index): (NodeId, usize)| {
		board.maybe_update(|b| b.pointer_leave_input(&id, index));
	});

	let on_mousedown = move |ev: MouseEvent| {
		board.update(|b| b.pointer_down_board(client_point(&ev)));
	};

	let on_mousemove = move |ev: MouseEvent| {
		let at = client_point(&ev);
		let mut scroll = None;
		board.maybe_update(|b| {
			if b.gesture() == &Gesture::Idle {
				return false;
			}
			scroll = b.pointer_move(at);
			!b.grabbing()
		});
		let (Some(offset), Some(wrapper)) = (scroll, wrapper_ref.get_untracked()) else {
			return;
		};
		wrapper.scroll_by_with_x_and_y(offset.x, offset.y);
	};

	let on_mouseleave = move |_: MouseEvent| {
		board.update(|b| b.pointer_leave_board());
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		board.update(|b| {
			b.wheel(ev.delta_y());
		});
	};

	info!("board mounted");

	view! {
		<div id="boardWrapper" class="board-wrapper" node_ref=wrapper_ref on:mouseleave=on_mouseleave>
			<Toolbar show_delete=can_delete on_click_add=on_click_add on_click_delete=on_click_delete />
			<div class="board-status">{move || status.get()}</div>
			<div
				id="board"
				class="board"
				class:board-dragging=move || grabbing.get()
				class:board-connecting=move || connecting.get()
				style:transform=move || zoom.get().transform
				style:margin-top=move || zoom.get().margin_top
				style:margin-left=move || zoom.get().margin_left
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:wheel=on_wheel
			>
				<For
					each=move || node_ids.get()
					key=|id| id.clone()
					children=move |id: NodeId| {
						let ports = board
							.with_untracked(|b| {
								b.node(&id).map(|n| (n.number_inputs(), n.number_outputs()))
							});
						ports
							.map(|(number_inputs, number_outputs)| {
								let position = Memo::new({
									let id = id.clone();
									move |_| {
										board
											.with(|b| {
												b.node(&id).map(|n| n.curr_position()).unwrap_or_default()
											})
									}
								});
								let selected = Memo::new({
									let id = id.clone();
									move |_| board.with(|b| b.is_selected(&id))
								});
								view! {
									<NodeView
										id=id.clone()
										position=position
										number_inputs=number_inputs
										number_outputs=number_outputs
										selected=selected
										on_mouse_down_node=on_mouse_down_node
										on_mouse_down_output=on_mouse_down_output
										on_mouse_enter_input=on_mouse_enter_input
										on_mouse_leave_input=on_mouse_leave_input
									/>
								}
							})
					}
				/>
			</div>
		</div>
	}
}
