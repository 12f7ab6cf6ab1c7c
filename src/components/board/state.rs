use std::mem;

use log::{debug, warn};

use super::types::{Edge, EdgeId, Node, NodeId, Point, PortDirection, PortRef};

/// Tunables for the board transform.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
	pub min_scale: f64,
	pub max_scale: f64,
	/// Scale change per unit of wheel `deltaY`, applied with inverted sign.
	pub zoom_sensitivity: f64,
	/// Centring margin, in viewport percent per unit of scale above 1.
	pub zoom_margin: f64,
}

impl Default for BoardConfig {
	fn default() -> Self {
		Self {
			min_scale: 1.0,
			max_scale: 2.0,
			zoom_sensitivity: 0.005,
			zoom_margin: 50.0,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// Place a node uniformly inside the viewport. `sample` yields values in `[0, 1)`.
pub fn random_position(viewport: Viewport, mut sample: impl FnMut() -> f64) -> Point {
	let x = sample() * viewport.width;
	let y = sample() * viewport.height;
	Point::new(x, y)
}

/// An edge being dragged out of an output port.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingEdge {
	pub from: PortRef,
	/// Anchor of the source output when the gesture began.
	pub start: Point,
	/// Latest pointer location; the floating end of the edge.
	pub pointer: Point,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
	#[default]
	Idle,
	DraggingBoard,
	DraggingNode(NodeId),
	ConnectingEdge(PendingEdge),
}

/// CSS values for the zoomed board element.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomStyle {
	pub transform: String,
	pub margin_top: String,
	pub margin_left: String,
}

/// The board controller: node collection, transform, and gesture state.
///
/// All operations are synchronous and are expected to run inside a single
/// UI event handler. Degenerate inputs (unknown ids, out-of-range ports,
/// pointer-up without a gesture) are no-ops.
#[derive(Clone, Debug)]
pub struct BoardState {
	config: BoardConfig,
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	scale: f64,
	gesture: Gesture,
	clicked_position: Option<Point>,
	selected: Option<NodeId>,
	hovered_input: Option<(PortRef, Point)>,
	next_node: u64,
	next_edge: u64,
}

impl Default for BoardState {
	fn default() -> Self {
		Self::new(BoardConfig::default())
	}
}

impl BoardState {
	pub fn new(config: BoardConfig) -> Self {
		let scale = 1.0_f64.clamp(config.min_scale, config.max_scale);
		Self {
			config,
			nodes: Vec::new(),
			edges: Vec::new(),
			scale,
			gesture: Gesture::Idle,
			clicked_position: None,
			selected: None,
			hovered_input: None,
			next_node: 0,
			next_edge: 0,
		}
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn node_ids(&self) -> Vec<NodeId> {
		self.nodes.iter().map(|node| node.id().clone()).collect()
	}

	pub fn node(&self, id: &NodeId) -> Option<&Node> {
		self.nodes.iter().find(|node| node.id() == id)
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn scale(&self) -> f64 {
		self.scale
	}

	pub fn gesture(&self) -> &Gesture {
		&self.gesture
	}

	/// Whether the board surface itself is being dragged.
	pub fn grabbing(&self) -> bool {
		matches!(self.gesture, Gesture::DraggingBoard)
	}

	/// Screen position the current gesture last measured from, if any.
	pub fn clicked_position(&self) -> Option<Point> {
		self.clicked_position
	}

	pub fn selected(&self) -> Option<&NodeId> {
		self.selected.as_ref()
	}

	pub fn is_selected(&self, id: &NodeId) -> bool {
		self.selected.as_ref() == Some(id)
	}

	/// The toolbar's delete action is only enabled with a selection.
	pub fn can_delete(&self) -> bool {
		self.selected.is_some()
	}

	pub fn pending_edge(&self) -> Option<&PendingEdge> {
		match &self.gesture {
			Gesture::ConnectingEdge(pending) => Some(pending),
			_ => None,
		}
	}

	pub fn hovered_input(&self) -> Option<&PortRef> {
		self.hovered_input.as_ref().map(|(port, _)| port)
	}

	/// Where the loose end of a pending edge should be drawn: the hovered
	/// input's anchor when there is one, else the pointer.
	pub fn floating_endpoint(&self) -> Option<Point> {
		let pending = self.pending_edge()?;
		Some(
			self.hovered_input
				.as_ref()
				.map(|(_, anchor)| *anchor)
				.unwrap_or(pending.pointer),
		)
	}

	pub fn add_node(&mut self, number_inputs: usize, number_outputs: usize, at: Point) -> NodeId {
		let id = NodeId::from_counter(self.next_node);
		self.next_node += 1;
		self.nodes
			.push(Node::new(id.clone(), number_inputs, number_outputs, at));
		debug!("added {id} ({number_inputs} in, {number_outputs} out) at {at:?}");
		id
	}

	/// Remove the selected node and every edge touching it.
	pub fn delete_selected(&mut self) -> Option<NodeId> {
		let id = self.selected.take()?;
		let Some(idx) = self.nodes.iter().position(|node| node.id() == &id) else {
			warn!("selected node {id} is not on the board");
			return None;
		};
		self.nodes.remove(idx);

		let (dangling, kept): (Vec<Edge>, Vec<Edge>) =
			mem::take(&mut self.edges).into_iter().partition(|edge| edge.touches(&id));
		self.edges = kept;
		for edge in &dangling {
			for node in &mut self.nodes {
				node.detach_edge(&edge.id);
			}
		}

		let interrupted = match &self.gesture {
			Gesture::DraggingNode(dragged) => dragged == &id,
			Gesture::ConnectingEdge(pending) => pending.from.node == id,
			_ => false,
		};
		if interrupted {
			self.gesture = Gesture::Idle;
			self.clicked_position = None;
		}
		if self
			.hovered_input
			.as_ref()
			.is_some_and(|(port, _)| port.node == id)
		{
			self.hovered_input = None;
		}

		debug!("deleted {id} and {} edge(s)", dangling.len());
		Some(id)
	}

	/// Make `id` the only selected node.
	pub fn select(&mut self, id: &NodeId) -> bool {
		if self.node(id).is_none() {
			warn!("cannot select unknown node {id}");
			return false;
		}
		if !self.is_selected(id) {
			debug!("selected {id}");
			self.selected = Some(id.clone());
		}
		true
	}

	pub fn pointer_down_board(&mut self, at: Point) {
		if self.gesture != Gesture::Idle {
			self.pointer_up();
		}
		self.gesture = Gesture::DraggingBoard;
		self.clicked_position = Some(at);
	}

	/// Select a node and start dragging it.
	pub fn pointer_down_node(&mut self, id: &NodeId, at: Point) -> bool {
		if !self.select(id) {
			return false;
		}
		if self.gesture != Gesture::Idle {
			self.pointer_up();
		}
		if let Some(node) = self.nodes.iter_mut().find(|node| node.id() == id) {
			node.prev_position = node.curr_position;
		}
		self.gesture = Gesture::DraggingNode(id.clone());
		self.clicked_position = Some(at);
		true
	}

	/// Advance the active gesture to `at`.
	///
	/// Deltas are frame-to-frame: each call measures from the position the
	/// previous call recorded. While the board is dragged, the returned
	/// offset is how far the scroll container must scroll.
	pub fn pointer_move(&mut self, at: Point) -> Option<Point> {
		match &mut self.gesture {
			Gesture::Idle => None,
			Gesture::DraggingBoard => {
				let base = self.clicked_position.replace(at)?;
				let delta = at - base;
				Some(delta.scaled(-1.0))
			}
			Gesture::DraggingNode(id) => {
				let base = self.clicked_position.replace(at)?;
				let delta = (at - base).scaled(1.0 / self.scale);
				if let Some(node) = self.nodes.iter_mut().find(|node| node.id() == id) {
					node.curr_position = node.curr_position + delta;
				}
				None
			}
			Gesture::ConnectingEdge(pending) => {
				pending.pointer = at;
				None
			}
		}
	}

	/// Finish the active gesture. Returns the edge created by dropping a
	/// pending edge on a hovered input.
	pub fn pointer_up(&mut self) -> Option<EdgeId> {
		self.clicked_position = None;
		match mem::take(&mut self.gesture) {
			Gesture::Idle | Gesture::DraggingBoard => None,
			Gesture::DraggingNode(id) => {
				if let Some(node) = self.nodes.iter_mut().find(|node| node.id() == &id) {
					node.prev_position = node.curr_position;
				}
				None
			}
			Gesture::ConnectingEdge(pending) => match self.hovered_input.clone() {
				Some((target, _)) => self.connect(pending.from, target),
				None => {
					debug!("edge from {} cancelled", pending.from.node);
					None
				}
			},
		}
	}

	/// Abort the active gesture, rolling a node drag back to its snapshot.
	pub fn cancel_gesture(&mut self) {
		self.clicked_position = None;
		match mem::take(&mut self.gesture) {
			Gesture::DraggingNode(id) => {
				if let Some(node) = self.nodes.iter_mut().find(|node| node.id() == &id) {
					node.curr_position = node.prev_position;
				}
				debug!("drag of {id} cancelled");
			}
			Gesture::ConnectingEdge(pending) => {
				debug!("edge from {} cancelled", pending.from.node);
			}
			Gesture::Idle | Gesture::DraggingBoard => {}
		}
	}

	/// The pointer left the board: drags are committed, pending edges dropped.
	pub fn pointer_leave_board(&mut self) {
		if self.pending_edge().is_some() {
			self.cancel_gesture();
		} else {
			self.pointer_up();
		}
	}

	/// Apply a wheel event and return the clamped scale.
	pub fn wheel(&mut self, delta_y: f64) -> f64 {
		let next = self.scale + delta_y * -self.config.zoom_sensitivity;
		if !next.is_nan() {
			self.scale = next.clamp(self.config.min_scale, self.config.max_scale);
		}
		self.scale
	}

	pub fn zoom_style(&self) -> ZoomStyle {
		let margin = (self.scale - 1.0) * self.config.zoom_margin;
		ZoomStyle {
			transform: format!("scale({})", self.scale),
			margin_top: format!("{margin}vh"),
			margin_left: format!("{margin}vw"),
		}
	}

	/// Begin dragging an edge out of output `index` of `node`.
	pub fn pointer_down_output(&mut self, anchor: Point, node: &NodeId, index: usize) -> bool {
		if !self.port_exists(node, PortDirection::Output, index) {
			return false;
		}
		if self.gesture != Gesture::Idle {
			self.pointer_up();
		}
		self.gesture = Gesture::ConnectingEdge(PendingEdge {
			from: PortRef::output(node.clone(), index),
			start: anchor,
			pointer: anchor,
		});
		self.clicked_position = Some(anchor);
		true
	}

	pub fn pointer_enter_input(&mut self, anchor: Point, node: &NodeId, index: usize) -> bool {
		if !self.port_exists(node, PortDirection::Input, index) {
			return false;
		}
		self.hovered_input = Some((PortRef::input(node.clone(), index), anchor));
		true
	}

	/// Release the hover target if it is this input. Leaves for a port
	/// that is not the current target are ignored.
	pub fn pointer_leave_input(&mut self, node: &NodeId, index: usize) -> bool {
		let is_target = self
			.hovered_input
			.as_ref()
			.is_some_and(|(port, _)| &port.node == node && port.index == index);
		if is_target {
			self.hovered_input = None;
		}
		is_target
	}

	fn port_exists(&self, node: &NodeId, direction: PortDirection, index: usize) -> bool {
		match self.node(node) {
			Some(found) if found.has_port(direction, index) => true,
			Some(_) => {
				warn!("{node} has no {direction:?} port {index}");
				false
			}
			None => {
				warn!("unknown node {node}");
				false
			}
		}
	}

	fn connect(&mut self, from: PortRef, to: PortRef) -> Option<EdgeId> {
		if from.direction != PortDirection::Output || to.direction != PortDirection::Input {
			warn!("edges run from an output to an input");
			return None;
		}
		if from.node == to.node {
			warn!("refusing to connect {} to itself", from.node);
			return None;
		}
		if !self.port_exists(&from.node, PortDirection::Output, from.index)
			|| !self.port_exists(&to.node, PortDirection::Input, to.index)
		{
			return None;
		}
		if self
			.edges
			.iter()
			.any(|edge| edge.from == from && edge.to == to)
		{
			warn!("{}:{} is already connected to {}:{}", from.node, from.index, to.node, to.index);
			return None;
		}

		let id = EdgeId::from_counter(self.next_edge);
		self.next_edge += 1;
		for node in &mut self.nodes {
			if node.id() == &from.node {
				node.attach_edge(PortDirection::Output, &id);
			} else if node.id() == &to.node {
				node.attach_edge(PortDirection::Input, &id);
			}
		}
		debug!("connected {}:{} -> {}:{} as {id}", from.node, from.index, to.node, to.index);
		self.edges.push(Edge {
			id: id.clone(),
			from,
			to,
		});
		Some(id)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn board_with_nodes(count: usize) -> (BoardState, Vec<NodeId>) {
		let mut board = BoardState::new(BoardConfig::default());
		let ids = (0..count)
			.map(|i| board.add_node(2, 2, Point::new(100.0 * i as f64, 50.0)))
			.collect();
		(board, ids)
	}

	/// Drag an edge from `from`'s first output onto `to`'s first input.
	fn drag_edge(board: &mut BoardState, from: &NodeId, to: &NodeId) -> Option<EdgeId> {
		board.pointer_down_output(Point::new(10.0, 10.0), from, 0);
		board.pointer_move(Point::new(40.0, 40.0));
		board.pointer_enter_input(Point::new(80.0, 80.0), to, 0);
		board.pointer_up()
	}

	#[test]
	fn add_node_uses_fresh_ids_and_empty_edges() {
		let mut board = BoardState::new(BoardConfig::default());
		let at = random_position(
			Viewport {
				width: 800.0,
				height: 600.0,
			},
			{
				let mut samples = [0.25, 0.5].into_iter();
				move || samples.next().unwrap_or(0.0)
			},
		);
		let id = board.add_node(2, 3, at);

		let node = board.node(&id).unwrap();
		assert_eq!(node.number_inputs(), 2);
		assert_eq!(node.number_outputs(), 3);
		assert_eq!(node.curr_position(), Point::new(200.0, 300.0));
		assert_eq!(node.prev_position(), node.curr_position());
		assert!(node.input_edge_ids().is_empty());
		assert!(node.output_edge_ids().is_empty());

		let other = board.add_node(2, 3, at);
		assert_ne!(id, other);
	}

	#[test]
	fn random_position_stays_inside_viewport() {
		let viewport = Viewport {
			width: 1024.0,
			height: 768.0,
		};
		for sample in [0.0, 0.3, 0.999_999] {
			let p = random_position(viewport, || sample);
			assert!((0.0..viewport.width).contains(&p.x));
			assert!((0.0..viewport.height).contains(&p.y));
		}
	}

	#[test]
	fn ids_are_not_reused_after_delete() {
		let (mut board, ids) = board_with_nodes(1);
		board.select(&ids[0]);
		assert_eq!(board.delete_selected(), Some(ids[0].clone()));
		let next = board.add_node(0, 0, Point::default());
		assert_ne!(next, ids[0]);
	}

	#[test]
	fn wheel_scale_stays_clamped() {
		let mut board = BoardState::new(BoardConfig::default());
		assert_eq!(board.scale(), 1.0);

		assert!((board.wheel(-100.0) - 1.5).abs() < 1e-9);
		assert_eq!(board.wheel(-1_000.0), 2.0);
		assert_eq!(board.wheel(-5.0), 2.0);
		assert_eq!(board.wheel(10_000.0), 1.0);

		for delta in [-37.0, 12.5, -400.0, 3.0, 900.0, f64::NAN, -0.1, f64::INFINITY] {
			let scale = board.wheel(delta);
			assert!((1.0..=2.0).contains(&scale), "scale {scale} out of range");
		}
	}

	#[test]
	fn infinite_wheel_deltas_clamp_to_bounds() {
		let mut board = BoardState::new(BoardConfig::default());
		board.wheel(-100.0);
		assert_eq!(board.wheel(f64::INFINITY), 1.0);
		assert_eq!(board.wheel(f64::NEG_INFINITY), 2.0);
		assert_eq!(board.wheel(f64::NAN), 2.0);
	}

	#[test]
	fn zoom_style_tracks_scale() {
		let mut board = BoardState::new(BoardConfig {
			zoom_sensitivity: 0.5,
			..BoardConfig::default()
		});
		board.wheel(-1.0);
		assert_eq!(
			board.zoom_style(),
			ZoomStyle {
				transform: "scale(1.5)".into(),
				margin_top: "25vh".into(),
				margin_left: "25vw".into(),
			}
		);
	}

	#[test]
	fn board_pan_scrolls_by_inverse_frame_deltas() {
		let mut board = BoardState::new(BoardConfig::default());
		board.pointer_down_board(Point::new(100.0, 100.0));
		assert!(board.grabbing());

		let steps = [(5.0, 0.0), (-2.0, 3.0), (10.0, 10.0), (0.0, -7.0)];
		let mut pointer = Point::new(100.0, 100.0);
		let mut scrolled = Point::default();
		for (dx, dy) in steps {
			pointer = pointer + Point::new(dx, dy);
			let scroll = board.pointer_move(pointer).unwrap();
			assert_eq!(scroll, Point::new(-dx, -dy));
			scrolled = scrolled + scroll;
		}
		assert_eq!(scrolled, Point::new(-13.0, -6.0));

		board.pointer_up();
		assert!(!board.grabbing());
		assert_eq!(board.clicked_position(), None);
		assert_eq!(board.pointer_move(Point::new(500.0, 500.0)), None);

		board.pointer_down_board(Point::new(0.0, 0.0));
		assert_eq!(board.pointer_move(Point::new(1.0, 2.0)), Some(Point::new(-1.0, -2.0)));
	}

	#[test]
	fn pointer_up_without_gesture_is_noop() {
		let (mut board, _) = board_with_nodes(2);
		let before = board.nodes().to_vec();
		assert_eq!(board.pointer_up(), None);
		assert_eq!(board.gesture(), &Gesture::Idle);
		assert_eq!(board.nodes(), before.as_slice());
	}

	#[test]
	fn selecting_another_node_replaces_selection() {
		let (mut board, ids) = board_with_nodes(2);
		board.pointer_down_node(&ids[0], Point::new(0.0, 0.0));
		board.pointer_up();
		board.pointer_down_node(&ids[1], Point::new(0.0, 0.0));
		board.pointer_up();

		assert!(!board.is_selected(&ids[0]));
		assert!(board.is_selected(&ids[1]));
		let selected: Vec<_> = ids.iter().filter(|id| board.is_selected(id)).collect();
		assert_eq!(selected, vec![&ids[1]]);
	}

	#[test]
	fn node_press_does_not_grab_board() {
		let (mut board, ids) = board_with_nodes(1);
		assert!(board.pointer_down_node(&ids[0], Point::new(10.0, 10.0)));
		assert!(!board.grabbing());
		assert_eq!(board.pointer_move(Point::new(20.0, 10.0)), None);
	}

	#[test]
	fn node_drag_moves_current_and_commits_on_release() {
		let (mut board, ids) = board_with_nodes(1);
		let id = &ids[0];
		let start = board.node(id).unwrap().curr_position();

		board.pointer_down_node(id, Point::new(10.0, 10.0));
		board.pointer_move(Point::new(15.0, 12.0));
		board.pointer_move(Point::new(25.0, 22.0));

		let node = board.node(id).unwrap();
		assert_eq!(node.curr_position(), start + Point::new(15.0, 12.0));
		assert_eq!(node.prev_position(), start);

		board.pointer_up();
		let node = board.node(id).unwrap();
		assert_eq!(node.prev_position(), node.curr_position());
	}

	#[test]
	fn node_drag_is_divided_by_scale() {
		let (mut board, ids) = board_with_nodes(1);
		board.wheel(-200.0);
		assert_eq!(board.scale(), 2.0);

		let start = board.node(&ids[0]).unwrap().curr_position();
		board.pointer_down_node(&ids[0], Point::new(0.0, 0.0));
		board.pointer_move(Point::new(20.0, -10.0));
		assert_eq!(
			board.node(&ids[0]).unwrap().curr_position(),
			start + Point::new(10.0, -5.0)
		);
	}

	#[test]
	fn cancelling_node_drag_rolls_back() {
		let (mut board, ids) = board_with_nodes(1);
		let start = board.node(&ids[0]).unwrap().curr_position();
		board.pointer_down_node(&ids[0], Point::new(0.0, 0.0));
		board.pointer_move(Point::new(30.0, 30.0));
		board.cancel_gesture();

		let node = board.node(&ids[0]).unwrap();
		assert_eq!(node.curr_position(), start);
		assert_eq!(node.prev_position(), start);
		assert_eq!(board.gesture(), &Gesture::Idle);
	}

	#[test]
	fn dropping_on_input_creates_edge() {
		let (mut board, ids) = board_with_nodes(2);
		board.pointer_down_output(Point::new(10.0, 10.0), &ids[0], 1);
		assert!(!board.grabbing());
		board.pointer_move(Point::new(40.0, 40.0));
		assert_eq!(board.floating_endpoint(), Some(Point::new(40.0, 40.0)));

		board.pointer_enter_input(Point::new(80.0, 90.0), &ids[1], 0);
		assert_eq!(board.floating_endpoint(), Some(Point::new(80.0, 90.0)));

		let edge = board.pointer_up().unwrap();
		assert_eq!(
			board.edges(),
			&[Edge {
				id: edge.clone(),
				from: PortRef::output(ids[0].clone(), 1),
				to: PortRef::input(ids[1].clone(), 0),
			}]
		);
		assert_eq!(board.node(&ids[0]).unwrap().output_edge_ids(), &[edge.clone()]);
		assert_eq!(board.node(&ids[1]).unwrap().input_edge_ids(), &[edge]);
		assert_eq!(board.pending_edge(), None);
	}

	#[test]
	fn release_elsewhere_cancels_edge() {
		let (mut board, ids) = board_with_nodes(2);
		board.pointer_down_output(Point::new(10.0, 10.0), &ids[0], 0);
		board.pointer_enter_input(Point::new(80.0, 80.0), &ids[1], 0);
		assert!(board.pointer_leave_input(&ids[1], 0));
		assert_eq!(board.pointer_up(), None);
		assert!(board.edges().is_empty());
	}

	#[test]
	fn leaving_other_input_keeps_target() {
		let (mut board, ids) = board_with_nodes(2);
		board.pointer_enter_input(Point::new(80.0, 80.0), &ids[1], 1);
		assert!(!board.pointer_leave_input(&ids[1], 0));
		assert_eq!(board.hovered_input(), Some(&PortRef::input(ids[1].clone(), 1)));
	}

	#[test]
	fn self_and_duplicate_edges_are_rejected() {
		let (mut board, ids) = board_with_nodes(2);
		assert_eq!(drag_edge(&mut board, &ids[0], &ids[0]), None);
		assert!(drag_edge(&mut board, &ids[0], &ids[1]).is_some());
		assert_eq!(drag_edge(&mut board, &ids[0], &ids[1]), None);
		assert_eq!(board.edges().len(), 1);
	}

	#[test]
	fn invalid_ports_are_ignored() {
		let (mut board, ids) = board_with_nodes(1);
		assert!(!board.pointer_down_output(Point::default(), &ids[0], 2));
		assert!(!board.pointer_enter_input(Point::default(), &ids[0], 5));
		let ghost = NodeId::from_counter(99);
		assert!(!board.pointer_down_output(Point::default(), &ghost, 0));
		assert!(!board.pointer_down_node(&ghost, Point::default()));
		assert_eq!(board.gesture(), &Gesture::Idle);
		assert_eq!(board.selected(), None);
	}

	#[test]
	fn delete_without_selection_is_noop() {
		let (mut board, _) = board_with_nodes(2);
		assert!(!board.can_delete());
		assert_eq!(board.delete_selected(), None);
		assert_eq!(board.nodes().len(), 2);
	}

	#[test]
	fn delete_drops_touching_edges() {
		let (mut board, ids) = board_with_nodes(3);
		let kept = drag_edge(&mut board, &ids[0], &ids[2]).unwrap();
		drag_edge(&mut board, &ids[0], &ids[1]).unwrap();
		drag_edge(&mut board, &ids[1], &ids[2]).unwrap();

		board.select(&ids[1]);
		assert!(board.can_delete());
		assert_eq!(board.delete_selected(), Some(ids[1].clone()));

		assert_eq!(board.node_ids(), vec![ids[0].clone(), ids[2].clone()]);
		assert_eq!(board.edges().len(), 1);
		assert_eq!(board.node(&ids[0]).unwrap().output_edge_ids(), &[kept.clone()]);
		assert_eq!(board.node(&ids[2]).unwrap().input_edge_ids(), &[kept]);
		assert_eq!(board.selected(), None);
	}

	#[test]
	fn leaving_board_cancels_pending_edge_but_keeps_drag() {
		let (mut board, ids) = board_with_nodes(2);
		board.pointer_down_output(Point::default(), &ids[0], 0);
		board.pointer_enter_input(Point::default(), &ids[1], 0);
		board.pointer_leave_board();
		assert!(board.edges().is_empty());

		let start = board.node(&ids[0]).unwrap().curr_position();
		board.pointer_down_node(&ids[0], Point::new(0.0, 0.0));
		board.pointer_move(Point::new(4.0, 4.0));
		board.pointer_leave_board();
		let node = board.node(&ids[0]).unwrap();
		assert_eq!(node.curr_position(), start + Point::new(4.0, 4.0));
		assert_eq!(node.prev_position(), node.curr_position());
	}
}
