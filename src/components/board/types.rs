use std::fmt;
use std::ops::{Add, Sub};

/// A 2D coordinate, either in screen space (client pixels) or board space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn scaled(self, factor: f64) -> Self {
		Self::new(self.x * factor, self.y * factor)
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
	pub(crate) fn from_counter(n: u64) -> Self {
		Self(format!("node_{n}"))
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(String);

impl EdgeId {
	pub(crate) fn from_counter(n: u64) -> Self {
		Self(format!("edge_{n}"))
	}
}

impl fmt::Display for EdgeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PortDirection {
	Input,
	Output,
}

/// A port is addressed by its node, its side, and its zero-based render index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PortRef {
	pub node: NodeId,
	pub direction: PortDirection,
	pub index: usize,
}

impl PortRef {
	pub fn input(node: NodeId, index: usize) -> Self {
		Self {
			node,
			direction: PortDirection::Input,
			index,
		}
	}

	pub fn output(node: NodeId, index: usize) -> Self {
		Self {
			node,
			direction: PortDirection::Output,
			index,
		}
	}
}

/// One placed node.
///
/// Port counts are fixed at creation. `prev_position` is the snapshot taken
/// when a drag starts and equals `curr_position` whenever no drag is active.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	id: NodeId,
	number_inputs: usize,
	number_outputs: usize,
	pub(crate) prev_position: Point,
	pub(crate) curr_position: Point,
	pub(crate) input_edge_ids: Vec<EdgeId>,
	pub(crate) output_edge_ids: Vec<EdgeId>,
}

impl Node {
	pub(crate) fn new(id: NodeId, number_inputs: usize, number_outputs: usize, at: Point) -> Self {
		Self {
			id,
			number_inputs,
			number_outputs,
			prev_position: at,
			curr_position: at,
			input_edge_ids: Vec::new(),
			output_edge_ids: Vec::new(),
		}
	}

	pub fn id(&self) -> &NodeId {
		&self.id
	}

	pub fn number_inputs(&self) -> usize {
		self.number_inputs
	}

	pub fn number_outputs(&self) -> usize {
		self.number_outputs
	}

	pub fn curr_position(&self) -> Point {
		self.curr_position
	}

	pub fn prev_position(&self) -> Point {
		self.prev_position
	}

	pub fn input_edge_ids(&self) -> &[EdgeId] {
		&self.input_edge_ids
	}

	pub fn output_edge_ids(&self) -> &[EdgeId] {
		&self.output_edge_ids
	}

	pub fn has_port(&self, direction: PortDirection, index: usize) -> bool {
		match direction {
			PortDirection::Input => index < self.number_inputs,
			PortDirection::Output => index < self.number_outputs,
		}
	}

	pub(crate) fn attach_edge(&mut self, direction: PortDirection, edge: &EdgeId) {
		let ids = match direction {
			PortDirection::Input => &mut self.input_edge_ids,
			PortDirection::Output => &mut self.output_edge_ids,
		};
		if !ids.contains(edge) {
			ids.push(edge.clone());
		}
	}

	pub(crate) fn detach_edge(&mut self, edge: &EdgeId) {
		self.input_edge_ids.retain(|id| id != edge);
		self.output_edge_ids.retain(|id| id != edge);
	}
}

/// A completed connection from an output port to an input port.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub id: EdgeId,
	pub from: PortRef,
	pub to: PortRef,
}

impl Edge {
	pub fn touches(&self, node: &NodeId) -> bool {
		&self.from.node == node || &self.to.node == node
	}
}
