fn main() {
	node_board::run()
}
