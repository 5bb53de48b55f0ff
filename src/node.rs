/*!
# Node Representation

We choose `Node = u32` as vertex ids read from edge lists and circle files are small non-negative integers.
In contrast to dense graph libraries, ids do not need to be contiguous: a graph may contain the vertices `{3, 17, 42}` only.
*/

/// Vertex identifier. Any unsigned integer is valid, no ordering is implied by value.
pub type Node = u32;

/// Number of vertices / neighbors
pub type NumNodes = Node;
