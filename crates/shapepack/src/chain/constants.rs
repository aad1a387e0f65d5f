//! Marker bytes for chain nodes.

/// The node owns exactly one child node; descend.
pub const NODE_INNER: u8 = 0x01;
/// The node is the terminal leaf; a u32 count and the values follow.
pub const NODE_LEAF: u8 = 0x02;
