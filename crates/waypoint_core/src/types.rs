pub type NodeId = usize;
