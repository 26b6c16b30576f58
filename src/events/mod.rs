pub mod anchors;
pub mod pointer;
