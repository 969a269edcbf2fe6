//! Rasterization of spans, lines, circles, ellipses and the composite shapes built from them.

pub mod circle;
pub mod ellipse;
pub mod line;
pub mod policy;
pub mod shapes;
pub mod span;
