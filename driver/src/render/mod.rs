pub mod svg;

pub use svg::SvgWriter;
