pub mod reader;
pub mod writer;

pub use reader::read_poly;
pub use writer::write_poly;
