pub mod file_reader;
pub mod file_writer;
pub mod write_set;

pub use file_reader::FileReader;
pub use file_writer::FileWriter;
pub use write_set::{StagedWrite, WriteSet};
