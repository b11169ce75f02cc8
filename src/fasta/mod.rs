mod reader;
mod record;
mod writer;

pub use reader::SequenceRecordReader;
pub use record::SequenceRecord;
pub use writer::FastaWriter;
