use super::record::SequenceRecord;
use std::io::{self, Write};

/// Writes records as `>{header}\n{sequence}\n\n`, the blank line separating
/// records the way every stage of the pipeline prints them.
pub struct FastaWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn write_record(&mut self, record: &SequenceRecord) -> io::Result<()> {
        writeln!(self.writer, ">{}", record.header())?;
        writeln!(self.writer, "{}", record.sequence())?;
        writeln!(self.writer)?;
        self.written += 1;
        Ok(())
    }

    pub fn write_all<'a, I>(&mut self, records: I) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a SequenceRecord>,
    {
        for record in records {
            self.write_record(record)?;
        }
        self.writer.flush()
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
