use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::record::{Record, RefRecord};
use crate::FileType;

// Takes the record fields as slices so the writer can sit behind a Box.
pub trait SeqRecordWriter{
    fn write_fields(&mut self, head: &[u8], seq: &[u8], qual: Option<&[u8]>) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

// Writer with the output stream as a generic parameter. Buffering is
// handled internally.
pub struct FastXWriter<W: Write>{
    pub filetype: FileType,
    pub output: BufWriter<W>,
}

impl<W: Write> FastXWriter<W>{
    pub fn new(output: W, filetype: FileType) -> FastXWriter<W>{
        FastXWriter{
            filetype,
            output: BufWriter::new(output),
        }
    }

    pub fn write<Rec: Record>(&mut self, rec: &Rec) -> io::Result<()>{
        match self.filetype{
            FileType::FASTA => {
                self.output.write_all(b">")?;
                self.output.write_all(rec.head())?;
                self.output.write_all(b"\n")?;
                self.output.write_all(rec.seq())?;
                self.output.write_all(b"\n")?;
            }
            FileType::FASTQ => {
                let qual = rec.qual().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "fastq output requires quality values")
                })?;
                self.output.write_all(b"@")?;
                self.output.write_all(rec.head())?;
                self.output.write_all(b"\n")?;
                self.output.write_all(rec.seq())?;
                self.output.write_all(b"\n+\n")?;
                self.output.write_all(qual)?;
                self.output.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()>{
        self.output.flush()
    }
}

impl<W: Write> SeqRecordWriter for FastXWriter<W>{
    fn write_fields(&mut self, head: &[u8], seq: &[u8], qual: Option<&[u8]>) -> io::Result<()>{
        let rec = RefRecord{head, seq, qual};
        self.write(&rec)
    }

    fn flush(&mut self) -> io::Result<()>{
        self.output.flush()
    }
}

// Writer with the output stream behind a trait object.
pub struct DynamicFastXWriter{
    stream: Box<dyn SeqRecordWriter>,
}

impl DynamicFastXWriter{
    pub fn to_stream<W: Write + 'static>(stream: W, filetype: FileType) -> DynamicFastXWriter{
        DynamicFastXWriter{
            stream: Box::new(FastXWriter::new(stream, filetype)),
        }
    }

    // Gzip compression is recognized from the .gz suffix.
    pub fn to_file(filename: &str, filetype: FileType) -> io::Result<DynamicFastXWriter>{
        let output = File::create(filename)?;
        if filename.ends_with(".gz"){
            Ok(Self::to_stream(GzEncoder::new(output, Compression::fast()), filetype))
        } else{
            Ok(Self::to_stream(output, filetype))
        }
    }

    pub fn to_stdout(filetype: FileType) -> DynamicFastXWriter{
        Self::to_stream(io::stdout(), filetype)
    }

    pub fn write<Rec: Record>(&mut self, rec: &Rec) -> io::Result<()>{
        self.stream.write_fields(rec.head(), rec.seq(), rec.qual())
    }

    pub fn flush(&mut self) -> io::Result<()>{
        self.stream.flush()
    }
}
