use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};

use flate2::read::GzDecoder;

use crate::record::{OwnedRecord, RefRecord};
use crate::{FileType, MolType};

fn bad_data(message: String) -> io::Error{
    io::Error::new(io::ErrorKind::InvalidData, message)
}

fn trim_eol(line: &mut Vec<u8>){
    while matches!(line.last(), Some(b'\n') | Some(b'\r')){
        line.pop();
    }
}

// Line-oriented fastx parser over any buffered stream. The format is
// bound at construction, not sniffed from the data.
pub struct FastXReader<R: BufRead>{
    pub filetype: FileType,
    input: R,
    head_buf: Vec<u8>,
    seq_buf: Vec<u8>,
    plus_buf: Vec<u8>,
    qual_buf: Vec<u8>,
    peek_buf: Vec<u8>, // Header of the next fasta record, found while scanning sequence lines
}

impl<R: BufRead> FastXReader<R>{
    pub fn new(input: R, filetype: FileType) -> FastXReader<R>{
        FastXReader{
            filetype,
            input,
            head_buf: Vec::new(),
            seq_buf: Vec::new(),
            plus_buf: Vec::new(),
            qual_buf: Vec::new(),
            peek_buf: Vec::new(),
        }
    }

    pub fn read_next(&mut self) -> io::Result<Option<RefRecord<'_>>>{
        match self.filetype{
            FileType::FASTQ => self.read_next_fastq(),
            FileType::FASTA => self.read_next_fasta(),
        }
    }

    fn read_next_fastq(&mut self) -> io::Result<Option<RefRecord<'_>>>{
        self.head_buf.clear();
        self.seq_buf.clear();
        self.plus_buf.clear();
        self.qual_buf.clear();

        if self.input.read_until(b'\n', &mut self.head_buf)? == 0{
            return Ok(None); // End of stream
        }
        trim_eol(&mut self.head_buf);
        if self.head_buf.first() != Some(&b'@'){
            return Err(bad_data("fastq header does not start with '@'".to_string()));
        }

        if self.input.read_until(b'\n', &mut self.seq_buf)? == 0{
            return Err(bad_data("fastq record is missing its sequence line".to_string()));
        }
        trim_eol(&mut self.seq_buf);

        if self.input.read_until(b'\n', &mut self.plus_buf)? == 0{
            return Err(bad_data("fastq record is missing its '+' line".to_string()));
        }

        if self.input.read_until(b'\n', &mut self.qual_buf)? == 0{
            return Err(bad_data("fastq record is missing its quality line".to_string()));
        }
        trim_eol(&mut self.qual_buf);
        if self.qual_buf.len() != self.seq_buf.len(){
            return Err(bad_data(format!(
                "fastq quality line length {} does not match sequence length {}",
                self.qual_buf.len(),
                self.seq_buf.len()
            )));
        }

        Ok(Some(RefRecord{
            head: &self.head_buf[1..],
            seq: &self.seq_buf,
            qual: Some(&self.qual_buf),
        }))
    }

    fn read_next_fasta(&mut self) -> io::Result<Option<RefRecord<'_>>>{
        self.head_buf.clear();
        self.seq_buf.clear();

        if self.peek_buf.is_empty(){
            if self.input.read_until(b'\n', &mut self.head_buf)? == 0{
                return Ok(None); // End of stream
            }
        } else{
            // The previous call already read this record's header
            self.head_buf.append(&mut self.peek_buf);
        }
        trim_eol(&mut self.head_buf);
        if self.head_buf.first() != Some(&b'>'){
            return Err(bad_data("fasta header does not start with '>'".to_string()));
        }

        // Sequence lines continue until the next header or end of stream
        loop{
            if self.input.read_until(b'\n', &mut self.peek_buf)? == 0{
                break;
            }
            if self.peek_buf.first() == Some(&b'>'){
                break; // Stash the next header for the next call
            }
            trim_eol(&mut self.peek_buf);
            self.seq_buf.append(&mut self.peek_buf); // Also clears peek_buf
        }

        Ok(Some(RefRecord{
            head: &self.head_buf[1..],
            seq: &self.seq_buf,
            qual: None,
        }))
    }
}

// Reader with the input stream behind a trait object, so streams of
// different concrete types (file, gzip file, stdin) can share a type.
pub struct DynamicFastXReader{
    stream: FastXReader<Box<dyn BufRead>>,
    moltype: Option<MolType>,
}

impl DynamicFastXReader{
    pub fn from_stream<R: BufRead + 'static>(input: R, filetype: FileType) -> DynamicFastXReader{
        DynamicFastXReader{
            stream: FastXReader::new(Box::new(input) as Box<dyn BufRead>, filetype),
            moltype: None,
        }
    }

    // Gzip compression is recognized from the .gz suffix.
    pub fn from_file(filename: &str, filetype: FileType, moltype: Option<MolType>) -> io::Result<DynamicFastXReader>{
        let file = File::open(filename)?;
        let mut reader = if filename.ends_with(".gz"){
            Self::from_stream(BufReader::new(GzDecoder::new(file)), filetype)
        } else{
            Self::from_stream(BufReader::new(file), filetype)
        };
        reader.moltype = moltype;
        Ok(reader)
    }

    pub fn from_stdin(filetype: FileType, moltype: Option<MolType>) -> DynamicFastXReader{
        let mut reader = Self::from_stream(BufReader::new(io::stdin()), filetype);
        reader.moltype = moltype;
        reader
    }

    // Next record as an owned value, stamped with the forced molecule type.
    pub fn read_next_owned(&mut self) -> io::Result<Option<OwnedRecord>>{
        let moltype = self.moltype;
        match self.stream.read_next()?{
            Some(rec) => Ok(Some(rec.to_owned().with_moltype(moltype))),
            None => Ok(None),
        }
    }
}
