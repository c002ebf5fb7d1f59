use std::io;

use fastx_io::reader::DynamicFastXReader;
use fastx_io::record::OwnedRecord;
use fastx_io::{FileType, MolType};

use crate::registry::STDIN_TOKEN;

struct Stream{
    reader: DynamicFastXReader,
    exhausted: bool,
}

// One open reader per registered source, all bound to the same declared
// format and forced molecule type. Pulling past the end of a stream
// keeps signaling end-of-stream instead of touching the reader again.
pub struct StreamPool{
    streams: Vec<Stream>,
}

impl StreamPool{
    pub fn open(sources: &[String], filetype: FileType, moltype: Option<MolType>) -> io::Result<StreamPool>{
        let mut streams = Vec::with_capacity(sources.len());
        for source in sources{
            let reader = if source == STDIN_TOKEN{
                DynamicFastXReader::from_stdin(filetype, moltype)
            } else{
                DynamicFastXReader::from_file(source, filetype, moltype)?
            };
            streams.push(Stream{reader, exhausted: false});
        }
        Ok(StreamPool{streams})
    }

    pub fn from_readers(readers: Vec<DynamicFastXReader>) -> StreamPool{
        let streams = readers
            .into_iter()
            .map(|reader| Stream{reader, exhausted: false})
            .collect();
        StreamPool{streams}
    }

    pub fn len(&self) -> usize{
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool{
        self.streams.is_empty()
    }

    pub fn pull(&mut self, i: usize) -> io::Result<Option<OwnedRecord>>{
        let stream = &mut self.streams[i];
        if stream.exhausted{
            return Ok(None);
        }
        match stream.reader.read_next_owned()?{
            Some(rec) => Ok(Some(rec)),
            None => {
                stream.exhausted = true;
                Ok(None)
            }
        }
    }
}
