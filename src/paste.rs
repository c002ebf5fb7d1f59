use std::io;

use fastx_io::record::{OwnedRecord, Record};
use fastx_io::writer::DynamicFastXWriter;
use fastx_io::FileType;

use crate::pool::StreamPool;

// The field that gets concatenated across sources. The other fields of
// the output record come from the recipient.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Selector{
    Sequence,
    Identifier,
    Description,
}

impl Selector{
    pub fn default_join(&self) -> &'static [u8]{
        match self{
            Selector::Description => b" ",
            _ => b"",
        }
    }

    fn extract<'a>(&self, rec: &'a OwnedRecord) -> &'a [u8]{
        match self{
            Selector::Sequence => rec.seq(),
            Selector::Identifier => rec.id(),
            Selector::Description => rec.desc(),
        }
    }
}

pub struct PasteConfig{
    pub selector: Selector,
    pub join: Vec<u8>,
    pub repeat: bool,
    pub filetype: FileType,
}

pub struct Paster{
    pool: StreamPool,
    positions: Vec<Option<usize>>, // Argument position -> stream index, None for dropped sources
    config: PasteConfig,
    cache: Vec<Option<OwnedRecord>>, // Last fresh record per stream, maintained in repeat mode only
}

impl Paster{
    pub fn new(pool: StreamPool, positions: Vec<Option<usize>>, config: PasteConfig) -> Paster{
        let cache = (0..pool.len()).map(|_| None).collect();
        Paster{pool, positions, config, cache}
    }

    pub fn run(&mut self, out: &mut DynamicFastXWriter) -> io::Result<u64>{
        let mut rounds = 0u64;
        while let Some(rec) = self.next_round()?{
            out.write(&rec)?;
            rounds += 1;
        }
        Ok(rounds)
    }

    // One synchronized pull over every stream. Returns the combined
    // record, or None when no stream had anything fresh left.
    fn next_round(&mut self) -> io::Result<Option<OwnedRecord>>{
        let n = self.pool.len();
        let mut current: Vec<Option<OwnedRecord>> = Vec::with_capacity(n);
        let mut fresh = vec![false; n];

        for i in 0..n{
            match self.pool.pull(i)?{
                Some(rec) => {
                    fresh[i] = true;
                    if self.config.repeat{
                        self.cache[i] = Some(rec.clone());
                    }
                    current.push(Some(rec));
                }
                None if self.config.repeat => current.push(self.cache[i].clone()),
                None => current.push(None),
            }
        }

        // The recipient is the lowest-indexed stream with a fresh read
        // this round. Records substituted from the repeat cache never
        // qualify, so an all-repeat round ends the run here.
        let recipient = match (0..n).find(|&i| fresh[i]).and_then(|i| current[i].as_ref()){
            Some(rec) => rec,
            None => return Ok(None),
        };

        let paste_quality =
            self.config.filetype == FileType::FASTQ && self.config.selector == Selector::Sequence;

        // Walk the original argument positions, not the deduplicated
        // stream list: a source named twice contributes twice.
        let mut parts: Vec<&[u8]> = Vec::new();
        let mut quality: Vec<u8> = Vec::new();
        for pos in &self.positions{
            let rec = match pos{
                Some(i) => match &current[*i]{
                    Some(rec) => rec,
                    None => continue, // Exhausted without repeat
                },
                None => continue, // Dropped at registration
            };
            parts.push(self.config.selector.extract(rec));
            if paste_quality{
                if let Some(q) = rec.qual(){
                    quality.extend_from_slice(q);
                }
            }
        }
        let joined = parts.join(&self.config.join[..]);

        Ok(Some(self.assemble(recipient, joined, quality, paste_quality)))
    }

    // The recipient supplies everything except the pasted field.
    fn assemble(&self, recipient: &OwnedRecord, joined: Vec<u8>, quality: Vec<u8>, paste_quality: bool) -> OwnedRecord{
        match self.config.selector{
            Selector::Sequence => OwnedRecord{
                head: recipient.head.clone(),
                seq: joined,
                qual: if paste_quality{ Some(quality) } else { recipient.qual.clone() },
                moltype: recipient.moltype,
            },
            Selector::Identifier => OwnedRecord{
                head: make_head(&joined, recipient.desc()),
                seq: recipient.seq.clone(),
                qual: recipient.qual.clone(),
                moltype: recipient.moltype,
            },
            Selector::Description => OwnedRecord{
                head: make_head(recipient.id(), &joined),
                seq: recipient.seq.clone(),
                qual: recipient.qual.clone(),
                moltype: recipient.moltype,
            },
        }
    }
}

fn make_head(id: &[u8], desc: &[u8]) -> Vec<u8>{
    let mut head = id.to_vec();
    if !desc.is_empty(){
        head.push(b' ');
        head.extend_from_slice(desc);
    }
    head
}
