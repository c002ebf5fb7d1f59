use crate::MolType;

// The capability surface the rest of the code sees: raw header,
// sequence, optional quality, and the identifier/description split of
// the header (identifier up to the first space, description after it).
pub trait Record{
    fn head(&self) -> &[u8];
    fn seq(&self) -> &[u8];
    fn qual(&self) -> Option<&[u8]>;

    fn id(&self) -> &[u8]{
        let head = self.head();
        match head.iter().position(|&b| b == b' '){
            Some(i) => &head[..i],
            None => head,
        }
    }

    fn desc(&self) -> &[u8]{
        let head = self.head();
        match head.iter().position(|&b| b == b' '){
            Some(i) => &head[i + 1..],
            None => b"",
        }
    }
}

// Borrows the reader's internal buffers. Valid until the next read.
#[derive(Debug)]
pub struct RefRecord<'a>{
    pub head: &'a [u8],
    pub seq: &'a [u8],
    pub qual: Option<&'a [u8]>, // None for fasta
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRecord{
    pub head: Vec<u8>,
    pub seq: Vec<u8>,
    pub qual: Option<Vec<u8>>, // None for fasta
    pub moltype: Option<MolType>,
}

impl Record for RefRecord<'_>{
    fn head(&self) -> &[u8]{ self.head }
    fn seq(&self) -> &[u8]{ self.seq }
    fn qual(&self) -> Option<&[u8]>{ self.qual }
}

impl Record for OwnedRecord{
    fn head(&self) -> &[u8]{ &self.head }
    fn seq(&self) -> &[u8]{ &self.seq }
    fn qual(&self) -> Option<&[u8]>{ self.qual.as_deref() }
}

impl RefRecord<'_>{
    pub fn to_owned(&self) -> OwnedRecord{
        OwnedRecord{
            head: self.head.to_vec(),
            seq: self.seq.to_vec(),
            qual: self.qual.map(|q| q.to_vec()),
            moltype: None,
        }
    }
}

impl OwnedRecord{
    // Clone-with-alphabet-override, as a builder step.
    pub fn with_moltype(mut self, moltype: Option<MolType>) -> OwnedRecord{
        self.moltype = moltype;
        self
    }
}
