use std::str::FromStr;

pub mod reader;
pub mod record;
pub mod writer;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FileType{
    FASTA,
    FASTQ,
}

impl FromStr for FileType{
    type Err = String;

    fn from_str(name: &str) -> Result<FileType, String>{
        match name.to_ascii_lowercase().as_str(){
            "fasta" => Ok(FileType::FASTA),
            "fastq" => Ok(FileType::FASTQ),
            _ => Err(format!("unsupported sequence format: {} (expected fasta or fastq)", name)),
        }
    }
}

// Molecule type forced on the reader with --moltype. The formats carry
// no alphabet of their own, so this is metadata stamped on the records.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MolType{
    Dna,
    Rna,
    Protein,
}

impl FromStr for MolType{
    type Err = String;

    fn from_str(name: &str) -> Result<MolType, String>{
        match name.to_ascii_lowercase().as_str(){
            "dna" => Ok(MolType::Dna),
            "rna" => Ok(MolType::Rna),
            "protein" => Ok(MolType::Protein),
            _ => Err(format!("unknown molecule type: {} (expected dna, rna or protein)", name)),
        }
    }
}
