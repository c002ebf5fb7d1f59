use std::error::Error;
use std::process;

use fastx_io::writer::DynamicFastXWriter;
use fastx_io::{FileType, MolType};

use seq_paste::cli;
use seq_paste::paste::{PasteConfig, Paster, Selector};
use seq_paste::pool::StreamPool;
use seq_paste::registry::{SourceRegistry, STDIN_TOKEN};
use seq_paste::runlog;

fn usage_error(message: &str) -> !{
    eprintln!("Error: {}", message);
    eprintln!("Run with --help for usage.");
    process::exit(2);
}

// "\t" is the only escape the join string understands.
fn unescape_join(join: &str) -> String{
    join.replace("\\t", "\t")
}

fn run() -> Result<(), Box<dyn Error>>{
    let matches = cli::build_cli().get_matches();

    // Flag validation happens before any stream opens.
    let moltype = match matches.get_one::<String>("moltype"){
        Some(name) => match name.parse::<MolType>(){
            Ok(moltype) => Some(moltype),
            Err(err) => usage_error(&err),
        },
        None => None,
    };

    let filetype = if matches.get_flag("fastq"){
        FileType::FASTQ
    } else{
        let name = matches.get_one::<String>("format").map(String::as_str).unwrap_or("fasta");
        match name.parse::<FileType>(){
            Ok(filetype) => filetype,
            Err(err) => usage_error(&err),
        }
    };

    let selector = if matches.get_flag("identifier"){
        Selector::Identifier
    } else if matches.get_flag("description"){
        Selector::Description
    } else{
        Selector::Sequence
    };

    let join = match matches.get_one::<String>("join"){
        Some(value) => unescape_join(value).into_bytes(),
        None => selector.default_join().to_vec(),
    };
    if filetype == FileType::FASTQ && selector == Selector::Sequence && !join.is_empty(){
        usage_error("pasting fastq sequences needs the empty join string: join text has no quality values");
    }

    if matches.get_flag("log"){
        let logname = matches.get_one::<String>("logname").map(String::as_str).unwrap_or("seqpaste.log");
        let comment = matches.get_one::<String>("comment").map(String::as_str);
        if let Err(err) = runlog::append(logname, comment){
            eprintln!("Warning: could not write the run log {}: {}", logname, err);
        }
    }

    let tokens: Vec<String> = match matches.get_many::<String>("sources"){
        Some(values) => values.cloned().collect(),
        None => vec![STDIN_TOKEN.to_string()],
    };

    let registry = SourceRegistry::register(&tokens);
    if registry.is_empty(){
        return Err("no sequence sources could be opened, nothing to paste".into());
    }

    let pool = StreamPool::open(registry.sources(), filetype, moltype)?;
    let mut writer = match matches.get_one::<String>("output"){
        Some(outfile) => DynamicFastXWriter::to_file(outfile, filetype)?,
        None => DynamicFastXWriter::to_stdout(filetype),
    };

    let config = PasteConfig{
        selector,
        join,
        repeat: matches.get_flag("repeat"),
        filetype,
    };
    let mut paster = Paster::new(pool, registry.positions().to_vec(), config);
    paster.run(&mut writer)?;
    writer.flush()?;

    Ok(())
}

fn main(){
    if let Err(err) = run(){
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
