use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command{
    Command::new("seqpaste")
        .version("0.1.0")
        .about("Paste together fields of records drawn in parallel from multiple sequence streams")
        .arg(
            Arg::new("sources")
                .num_args(0..)
                .value_name("FILE")
                .help("Input files, \"-\" for standard input (default: standard input)"),
        )
        .arg(
            Arg::new("identifier")
                .short('i')
                .long("identifier")
                .action(ArgAction::SetTrue)
                .conflicts_with("description")
                .help("Paste record identifiers instead of sequences"),
        )
        .arg(
            Arg::new("description")
                .short('d')
                .long("description")
                .action(ArgAction::SetTrue)
                .help("Paste record descriptions instead of sequences"),
        )
        .arg(
            Arg::new("join")
                .short('j')
                .long("join")
                .value_name("STRING")
                .help("Join pasted values with this string (\"\\t\" for a tab)"),
        )
        .arg(
            Arg::new("repeat")
                .short('r')
                .long("repeat")
                .action(ArgAction::SetTrue)
                .help("Keep repeating the last record of exhausted streams"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("NAME")
                .default_value("fasta")
                .help("Input and output sequence format"),
        )
        .arg(
            Arg::new("fastq")
                .short('q')
                .long("fastq")
                .action(ArgAction::SetTrue)
                .help("Shorthand for --format fastq"),
        )
        .arg(
            Arg::new("moltype")
                .long("moltype")
                .value_name("TYPE")
                .help("Force the molecule type of the input: dna, rna or protein"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output filename (default: standard output)"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .action(ArgAction::SetTrue)
                .help("Append a timestamped record of this invocation to the run log"),
        )
        .arg(
            Arg::new("logname")
                .long("logname")
                .value_name("FILE")
                .default_value("seqpaste.log")
                .help("Run log filename"),
        )
        .arg(
            Arg::new("comment")
                .long("comment")
                .value_name("TEXT")
                .help("Free-form comment for the run log entry"),
        )
}
