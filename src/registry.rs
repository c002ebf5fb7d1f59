use std::collections::HashSet;
use std::io::IsTerminal;
use std::path::Path;

pub const STDIN_TOKEN: &str = "-";

// Maps the command line source tokens to unique input streams. A token
// that appears several times gets one stream; every argument position
// keeps a reference to its stream so later expansion can walk the
// original argument order. Sources that cannot be opened are dropped
// with a warning, their argument positions map to None.
pub struct SourceRegistry{
    sources: Vec<String>,
    positions: Vec<Option<usize>>,
}

impl SourceRegistry{
    pub fn register(tokens: &[String]) -> SourceRegistry{
        let mut sources: Vec<String> = Vec::new();
        let mut positions: Vec<Option<usize>> = Vec::new();
        let mut failed: HashSet<String> = HashSet::new();

        for token in tokens{
            if let Some(idx) = sources.iter().position(|s| s == token){
                positions.push(Some(idx));
                continue;
            }
            if failed.contains(token){
                positions.push(None); // Already warned about this one
                continue;
            }
            if resolves(token){
                sources.push(token.clone());
                positions.push(Some(sources.len() - 1));
            } else{
                failed.insert(token.clone());
                positions.push(None);
            }
        }

        SourceRegistry{sources, positions}
    }

    // Unique sources in order of first appearance.
    pub fn sources(&self) -> &[String]{
        &self.sources
    }

    // One entry per argument position, referencing a stream index.
    pub fn positions(&self) -> &[Option<usize>]{
        &self.positions
    }

    pub fn is_empty(&self) -> bool{
        self.sources.is_empty()
    }
}

fn resolves(token: &str) -> bool{
    if token == STDIN_TOKEN{
        if std::io::stdin().is_terminal(){
            eprintln!("Warning: standard input requested but no data is piped in, skipping it");
            return false;
        }
        true
    } else if !Path::new(token).exists(){
        eprintln!("Warning: cannot open sequence source {}, skipping it", token);
        false
    } else{
        true
    }
}
