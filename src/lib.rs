use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod frontend;
pub mod semantic;
pub mod utils;

pub use utils::{config, errors};

pub struct LineNumber {
    pub line: usize,
}

impl Default for LineNumber {
    fn default() -> Self {
        Self { line: 1 }
    }
}

use crate::errors::{PasError, PasResult};

pub fn read(path: &Path) -> PasResult<String> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config::source::EXTENSIONS.contains(&ext));
    if !accepted {
        return Err(PasError::FileReadError(format!(
            "File must have one of the extensions: {}",
            config::source::EXTENSIONS.join(", ")
        )));
    }
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
