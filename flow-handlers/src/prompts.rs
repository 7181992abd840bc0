//! Static prompt and text assets, loaded once at startup and immutable after.

use std::fs;
use std::path::{Path, PathBuf};

use cazuela_core::Result;

/// Startup-loaded assets: the options menu text, the two system prompts, and
/// the menu document sent by the menu dialogue.
#[derive(Debug, Clone)]
pub struct Prompts {
    pub options_menu: String,
    pub consult_system: String,
    pub order_system: String,
    pub menu_document: PathBuf,
}

impl Prompts {
    /// Reads the text assets from the messages directory.
    pub fn load(messages_dir: &Path, menu_document: PathBuf) -> Result<Self> {
        Ok(Self {
            options_menu: read(messages_dir, "opciones.txt")?,
            consult_system: read(messages_dir, "prompt_consultas.txt")?,
            order_system: read(messages_dir, "prompt_pedidos.txt")?,
            menu_document,
        })
    }
}

fn read(dir: &Path, name: &str) -> Result<String> {
    Ok(fs::read_to_string(dir.join(name))?)
}
