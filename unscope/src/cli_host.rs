use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use unscope_lib::{ConversionHost, ConvertOptions, HostError, Result};

/// Header written between the two outputs when both go to stdout.
const GLOBAL_SEPARATOR: &str = "/* ---- global ---- */";

/// Reads a file or stdin, writes to files or stdout, copies via `arboard`.
pub struct CliHost {
    input: Option<PathBuf>,
    options: ConvertOptions,
    clean_out: Option<PathBuf>,
    global_out: Option<PathBuf>,
    clipboard: Option<arboard::Clipboard>,
}

impl CliHost {
    pub fn new(
        input: Option<PathBuf>,
        options: ConvertOptions,
        clean_out: Option<PathBuf>,
        global_out: Option<PathBuf>,
    ) -> Self {
        CliHost {
            input,
            options,
            clean_out,
            global_out,
            clipboard: None,
        }
    }
}

fn write_to(path: &Option<PathBuf>, text: &str, stdout: &mut impl Write) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text).map_err(|source| HostError::Write {
            path: path.clone(),
            source,
        }),
        None => Ok(stdout.write_all(text.as_bytes())?),
    }
}

impl ConversionHost for CliHost {
    fn input(&mut self) -> Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path).map_err(|source| HostError::Read {
                path: path.clone(),
                source,
            }),
            None => Ok(io::read_to_string(io::stdin())?),
        }
    }

    fn nested(&self) -> bool {
        self.options.nested
    }

    fn keep_pseudos_and_media(&self) -> bool {
        self.options.keep_pseudos_and_media
    }

    fn set_outputs(&mut self, clean: &str, global: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write_to(&self.clean_out, clean, &mut stdout)?;
        if self.clean_out.is_none() && self.global_out.is_none() {
            writeln!(stdout, "\n{}", GLOBAL_SEPARATOR)?;
        }
        write_to(&self.global_out, global, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| HostError::Clipboard(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| HostError::Clipboard(e.to_string())),
            None => Err(HostError::Clipboard("clipboard unavailable".to_string())),
        }
    }
}
