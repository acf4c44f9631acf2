//! The boundary between the converter and whatever drives it.
//!
//! A host supplies the stylesheet and the mode, receives the two outputs,
//! and owns the clipboard. Nothing in here touches a terminal or a file.

use crate::convert::{convert, Conversion, ConvertOptions};
use crate::error::Result;
use log::{info, warn};

pub trait ConversionHost {
    /// The raw stylesheet to convert.
    fn input(&mut self) -> Result<String>;

    /// Whether nested SCSS was requested.
    fn nested(&self) -> bool;

    /// Flat mode only.
    fn keep_pseudos_and_media(&self) -> bool {
        false
    }

    fn set_outputs(&mut self, clean: &str, global: &str) -> Result<()>;

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;
}

/// Read the input from `host`, convert it and hand both outputs back.
pub fn run<H: ConversionHost + ?Sized>(host: &mut H) -> Result<Conversion> {
    let input = host.input()?;
    let options = ConvertOptions {
        nested: host.nested(),
        keep_pseudos_and_media: host.keep_pseudos_and_media(),
    };
    let conversion = convert(&input, &options);
    host.set_outputs(&conversion.clean, &conversion.global)?;
    Ok(conversion)
}

/// Copy `text` through the host. A failure is logged, never propagated.
pub fn copy_output<H: ConversionHost + ?Sized>(host: &mut H, text: &str) -> bool {
    match host.copy_to_clipboard(text) {
        Ok(()) => {
            info!("copied {} bytes to the clipboard", text.len());
            true
        }
        Err(err) => {
            warn!("copy failed: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostError;

    #[derive(Default)]
    struct MemoryHost {
        input: String,
        nested: bool,
        outputs: Option<(String, String)>,
        clipboard: Option<String>,
        clipboard_broken: bool,
    }

    impl ConversionHost for MemoryHost {
        fn input(&mut self) -> Result<String> {
            Ok(self.input.clone())
        }

        fn nested(&self) -> bool {
            self.nested
        }

        fn set_outputs(&mut self, clean: &str, global: &str) -> Result<()> {
            self.outputs = Some((clean.to_string(), global.to_string()));
            Ok(())
        }

        fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
            if self.clipboard_broken {
                return Err(HostError::Clipboard("no display".to_string()));
            }
            self.clipboard = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_run_hands_outputs_to_host() {
        let mut host = MemoryHost {
            input: ".vtex-a-1-x-b { c: d; }".to_string(),
            nested: true,
            ..Default::default()
        };
        let conversion = run(&mut host).unwrap();
        let (clean, global) = host.outputs.clone().unwrap();
        assert_eq!(clean, ".b {\n  c: d;\n}\n");
        assert_eq!(global, ":global(.vtex-a-1-x-b) {\n  c: d;\n}\n");
        assert_eq!(conversion.clean, clean);
    }

    #[test]
    fn test_copy_reports_success_and_failure() {
        let mut host = MemoryHost::default();
        assert!(copy_output(&mut host, ".b {}"));
        assert_eq!(host.clipboard.as_deref(), Some(".b {}"));

        host.clipboard_broken = true;
        assert!(!copy_output(&mut host, ".c {}"));
        assert_eq!(host.clipboard.as_deref(), Some(".b {}"));
    }

    #[test]
    fn test_read_failure_skips_outputs() {
        struct BrokenHost;
        impl ConversionHost for BrokenHost {
            fn input(&mut self) -> Result<String> {
                Err(HostError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "closed",
                )))
            }
            fn nested(&self) -> bool {
                false
            }
            fn set_outputs(&mut self, _: &str, _: &str) -> Result<()> {
                panic!("outputs written after a failed read");
            }
            fn copy_to_clipboard(&mut self, _: &str) -> Result<()> {
                Ok(())
            }
        }
        assert!(matches!(run(&mut BrokenHost), Err(HostError::Io(_))));
    }
}
