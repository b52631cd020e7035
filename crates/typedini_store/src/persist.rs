//! Reading and writing a store's backing files.
//!
//! Reads are all-or-nothing: every source is parsed and every entry decoded
//! before the first value is assigned. Writes encode the whole store before
//! the file is created, so an unencodable value never truncates it.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use typedini_foundation::{Error, ErrorContext, ErrorKind, Result, Value};
use typedini_format::{Document, SectionBlock, parse, serialize};

use crate::path::{join_path, validate_option_name, validate_section_name};
use crate::section::Section;
use crate::store::Store;

/// Source name used in errors for in-memory readers and writers.
const STREAM_SOURCE: &str = "<stream>";

/// A decoded assignment waiting for the whole read to succeed.
enum Pending {
    Assign {
        section: String,
        option: String,
        value: Value,
    },
    Adopt {
        section: String,
        option: String,
        text: String,
    },
}

impl Store {
    /// Renders every section and option into a [`Document`].
    ///
    /// Sections without options are left out. Their names were never
    /// validated, since [`section`](Self::section) accepts any name.
    ///
    /// # Errors
    ///
    /// Returns an unknown type error if an option's codec was unregistered,
    /// or an encode error if a value cannot be represented losslessly.
    pub fn to_document(&self) -> Result<Document> {
        let mut doc = Document::new();
        for section in self.sections.values().filter(|s| !s.is_empty()) {
            let mut block = SectionBlock::new(section.name());
            for option in section.options() {
                let path = join_path(section.name(), option.name(), self.options.delimiter);
                let text = self
                    .registry
                    .lookup(option.ty())
                    .and_then(|codec| codec.encode(option.value()))
                    .map_err(|err| err.with_context(ErrorContext::new().with_option(path)))?;
                block.insert(option.name(), text);
            }
            doc.push_section(block);
        }
        Ok(doc)
    }

    /// Renders the text that [`write`](Self::write) would persist.
    ///
    /// # Errors
    ///
    /// As [`to_document`](Self::to_document).
    pub fn render(&self) -> Result<String> {
        self.to_document().map(|doc| serialize(&doc))
    }

    /// Writes every section and option to the primary path, replacing its
    /// contents. Overlay sources are never written.
    ///
    /// # Errors
    ///
    /// Returns an encode error before touching the file if any value cannot
    /// be represented, or an I/O error if the file cannot be written.
    pub fn write(&self) -> Result<()> {
        let text = self.render()?;
        let source = self.path.display().to_string();
        let file = File::create(&self.path).map_err(|e| Error::io(&source, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(text.as_bytes())
            .map_err(|e| Error::io(&source, e))?;
        writer.flush().map_err(|e| Error::io(&source, e))?;
        debug!(path = %source, sections = self.sections.len(), "wrote configuration");
        Ok(())
    }

    /// Writes the rendered store to `writer`.
    ///
    /// # Errors
    ///
    /// As [`write`](Self::write).
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let text = self.render()?;
        writer
            .write_all(text.as_bytes())
            .map_err(|e| Error::io(STREAM_SOURCE, e))?;
        writer.flush().map_err(|e| Error::io(STREAM_SOURCE, e))
    }

    /// Reads the primary path, then every overlay source in order, assigning
    /// the values found to defined options.
    ///
    /// Entries for undefined options are skipped in strict sections and
    /// adopted as string options otherwise. A missing overlay is skipped;
    /// a missing primary path is an error. On any error the store is left
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns an I/O error, a parse error, or a decode error naming the
    /// source, line, and option.
    pub fn read(&mut self) -> Result<()> {
        let mut pending = Vec::new();

        let doc = load_document(&self.path)?;
        self.stage(&doc, &self.path.display().to_string(), &mut pending)?;

        for overlay in &self.overlays {
            let source = overlay.display().to_string();
            match load_document(overlay) {
                Ok(doc) => self.stage(&doc, &source, &mut pending)?,
                Err(err) if err.is_not_found() => {
                    warn!(source = %source, "overlay source not found, skipping");
                }
                Err(err) => return Err(err),
            }
        }

        let applied = self.apply(pending);
        debug!(path = %self.path.display(), applied, "read configuration");
        Ok(())
    }

    /// Reads configuration text from `reader` with the same rules as
    /// [`read`](Self::read).
    ///
    /// # Errors
    ///
    /// As [`read`](Self::read).
    pub fn read_from<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::io(STREAM_SOURCE, e))?;
        let doc = parse_document(&text, STREAM_SOURCE)?;

        let mut pending = Vec::new();
        self.stage(&doc, STREAM_SOURCE, &mut pending)?;
        let applied = self.apply(pending);
        debug!(source = STREAM_SOURCE, applied, "read configuration");
        Ok(())
    }

    /// Decodes every entry of `doc` without touching the store.
    fn stage(&self, doc: &Document, source: &str, pending: &mut Vec<Pending>) -> Result<()> {
        let strict = self.options.strict;
        let delimiter = self.options.delimiter;

        for (section_name, key, entry) in doc.triples() {
            let section = self.sections.get(section_name);

            if let Some(option) = section.and_then(|s| s.option(key)) {
                let value = self
                    .registry
                    .lookup(option.ty())
                    .and_then(|codec| codec.decode(&entry.value))
                    .map_err(|err| {
                        err.with_context(
                            ErrorContext::new()
                                .with_source(source)
                                .with_line(entry.line)
                                .with_option(join_path(section_name, key, delimiter)),
                        )
                    })?;
                pending.push(Pending::Assign {
                    section: section_name.to_string(),
                    option: key.to_string(),
                    value,
                });
                continue;
            }

            let section_strict = section.map_or(strict, |s| s.is_strict(strict));
            let addressable = validate_section_name(section_name, delimiter).is_ok()
                && validate_option_name(key).is_ok();
            if section_strict || !addressable {
                debug!(
                    source,
                    line = entry.line,
                    section = section_name,
                    option = key,
                    "ignoring undeclared entry"
                );
                continue;
            }

            pending.push(Pending::Adopt {
                section: section_name.to_string(),
                option: key.to_string(),
                text: entry.value.clone(),
            });
        }
        Ok(())
    }

    /// Assigns staged values. Cannot fail.
    fn apply(&mut self, pending: Vec<Pending>) -> usize {
        let count = pending.len();
        for item in pending {
            match item {
                Pending::Assign {
                    section,
                    option,
                    value,
                } => {
                    if let Some(target) = self
                        .sections
                        .get_mut(&section)
                        .and_then(|s| s.option_mut(&option))
                    {
                        target.set_value(value);
                    }
                }
                Pending::Adopt {
                    section,
                    option,
                    text,
                } => {
                    debug!(section = %section, option = %option, "adopting undeclared entry");
                    self.sections
                        .entry(section.clone())
                        .or_insert_with(|| Section::new(section))
                        .adopt(&option, text);
                }
            }
        }
        count
    }
}

/// Opens, reads, and parses the file at `path`.
fn load_document(path: &Path) -> Result<Document> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| Error::io(&source, e))?;
    let mut text = String::new();
    BufReader::new(file)
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&source, e))?;
    parse_document(&text, &source)
}

fn parse_document(text: &str, source: &str) -> Result<Document> {
    parse(text).map_err(|err| {
        let mut context = ErrorContext::new().with_source(source);
        if let ErrorKind::ParseError { line, .. } = &err.kind {
            context = context.with_line(*line);
        }
        err.with_context(context)
    })
}
