//! Map file parsing.
//!
//! Parsing runs in two phases over the same line sequence:
//! 1. File table: `[N] name` lines up to the `# Sections:` boundary.
//! 2. Symbol table: `0xADDR 0xSIZE [N] ...` lines after the `# Symbols:` boundary.
//!
//! Only the file table is read before `# Sections:`. Symbol-name text later in
//! the file can look like `[N] ...` and must not be picked up as an object file.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{MapError, Result};
use crate::object::{ObjectFileRecord, ObjectFileTable};

pub const SECTIONS_MARKER: &str = "# Sections:";
pub const SYMBOLS_MARKER: &str = "# Symbols:";

static FILE_TABLE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.*?)\]\s*(.*)$").expect("file table regex"));

static SYMBOL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0x[0-9A-Fa-f]*)\s(0x[0-9A-Fa-f]*)\s*\[(.*?)\]").expect("symbol regex")
});

/// Parses a complete map file into its object-file table with sizes summed.
pub fn parse_map(lines: &[&str]) -> Result<ObjectFileTable> {
    let (mut table, resume_at) = parse_file_table(lines)?;
    tracing::debug!("file table: {} object files", table.len());

    let mut scanner = SymbolScanner::new();
    for (offset, line) in lines[resume_at..].iter().enumerate() {
        scanner.feed(resume_at + offset + 1, line, &mut table)?;
    }
    if scanner.state() == ScanState::BeforeSymbols {
        tracing::debug!("no '{}' marker found", SYMBOLS_MARKER);
    }
    tracing::debug!("symbol table: {} symbols matched", scanner.matched());
    Ok(table)
}

/// Reads file-table lines until the `# Sections:` marker.
///
/// Returns the table and the position of the line after the marker, or
/// `lines.len()` if the marker never appears.
pub fn parse_file_table(lines: &[&str]) -> Result<(ObjectFileTable, usize)> {
    let mut table = ObjectFileTable::new();
    for (pos, line) in lines.iter().enumerate() {
        if *line == SECTIONS_MARKER {
            return Ok((table, pos + 1));
        }
        let Some(caps) = FILE_TABLE_LINE.captures(line) else {
            continue;
        };
        let index = parse_index(&caps[1], pos + 1)?;
        let record = ObjectFileRecord::new(index, &caps[2]);
        if let Some(old) = table.insert(record) {
            tracing::warn!(
                "line {}: object file [{}] redeclared, replacing \"{}\"",
                pos + 1,
                index,
                old.declared_name
            );
        }
    }
    Ok((table, lines.len()))
}

/// Position of the symbol scanner relative to the `# Symbols:` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    BeforeSymbols,
    Scanning,
}

/// Accumulates symbol sizes into an [`ObjectFileTable`], one line at a time.
#[derive(Debug)]
pub struct SymbolScanner {
    state: ScanState,
    matched: usize,
}

impl Default for SymbolScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolScanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::BeforeSymbols,
            matched: 0,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Number of symbol lines attributed so far.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Processes one line. `line_no` is 1-based and only used in errors.
    ///
    /// The line is matched against the symbol pattern first and checked for
    /// the marker second, so the transition to `Scanning` takes effect on the
    /// following line.
    pub fn feed(&mut self, line_no: usize, line: &str, table: &mut ObjectFileTable) -> Result<()> {
        if self.state == ScanState::Scanning {
            if let Some(caps) = SYMBOL_LINE.captures(line) {
                let _address = parse_hex(&caps[1], line_no)?;
                let size = parse_hex(&caps[2], line_no)?;
                let index = parse_index(&caps[3], line_no)?;
                let record = table
                    .get_mut(index)
                    .ok_or(MapError::MalformedSymbolReference { line_no, index })?;
                record.add_size(size);
                self.matched += 1;
            }
        }
        if line == SYMBOLS_MARKER {
            self.state = ScanState::Scanning;
        }
        Ok(())
    }
}

fn parse_index(text: &str, line_no: usize) -> Result<u32> {
    text.trim().parse().map_err(|_| MapError::MalformedIndex {
        line_no,
        text: text.to_string(),
    })
}

fn parse_hex(token: &str, line_no: usize) -> Result<u64> {
    let digits = &token[2..];
    u64::from_str_radix(digits, 16).map_err(|_| MapError::MalformedHex {
        line_no,
        token: token.to_string(),
    })
}
