//! Text encode/decode for the board wire format.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use weft_board::Board;
use weft_core::{Geometry, BITS_PER_CELL, CELLS_PER_WORD, CELL_MASK};

use crate::error::CodecError;

/// Magic first line of a board file.
pub const HEADER: &str = "P1";

/// Read a board from line-oriented text.
///
/// Validates the header, the dimension line (including the power-of-two
/// constraints), and every cell line. Input beyond the final cell is
/// ignored.
pub fn read_board<R: BufRead>(reader: R) -> Result<Board, CodecError> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => String::new(),
    };
    if header.trim() != HEADER {
        return Err(CodecError::InvalidHeader { found: header });
    }

    let dims = match lines.next() {
        Some(line) => line?,
        None => String::new(),
    };
    let mut parts = dims.split_whitespace();
    let rows = parts.next().and_then(|s| s.parse::<usize>().ok());
    let cols = parts.next().and_then(|s| s.parse::<usize>().ok());
    let (rows, cols) = match (rows, cols, parts.next()) {
        (Some(rows), Some(cols), None) if rows > 0 && cols > 0 => (rows, cols),
        _ => return Err(CodecError::InvalidDimensions { line: dims }),
    };
    let geometry = Geometry::new(rows, cols)?;

    let expected = geometry.cell_count();
    let mut words = Vec::with_capacity(geometry.word_count());
    let mut word = 0u64;
    let mut lanes = 0;
    let mut read = 0;
    while read < expected {
        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(CodecError::UnexpectedEof { expected, read }),
        };
        let bit = match line.trim() {
            "0" => 0u64,
            "1" => 1u64,
            other => {
                return Err(CodecError::InvalidCell {
                    // Header and dimensions occupy lines 1 and 2.
                    line: read + 3,
                    found: other.to_string(),
                });
            }
        };
        word = (word << BITS_PER_CELL) | bit;
        lanes += 1;
        if lanes == CELLS_PER_WORD {
            words.push(word);
            word = 0;
            lanes = 0;
        }
        read += 1;
    }
    // cols is a multiple of the word width, so the last word is complete.
    Ok(Board::from_words(geometry, words))
}

/// Write a board as line-oriented text, the exact inverse of
/// [`read_board`].
pub fn write_board<W: Write>(mut writer: W, board: &Board) -> Result<(), CodecError> {
    let geometry = board.geometry();
    writeln!(writer, "{HEADER}")?;
    writeln!(writer, "{} {}", geometry.rows(), geometry.cols())?;
    for word in board.to_words() {
        for lane in (0..CELLS_PER_WORD as u32).rev() {
            let value = (word >> (lane * BITS_PER_CELL as u32)) & CELL_MASK;
            debug_assert!(value <= 1, "board lane holds a non-cell value: {value:#x}");
            writeln!(writer, "{}", value & 1)?;
        }
    }
    Ok(())
}

/// Read a board from a file.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Board, CodecError> {
    let file = File::open(path)?;
    read_board(BufReader::new(file))
}

/// Write a board to a file, creating or truncating it.
pub fn save_path<P: AsRef<Path>>(path: P, board: &Board) -> Result<(), CodecError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_board(&mut writer, board)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use weft_test_utils::random_board;

    fn text_for(cells: &str, rows: usize, cols: usize) -> String {
        let mut text = format!("P1\n{rows} {cols}\n");
        for ch in cells.chars() {
            text.push(ch);
            text.push('\n');
        }
        text
    }

    // ── decode ──────────────────────────────────────────────────

    #[test]
    fn decodes_a_single_word_row() {
        let text = text_for("1000000000000001", 1, 16);
        let board = read_board(text.as_bytes()).unwrap();
        assert_eq!(board.geometry().rows(), 1);
        assert_eq!(board.geometry().cols(), 16);
        // First cell of the row lands in the most-significant nibble.
        assert_eq!(board.to_words(), vec![(1 << 60) | 1]);
    }

    #[test]
    fn decodes_row_major_order() {
        let cells = concat!("1000000000000000", "0000000000000001");
        let text = text_for(cells, 2, 16);
        let board = read_board(text.as_bytes()).unwrap();
        assert!(board.cell(0, 0));
        assert!(board.cell(1, 15));
        assert_eq!(board.population(), 2);
    }

    #[test]
    fn ignores_trailing_lines() {
        let mut text = text_for("0000000000000000", 1, 16);
        text.push_str("leftover\n");
        assert!(read_board(text.as_bytes()).is_ok());
    }

    // ── decode failures ─────────────────────────────────────────

    #[test]
    fn rejects_missing_header() {
        let err = read_board("P4\n2 16\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CodecError::InvalidHeader { .. }));
        let err = read_board("".as_bytes()).unwrap_err();
        assert!(matches!(err, CodecError::InvalidHeader { .. }));
    }

    #[test]
    fn rejects_malformed_dimension_lines() {
        for dims in ["", "2", "two 16", "2 16 8", "0 16", "-2 16"] {
            let text = format!("P1\n{dims}\n");
            let err = read_board(text.as_bytes()).unwrap_err();
            assert!(
                matches!(err, CodecError::InvalidDimensions { .. }),
                "dims {dims:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_unsupported_geometry() {
        // 3 rows is not a power of two.
        let err = read_board("P1\n3 16\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CodecError::Geometry(_)));
        // 48 columns is word-aligned but packs to 3 words per row.
        let err = read_board("P1\n2 48\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CodecError::Geometry(_)));
    }

    #[test]
    fn rejects_bad_cell_values() {
        let text = "P1\n1 16\n0\n0\n2\n";
        let err = read_board(text.as_bytes()).unwrap_err();
        match err {
            CodecError::InvalidCell { line, found } => {
                assert_eq!(line, 5);
                assert_eq!(found, "2");
            }
            other => panic!("expected InvalidCell, got {other:?}"),
        }
    }

    #[test]
    fn rejects_truncated_input() {
        let text = "P1\n1 16\n0\n1\n0\n";
        let err = read_board(text.as_bytes()).unwrap_err();
        match err {
            CodecError::UnexpectedEof { expected, read } => {
                assert_eq!(expected, 16);
                assert_eq!(read, 3);
            }
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    // ── encode ──────────────────────────────────────────────────

    #[test]
    fn encodes_header_dimensions_and_cells() {
        let board = Board::from_words(Geometry::new(1, 16).unwrap(), vec![(1 << 60) | 1]);
        let mut out = Vec::new();
        write_board(&mut out, &board).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P1"));
        assert_eq!(lines.next(), Some("1 16"));
        let cells: String = lines.collect();
        assert_eq!(cells, "1000000000000001");
    }

    proptest! {
        #[test]
        fn round_trips_random_boards(
            rows_pow in 0u32..6,
            wpr_pow in 0u32..3,
            density in 0.0f64..1.0,
            seed in any::<u64>(),
        ) {
            let geometry = Geometry::new(1 << rows_pow, (1 << wpr_pow) * 16).unwrap();
            let board = random_board(geometry, density, seed);
            let mut encoded = Vec::new();
            write_board(&mut encoded, &board).unwrap();
            let decoded = read_board(encoded.as_slice()).unwrap();
            prop_assert_eq!(decoded.to_words(), board.to_words());
        }
    }
}
